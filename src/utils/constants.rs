/// Explorador por defecto (testnet Sepolia)
pub const DEFAULT_EXPLORER_URL: &str = "https://sepolia.etherscan.io";

/// Intervalo por defecto entre consultas del recibo (ms)
pub const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u32 = 1000;

pub const DEFAULT_LANGUAGE: &str = "PT";

/// Idiomas con traducción completa
pub const SUPPORTED_LANGUAGES: &[&str] = &["PT", "ES", "EN"];
