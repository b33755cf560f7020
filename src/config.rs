use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use crate::error::VaultError;
use crate::utils::constants::{
    DEFAULT_EXPLORER_URL, DEFAULT_LANGUAGE, DEFAULT_RECEIPT_POLL_INTERVAL_MS, SUPPORTED_LANGUAGES,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dirección del contrato desplegado (hex). Vacía = sin configurar.
    pub contract_address: String,
    pub explorer_url: String,
    pub receipt_poll_interval_ms: u32,
    pub default_language: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
            default_language: DEFAULT_LANGUAGE.to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            contract_address: option_env!("CONTRACT_ADDRESS")
                .unwrap_or("").to_string(),
            explorer_url: option_env!("EXPLORER_URL")
                .unwrap_or(DEFAULT_EXPLORER_URL).to_string(),
            receipt_poll_interval_ms: option_env!("RECEIPT_POLL_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_RECEIPT_POLL_INTERVAL_MS),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .map(|lang| lang.to_uppercase())
                .filter(|lang| SUPPORTED_LANGUAGES.contains(&lang.as_str()))
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Dirección del contrato ya validada
    pub fn contract_address(&self) -> Result<Address, VaultError> {
        let raw = self.contract_address.trim();
        if raw.is_empty() {
            return Err(VaultError::InvalidConfig("CONTRACT_ADDRESS não definido".to_string()));
        }
        let address = raw
            .parse::<Address>()
            .map_err(|_| VaultError::InvalidConfig(format!("CONTRACT_ADDRESS inválido: {}", raw)))?;
        if address == Address::ZERO {
            return Err(VaultError::InvalidConfig("CONTRACT_ADDRESS é o endereço zero".to_string()));
        }
        Ok(address)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
