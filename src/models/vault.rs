// ============================================================================
// VAULT - Snapshot de solo lectura de un cofre remoto
// ============================================================================

use std::fmt;
use alloy_primitives::{Address, U256};
use crate::error::VaultError;
use crate::utils::i18n::t;

/// Decimales de la moneda nativa (wei → ETH)
pub const ETH_DECIMALS: u8 = 18;

/// Foto de `getVaultInfo`. El contrato es el dueño del ciclo de vida;
/// aquí solo se guarda lo último que se leyó.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultRecord {
    pub owner: Address,
    pub beneficiary: Address,
    /// Monto en wei
    pub amount: U256,
    /// Segundos desde epoch
    pub unlock_time: u64,
    /// `Address::ZERO` = moneda nativa
    pub token_address: Address,
    pub withdrawn: bool,
}

impl VaultRecord {
    pub fn is_native(&self) -> bool {
        self.token_address == Address::ZERO
    }

    /// Dirección del token tal cual; la moneda nativa se marca con "(ETH)"
    pub fn token_label(&self) -> String {
        if self.is_native() {
            format!("{} (ETH)", self.token_address)
        } else {
            self.token_address.to_string()
        }
    }

    /// Monto con formato ETH ("1.5", "0.0")
    pub fn amount_eth(&self) -> String {
        format_eth(self.amount)
    }

    /// "Sim ✅" / "Não ❌"
    pub fn withdrawn_label(&self, lang: &str) -> String {
        if self.withdrawn {
            t("retirado_sim", lang)
        } else {
            t("retirado_nao", lang)
        }
    }
}

/// Identificador de cofre (entero no negativo)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultId(pub U256);

impl VaultId {
    /// Solo dígitos decimales; vacío o con signo se rechaza localmente
    pub fn parse(input: &str) -> Result<Self, VaultError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VaultError::InvalidVaultId(input.to_string()));
        }
        U256::from_str_radix(trimmed, 10)
            .map(VaultId)
            .map_err(|_| VaultError::InvalidVaultId(input.to_string()))
    }
}

impl fmt::Display for VaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// wei → texto decimal sin ceros sobrantes, siempre con al menos un decimal
pub fn format_eth(wei: U256) -> String {
    let unit = U256::from(10u64).pow(U256::from(ETH_DECIMALS));
    let whole = wei / unit;
    let fraction = (wei % unit).to_string();

    let padded = format!("{:0>width$}", fraction, width = ETH_DECIMALS as usize);
    let trimmed = padded.trim_end_matches('0');
    if trimmed.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(withdrawn: bool) -> VaultRecord {
        VaultRecord {
            owner: Address::repeat_byte(0x11),
            beneficiary: Address::repeat_byte(0x22),
            amount: U256::from(1_500_000_000_000_000_000u128),
            unlock_time: 1_767_225_600,
            token_address: Address::ZERO,
            withdrawn,
        }
    }

    #[test]
    fn withdrawn_flag_renders_portuguese_labels() {
        assert_eq!(record(false).withdrawn_label("PT"), "Não ❌");
        assert_eq!(record(true).withdrawn_label("PT"), "Sim ✅");
    }

    #[test]
    fn amounts_format_like_ether() {
        assert_eq!(record(false).amount_eth(), "1.5");
        assert_eq!(format_eth(U256::ZERO), "0.0");
        assert_eq!(format_eth(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_eth(U256::from(20_000_000_000_000_000_000u128)), "20.0");
    }

    #[test]
    fn vault_id_accepts_only_plain_integers() {
        assert_eq!(VaultId::parse(" 42 ").unwrap(), VaultId(U256::from(42u64)));
        assert_eq!(VaultId::parse("0").unwrap(), VaultId(U256::ZERO));
        for bad in ["", "   ", "-1", "1.5", "0x10", "abc"] {
            assert!(matches!(VaultId::parse(bad), Err(VaultError::InvalidVaultId(_))), "{bad}");
        }
    }

    #[test]
    fn zero_token_address_means_native_currency() {
        assert!(record(false).is_native());
    }

    #[test]
    fn token_label_always_shows_the_address() {
        assert_eq!(
            record(false).token_label(),
            "0x0000000000000000000000000000000000000000 (ETH)"
        );

        let mut erc20 = record(false);
        erc20.token_address = Address::repeat_byte(0x33);
        assert!(!erc20.is_native());
        assert_eq!(erc20.token_label(), Address::repeat_byte(0x33).to_string());
    }
}
