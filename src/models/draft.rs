// ============================================================================
// VAULT DRAFT - Formulario de creación de cofre
// ============================================================================
// El formulario guarda texto tal cual se teclea. Al enviar se convierte a
// `CreateVaultRequest` y es ahí donde se valida.
// ============================================================================

use alloy_primitives::{utils::parse_ether, Address, U256};
use chrono::NaiveDateTime;
use crate::error::VaultError;
use crate::services::Clock;

/// Formatos que produce `<input type="datetime-local">`
const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VaultDraft {
    pub beneficiary: String,
    pub unlock_time: String,
    pub amount: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Beneficiary,
    UnlockTime,
    Amount,
}

/// Petición tipada para `createVault` en moneda nativa
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateVaultRequest {
    pub beneficiary: Address,
    /// Segundos desde epoch (truncado)
    pub unlock_time: u64,
    /// Depósito en wei, se adjunta como `value`
    pub deposit: U256,
}

impl VaultDraft {
    /// Copia del borrador con un campo reemplazado
    pub fn with_field(&self, field: DraftField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            DraftField::Beneficiary => next.beneficiary = value,
            DraftField::UnlockTime => next.unlock_time = value,
            DraftField::Amount => next.amount = value,
        }
        next
    }

    pub fn to_request(&self, clock: &dyn Clock) -> Result<CreateVaultRequest, VaultError> {
        let beneficiary = parse_address(&self.beneficiary)?;

        let local = parse_datetime_local(&self.unlock_time)?;
        let millis = clock
            .local_epoch_millis(local)
            .ok_or_else(|| VaultError::InvalidUnlockTime(self.unlock_time.clone()))?;
        let unlock_time = unlock_seconds_from_millis(millis)?;

        let deposit = parse_deposit(&self.amount)?;

        Ok(CreateVaultRequest { beneficiary, unlock_time, deposit })
    }
}

pub fn parse_address(input: &str) -> Result<Address, VaultError> {
    input
        .trim()
        .parse::<Address>()
        .map_err(|_| VaultError::InvalidAddress(input.to_string()))
}

/// "1.5" → 1.5 × 10^18 wei
pub fn parse_deposit(input: &str) -> Result<U256, VaultError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(VaultError::InvalidAmount(input.to_string()));
    }
    parse_ether(trimmed).map_err(|e| VaultError::InvalidAmount(format!("{} ({})", input, e)))
}

pub fn parse_datetime_local(input: &str) -> Result<NaiveDateTime, VaultError> {
    let trimmed = input.trim();
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| VaultError::InvalidUnlockTime(input.to_string()))
}

/// floor(ms / 1000); antes de epoch no es representable en uint256
pub fn unlock_seconds_from_millis(millis: i64) -> Result<u64, VaultError> {
    let seconds = millis.div_euclid(1000);
    u64::try_from(seconds).map_err(|_| VaultError::InvalidUnlockTime(format!("{} ms", millis)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedOffsetClock, UtcClock};

    const BENEFICIARY: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    fn draft(unlock_time: &str, amount: &str) -> VaultDraft {
        VaultDraft {
            beneficiary: BENEFICIARY.to_string(),
            unlock_time: unlock_time.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn unlock_seconds_truncate_milliseconds() {
        assert_eq!(unlock_seconds_from_millis(1_767_225_600_999).unwrap(), 1_767_225_600);
        assert_eq!(unlock_seconds_from_millis(1_767_225_600_000).unwrap(), 1_767_225_600);
        assert_eq!(unlock_seconds_from_millis(999).unwrap(), 0);
        assert!(unlock_seconds_from_millis(-1).is_err());
    }

    #[test]
    fn request_converts_all_fields() {
        let request = draft("2026-01-01T00:00", "1.5").to_request(&UtcClock).unwrap();
        assert_eq!(request.beneficiary, BENEFICIARY.parse::<Address>().unwrap());
        assert_eq!(request.unlock_time, 1_767_225_600);
        assert_eq!(request.deposit, U256::from(1_500_000_000_000_000_000u128));
    }

    #[test]
    fn unlock_time_follows_local_offset() {
        // UTC-3: medianoche local es 03:00 UTC
        let clock = FixedOffsetClock { offset_minutes: -180 };
        let request = draft("2026-01-01T00:00", "1").to_request(&clock).unwrap();
        assert_eq!(request.unlock_time, 1_767_225_600 + 3 * 3600);
    }

    #[test]
    fn fractional_seconds_are_floored() {
        let request = draft("2026-01-01T00:00:59.750", "1").to_request(&UtcClock).unwrap();
        assert_eq!(request.unlock_time, 1_767_225_659);
    }

    #[test]
    fn malformed_inputs_are_rejected_locally() {
        let mut bad_address = draft("2026-01-01T00:00", "1");
        bad_address.beneficiary = "0x123".to_string();
        assert!(matches!(bad_address.to_request(&UtcClock), Err(VaultError::InvalidAddress(_))));

        assert!(matches!(
            draft("", "1").to_request(&UtcClock),
            Err(VaultError::InvalidUnlockTime(_))
        ));
        assert!(matches!(
            draft("2026-01-01T00:00", "").to_request(&UtcClock),
            Err(VaultError::InvalidAmount(_))
        ));
        assert!(matches!(
            draft("2026-01-01T00:00", "um").to_request(&UtcClock),
            Err(VaultError::InvalidAmount(_))
        ));
    }

    #[test]
    fn with_field_only_touches_one_field() {
        let base = draft("2026-01-01T00:00", "1");
        let next = base.with_field(DraftField::Amount, "2.25".to_string());
        assert_eq!(next.amount, "2.25");
        assert_eq!(next.beneficiary, base.beneficiary);
        assert_eq!(next.unlock_time, base.unlock_time);
    }
}
