// ============================================================================
// RECEIPTS - Transacción enviada (modal) y transacción finalizada
// ============================================================================

use alloy_primitives::{hex, TxHash};
use serde::Deserialize;
use crate::error::VaultError;

/// Hash de la última transacción enviada, mientras el modal esté visible
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransactionReceipt {
    pub hash: TxHash,
}

impl PendingTransactionReceipt {
    pub fn new(hash: TxHash) -> Self {
        Self { hash }
    }

    /// Hash en hex con prefijo 0x (tal cual lo muestra el explorador)
    pub fn hash_hex(&self) -> String {
        hex::encode_prefixed(self.hash)
    }

    /// Enlace al explorador de bloques: `<base>/tx/<hash>`
    pub fn explorer_url(&self, explorer_base: &str) -> String {
        format!("{}/tx/{}", explorer_base.trim_end_matches('/'), self.hash_hex())
    }
}

/// Recibo de `eth_getTransactionReceipt` (solo los campos que usamos)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizedReceipt {
    pub hash: TxHash,
    pub block_number: Option<u64>,
    pub success: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: String,
    #[serde(default)]
    block_number: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl FinalizedReceipt {
    /// Parsear el JSON-RPC del recibo. `status` ausente (pre-Byzantium) cuenta como éxito.
    pub fn from_rpc(value: &serde_json::Value) -> Result<Self, VaultError> {
        let raw: RawReceipt = serde_json::from_value(value.clone())
            .map_err(|e| VaultError::MalformedResponse(format!("recibo: {}", e)))?;

        let hash = parse_tx_hash(&raw.transaction_hash)?;
        let block_number = match raw.block_number.as_deref() {
            Some(quantity) => Some(parse_quantity(quantity)?),
            None => None,
        };
        let success = match raw.status.as_deref() {
            Some(status) => parse_quantity(status)? == 1,
            None => true,
        };

        Ok(Self { hash, block_number, success })
    }
}

/// Hash de transacción en hex (32 bytes)
pub fn parse_tx_hash(input: &str) -> Result<TxHash, VaultError> {
    input
        .trim()
        .parse::<TxHash>()
        .map_err(|_| VaultError::MalformedResponse(format!("hash de transação inválido: {}", input)))
}

/// Cantidad JSON-RPC ("0x1a")
fn parse_quantity(input: &str) -> Result<u64, VaultError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    u64::from_str_radix(digits, 16)
        .map_err(|_| VaultError::MalformedResponse(format!("quantidade inválida: {}", input)))
}
