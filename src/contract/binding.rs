// ============================================================================
// VAULT CONTRACT - Binding tipado sobre la wallet conectada
// ============================================================================
// Cada método es UNA llamada remota. Las transacciones las firma la cuenta
// conectada vía `eth_sendTransaction`; las lecturas van por `eth_call`.
// ============================================================================

use std::fmt;
use std::rc::Rc;
use alloy_primitives::{hex, Address, TxHash, U256};
use serde_json::{json, Value};
use crate::contract::abi;
use crate::error::VaultError;
use crate::models::receipt::parse_tx_hash;
use crate::models::{CreateVaultRequest, FinalizedReceipt, VaultId, VaultRecord};
use crate::services::WalletProvider;

/// Handle al contrato desplegado, firmado por `signer`
#[derive(Clone)]
pub struct VaultContract {
    address: Address,
    signer: Address,
    provider: Rc<dyn WalletProvider>,
    poll_interval_ms: u32,
}

impl fmt::Debug for VaultContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultContract")
            .field("address", &self.address)
            .field("signer", &self.signer)
            .finish()
    }
}

impl VaultContract {
    pub fn new(
        address: Address,
        signer: Address,
        provider: Rc<dyn WalletProvider>,
        poll_interval_ms: u32,
    ) -> Self {
        Self { address, signer, provider, poll_interval_ms }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signer(&self) -> Address {
        self.signer
    }

    /// `createVault(...)` payable. Devuelve el hash en cuanto la wallet acepta la tx.
    pub async fn create_vault(&self, request: &CreateVaultRequest) -> Result<TxHash, VaultError> {
        log::info!(
            "📦 [VAULT] createVault beneficiary={} unlock={} value={} wei",
            request.beneficiary, request.unlock_time, request.deposit
        );
        self.send_transaction(abi::encode_create_vault(request), request.deposit).await
    }

    /// `getVaultInfo(id)` de solo lectura
    pub async fn get_vault_info(&self, id: VaultId) -> Result<VaultRecord, VaultError> {
        log::info!("🔍 [VAULT] getVaultInfo id={}", id);
        let data = self.call(abi::encode_get_vault_info(id)).await?;
        abi::decode_vault_info(&data)
    }

    /// `withdraw(id)`
    pub async fn withdraw(&self, id: VaultId) -> Result<TxHash, VaultError> {
        log::info!("💰 [VAULT] withdraw id={}", id);
        self.send_transaction(abi::encode_withdraw(id), U256::ZERO).await
    }

    /// Espera a que la tx quede minada. Sin timeout: consulta el recibo hasta que exista.
    /// Un error del proveedor en la consulta es transitorio; solo un recibo
    /// malformado o con status 0 termina la espera con error.
    pub async fn wait_for_receipt(&self, hash: TxHash) -> Result<FinalizedReceipt, VaultError> {
        let hash_hex = hex::encode_prefixed(hash);
        log::info!("⏳ [VAULT] Esperando finalización de {}", hash_hex);

        loop {
            let result = match self
                .provider
                .request("eth_getTransactionReceipt", json!([hash_hex]))
                .await
            {
                Ok(result) => result,
                Err(e @ VaultError::Provider { .. }) => {
                    log::warn!("⚠️ [VAULT] Consulta del recibo falló, reintentando: {}", e);
                    self.provider.sleep(self.poll_interval_ms).await;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !result.is_null() {
                let receipt = FinalizedReceipt::from_rpc(&result)?;
                if !receipt.success {
                    log::error!("❌ [VAULT] Transacción revertida: {}", hash_hex);
                    return Err(VaultError::Reverted { hash: hash_hex });
                }
                log::info!("✅ [VAULT] Transacción finalizada en bloque {:?}", receipt.block_number);
                return Ok(receipt);
            }

            self.provider.sleep(self.poll_interval_ms).await;
        }
    }

    async fn send_transaction(&self, data: Vec<u8>, value: U256) -> Result<TxHash, VaultError> {
        let tx = json!({
            "from": self.signer.to_checksum(None),
            "to": self.address.to_checksum(None),
            "data": hex::encode_prefixed(data),
            "value": format!("0x{:x}", value),
        });

        let result = self.provider.request("eth_sendTransaction", json!([tx])).await?;
        let hash = result
            .as_str()
            .ok_or_else(|| VaultError::MalformedResponse(format!("eth_sendTransaction: {}", result)))?;
        parse_tx_hash(hash)
    }

    async fn call(&self, data: Vec<u8>) -> Result<Vec<u8>, VaultError> {
        let call = json!({
            "from": self.signer.to_checksum(None),
            "to": self.address.to_checksum(None),
            "data": hex::encode_prefixed(data),
        });

        let result = self.provider.request("eth_call", json!([call, "latest"])).await?;
        decode_hex_result(&result)
    }
}

fn decode_hex_result(result: &Value) -> Result<Vec<u8>, VaultError> {
    let text = result
        .as_str()
        .ok_or_else(|| VaultError::MalformedResponse(format!("eth_call: {}", result)))?;
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).map_err(|e| VaultError::MalformedResponse(format!("eth_call: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolValue;
    use futures::executor::block_on;
    use crate::testing::{MockProvider, CONTRACT, SIGNER, TX_HASH};

    fn contract(provider: &Rc<MockProvider>) -> VaultContract {
        VaultContract::new(CONTRACT, SIGNER, provider.clone(), 10)
    }

    #[test]
    fn create_vault_attaches_deposit_as_value() {
        let provider = Rc::new(MockProvider::new());
        provider.respond("eth_sendTransaction", Ok(json!(TX_HASH)));

        let request = CreateVaultRequest {
            beneficiary: Address::repeat_byte(0x22),
            unlock_time: 1_767_225_600,
            deposit: U256::from(1_500_000_000_000_000_000u128),
        };
        let hash = block_on(contract(&provider).create_vault(&request)).unwrap();
        assert_eq!(hex::encode_prefixed(hash), TX_HASH);

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        let (method, params) = &calls[0];
        assert_eq!(method, "eth_sendTransaction");
        assert_eq!(params[0]["value"], "0x14d1120d7b160000");
        assert_eq!(params[0]["to"], CONTRACT.to_checksum(None));
        assert_eq!(params[0]["from"], SIGNER.to_checksum(None));
        assert_eq!(
            params[0]["data"],
            hex::encode_prefixed(abi::encode_create_vault(&request))
        );
    }

    #[test]
    fn withdraw_sends_zero_value() {
        let provider = Rc::new(MockProvider::new());
        provider.respond("eth_sendTransaction", Ok(json!(TX_HASH)));

        block_on(contract(&provider).withdraw(VaultId(U256::from(3u64)))).unwrap();
        assert_eq!(provider.calls()[0].1[0]["value"], "0x0");
    }

    #[test]
    fn get_vault_info_decodes_eth_call_result() {
        let provider = Rc::new(MockProvider::new());
        let encoded = (
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            U256::from(1_000_000_000_000_000_000u128),
            U256::from(1_767_225_600u64),
            Address::ZERO,
            false,
        )
            .abi_encode();
        provider.respond("eth_call", Ok(json!(hex::encode_prefixed(encoded))));

        let record = block_on(contract(&provider).get_vault_info(VaultId(U256::ZERO))).unwrap();
        assert_eq!(record.amount_eth(), "1.0");
        assert!(!record.withdrawn);
        assert_eq!(provider.calls()[0].1[1], "latest");
    }

    #[test]
    fn wait_for_receipt_polls_until_mined() {
        let provider = Rc::new(MockProvider::new());
        provider.respond("eth_getTransactionReceipt", Ok(Value::Null));
        provider.respond("eth_getTransactionReceipt", Ok(Value::Null));
        provider.respond(
            "eth_getTransactionReceipt",
            Ok(json!({ "transactionHash": TX_HASH, "blockNumber": "0x2a", "status": "0x1" })),
        );

        let hash = parse_tx_hash(TX_HASH).unwrap();
        let receipt = block_on(contract(&provider).wait_for_receipt(hash)).unwrap();
        assert_eq!(receipt.block_number, Some(42));
        assert_eq!(provider.calls().len(), 3);
        assert_eq!(provider.sleeps(), vec![10, 10]);
    }

    #[test]
    fn transient_receipt_errors_keep_waiting() {
        let provider = Rc::new(MockProvider::new());
        provider.respond("eth_getTransactionReceipt", Ok(Value::Null));
        provider.respond(
            "eth_getTransactionReceipt",
            Err(VaultError::Provider { code: Some(-32603), message: "network timeout".to_string() }),
        );
        provider.respond(
            "eth_getTransactionReceipt",
            Ok(json!({ "transactionHash": TX_HASH, "blockNumber": "0x2a", "status": "0x1" })),
        );

        let hash = parse_tx_hash(TX_HASH).unwrap();
        let receipt = block_on(contract(&provider).wait_for_receipt(hash)).unwrap();
        assert!(receipt.success);
        assert_eq!(provider.calls().len(), 3);
        assert_eq!(provider.sleeps(), vec![10, 10]);
    }

    #[test]
    fn malformed_receipt_ends_the_wait() {
        let provider = Rc::new(MockProvider::new());
        provider.respond("eth_getTransactionReceipt", Ok(json!({ "status": "0x1" })));

        let hash = parse_tx_hash(TX_HASH).unwrap();
        let err = block_on(contract(&provider).wait_for_receipt(hash)).unwrap_err();
        assert!(matches!(err, VaultError::MalformedResponse(_)));
        assert_eq!(provider.calls().len(), 1);
    }

    #[test]
    fn reverted_receipt_is_an_error() {
        let provider = Rc::new(MockProvider::new());
        provider.respond(
            "eth_getTransactionReceipt",
            Ok(json!({ "transactionHash": TX_HASH, "blockNumber": "0x2a", "status": "0x0" })),
        );

        let hash = parse_tx_hash(TX_HASH).unwrap();
        let err = block_on(contract(&provider).wait_for_receipt(hash)).unwrap_err();
        assert_eq!(err, VaultError::Reverted { hash: TX_HASH.to_string() });
    }

    #[test]
    fn non_string_hash_is_malformed() {
        let provider = Rc::new(MockProvider::new());
        provider.respond("eth_sendTransaction", Ok(json!({ "hash": TX_HASH })));

        let err = block_on(contract(&provider).withdraw(VaultId(U256::ZERO))).unwrap_err();
        assert!(matches!(err, VaultError::MalformedResponse(_)));
    }
}
