// ============================================================================
// ABI - Interfaz del contrato de cofres (solo las funciones que usa el panel)
// ============================================================================

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};
use crate::error::VaultError;
use crate::models::{CreateVaultRequest, VaultId, VaultRecord};

sol! {
    interface ITimeLockVault {
        function createVault(address beneficiary, uint256 unlockTime, address tokenAddress, uint256 tokenAmount) external payable returns (uint256 vaultId);

        function getVaultInfo(uint256 vaultId) external view returns (address owner, address beneficiary, uint256 amount, uint256 unlockTime, address tokenAddress, bool withdrawn);

        function withdraw(uint256 vaultId) external;
    }
}

/// Cofre en moneda nativa: token = dirección cero y monto de token = 0.
/// El depósito viaja como `value` de la transacción, no en el calldata.
pub fn encode_create_vault(request: &CreateVaultRequest) -> Vec<u8> {
    ITimeLockVault::createVaultCall {
        beneficiary: request.beneficiary,
        unlockTime: U256::from(request.unlock_time),
        tokenAddress: Address::ZERO,
        tokenAmount: U256::ZERO,
    }
    .abi_encode()
}

pub fn encode_get_vault_info(id: VaultId) -> Vec<u8> {
    ITimeLockVault::getVaultInfoCall { vaultId: id.0 }.abi_encode()
}

pub fn encode_withdraw(id: VaultId) -> Vec<u8> {
    ITimeLockVault::withdrawCall { vaultId: id.0 }.abi_encode()
}

pub fn decode_vault_info(data: &[u8]) -> Result<VaultRecord, VaultError> {
    let info = ITimeLockVault::getVaultInfoCall::abi_decode_returns(data, true)
        .map_err(|e| VaultError::Decode(e.to_string()))?;

    Ok(VaultRecord {
        owner: info.owner,
        beneficiary: info.beneficiary,
        amount: info.amount,
        unlock_time: info.unlockTime.saturating_to::<u64>(),
        token_address: info.tokenAddress,
        withdrawn: info.withdrawn,
    })
}
