// ============================================================================
// SESSION - Wallet conectada + binding del contrato
// ============================================================================

use alloy_primitives::Address;
use crate::contract::VaultContract;

/// Sesión de la wallet. Cuenta y contrato van siempre juntos:
/// no existe un estado con uno sin el otro.
#[derive(Clone, Debug, Default)]
pub enum Session {
    #[default]
    Disconnected,
    Connected {
        account: Address,
        contract: VaultContract,
    },
}

impl Session {
    pub fn connected(account: Address, contract: VaultContract) -> Self {
        Session::Connected { account, contract }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Session::Connected { .. })
    }

    /// Cuenta autorizada (la primera que devolvió la wallet)
    pub fn account(&self) -> Option<Address> {
        match self {
            Session::Connected { account, .. } => Some(*account),
            Session::Disconnected => None,
        }
    }

    /// Handle del contrato firmado por la cuenta conectada
    pub fn contract(&self) -> Option<&VaultContract> {
        match self {
            Session::Connected { contract, .. } => Some(contract),
            Session::Disconnected => None,
        }
    }
}
