// ============================================================================
// ERRORES - Taxonomía única de fallos del panel
// ============================================================================
// Todas las acciones (conectar, crear, buscar, sacar) reportan sus fallos con
// este enum. El `Display` es el mensaje crudo que se muestra tras "Erro: ".
// ============================================================================

use thiserror::Error;

/// Código EIP-1193 cuando el usuario rechaza la petición en la wallet
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// No hay proveedor inyectado (`window.ethereum`)
    #[error("nenhuma carteira encontrada no navegador")]
    MissingProvider,

    /// Acción que necesita sesión lanzada sin wallet conectada
    #[error("carteira não conectada")]
    NotConnected,

    #[error("a carteira não retornou nenhuma conta")]
    NoAccounts,

    #[error("endereço inválido: {0}")]
    InvalidAddress(String),

    #[error("valor inválido: {0}")]
    InvalidAmount(String),

    #[error("data de desbloqueio inválida: {0}")]
    InvalidUnlockTime(String),

    #[error("ID do vault inválido: {0}")]
    InvalidVaultId(String),

    /// Error devuelto por la wallet o por el nodo (rechazo, revert en estimación, red)
    #[error("{message}")]
    Provider { code: Option<i64>, message: String },

    /// La respuesta JSON-RPC no tiene la forma esperada
    #[error("resposta inesperada da carteira: {0}")]
    MalformedResponse(String),

    #[error("falha ao decodificar resposta do contrato: {0}")]
    Decode(String),

    /// Recibo con status 0
    #[error("transação revertida: {hash}")]
    Reverted { hash: String },

    #[error("configuração inválida: {0}")]
    InvalidConfig(String),
}

impl VaultError {
    /// ¿El usuario rechazó la petición desde la UI de la wallet?
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, VaultError::Provider { code: Some(USER_REJECTED_CODE), .. })
    }

    /// Errores de precondición: se reportan sin el prefijo "Erro: "
    pub fn is_precondition(&self) -> bool {
        matches!(self, VaultError::MissingProvider | VaultError::NotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_raw_message() {
        let err = VaultError::Provider {
            code: Some(-32000),
            message: "execution reverted: Vault is locked".to_string(),
        };
        assert_eq!(err.to_string(), "execution reverted: Vault is locked");
        assert!(!err.is_user_rejection());
    }

    #[test]
    fn user_rejection_is_detected_by_code() {
        let err = VaultError::Provider {
            code: Some(USER_REJECTED_CODE),
            message: "User rejected the request.".to_string(),
        };
        assert!(err.is_user_rejection());
        assert!(!err.is_precondition());
        assert!(VaultError::NotConnected.is_precondition());
    }
}
