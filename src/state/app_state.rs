// ============================================================================
// APP STATE - Estado global del panel + reducer
// ============================================================================
// Cada cambio es una `Action`; `reduce` produce un `AppState` nuevo sin
// tocar el anterior. La vista nunca escribe en el estado directamente.
// ============================================================================

use alloy_primitives::Address;
use crate::contract::VaultContract;
use crate::models::{DraftField, PendingTransactionReceipt, Session, VaultDraft, VaultRecord};

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo una sección)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de sesión)
    FullRender,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Panel de resultado de la búsqueda
    VaultInfo,
    /// Mostrar/ocultar modal de la transacción
    TransactionModal,
    /// Sincronizar los dos campos de "Vault ID"
    VaultIdInputs,
}

#[derive(Clone, Debug)]
pub enum Action {
    Connected { account: Address, contract: VaultContract },
    DraftEdited { field: DraftField, value: String },
    VaultIdEdited(String),
    VaultLoaded(VaultRecord),
    TransactionSubmitted(PendingTransactionReceipt),
    ConfirmationDismissed,
}

impl Action {
    /// Qué hay que repintar tras aplicar la acción. `None`: el DOM ya refleja el cambio.
    pub fn update_type(&self) -> Option<UpdateType> {
        match self {
            Action::Connected { .. } => Some(UpdateType::FullRender),
            Action::DraftEdited { .. } => None,
            Action::VaultIdEdited(_) => Some(UpdateType::Incremental(IncrementalUpdate::VaultIdInputs)),
            Action::VaultLoaded(_) => Some(UpdateType::Incremental(IncrementalUpdate::VaultInfo)),
            Action::TransactionSubmitted(_) | Action::ConfirmationDismissed => {
                Some(UpdateType::Incremental(IncrementalUpdate::TransactionModal))
            }
        }
    }
}

/// Estado global del panel (efímero: se pierde al recargar)
#[derive(Clone, Debug)]
pub struct AppState {
    pub session: Session,
    pub draft: VaultDraft,
    /// Campo compartido por "Buscar" y "Sacar"
    pub vault_id: String,
    pub vault_record: Option<VaultRecord>,
    pub pending_tx: Option<PendingTransactionReceipt>,
    pub language: String,
}

impl AppState {
    pub fn new(language: &str) -> Self {
        Self {
            session: Session::Disconnected,
            draft: VaultDraft::default(),
            vault_id: String::new(),
            vault_record: None,
            pending_tx: None,
            language: language.to_uppercase(),
        }
    }

    /// ¿Modal de la transacción visible?
    pub fn is_modal_visible(&self) -> bool {
        self.pending_tx.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("PT")
    }
}

/// Reducer puro: estado anterior + acción → estado nuevo
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Connected { account, contract } => {
            next.session = Session::connected(account, contract);
        }
        Action::DraftEdited { field, value } => {
            next.draft = state.draft.with_field(field, value);
        }
        Action::VaultIdEdited(value) => {
            next.vault_id = value;
        }
        Action::VaultLoaded(record) => {
            next.vault_record = Some(record);
        }
        Action::TransactionSubmitted(receipt) => {
            next.pending_tx = Some(receipt);
        }
        Action::ConfirmationDismissed => {
            next.pending_tx = None;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use alloy_primitives::U256;
    use crate::models::receipt::parse_tx_hash;
    use crate::testing::{MockProvider, CONTRACT, SIGNER, TX_HASH};

    fn pending() -> PendingTransactionReceipt {
        PendingTransactionReceipt::new(parse_tx_hash(TX_HASH).unwrap())
    }

    fn record() -> VaultRecord {
        VaultRecord {
            owner: SIGNER,
            beneficiary: SIGNER,
            amount: U256::from(1u64),
            unlock_time: 0,
            token_address: Address::ZERO,
            withdrawn: false,
        }
    }

    #[test]
    fn connect_sets_account_and_contract_together() {
        let contract = VaultContract::new(CONTRACT, SIGNER, Rc::new(MockProvider::new()), 1000);
        let state = reduce(&AppState::default(), Action::Connected { account: SIGNER, contract });

        assert_eq!(state.session.account(), Some(SIGNER));
        assert_eq!(state.session.contract().map(|c| c.signer()), Some(SIGNER));
        assert_eq!(state.session.contract().map(|c| c.address()), Some(CONTRACT));
    }

    #[test]
    fn reduce_leaves_previous_state_untouched() {
        let before = AppState::default();
        let after = reduce(
            &before,
            Action::DraftEdited { field: DraftField::Beneficiary, value: "0xabc".to_string() },
        );
        assert_eq!(before.draft.beneficiary, "");
        assert_eq!(after.draft.beneficiary, "0xabc");
    }

    #[test]
    fn modal_shows_on_submit_and_hides_on_dismiss() {
        let submitted = reduce(&AppState::default(), Action::TransactionSubmitted(pending()));
        assert!(submitted.is_modal_visible());

        let dismissed = reduce(&submitted, Action::ConfirmationDismissed);
        assert!(!dismissed.is_modal_visible());

        // Cerrar dos veces sigue oculto
        assert!(!reduce(&dismissed, Action::ConfirmationDismissed).is_modal_visible());
    }

    #[test]
    fn new_submission_replaces_pending_receipt() {
        let first = reduce(&AppState::default(), Action::TransactionSubmitted(pending()));
        let other = PendingTransactionReceipt::new(parse_tx_hash(&format!("0x{}", "11".repeat(32))).unwrap());
        let second = reduce(&first, Action::TransactionSubmitted(other.clone()));
        assert_eq!(second.pending_tx, Some(other));
    }

    #[test]
    fn vault_snapshot_is_stored_as_is() {
        let state = reduce(&AppState::default(), Action::VaultLoaded(record()));
        assert_eq!(state.vault_record, Some(record()));
    }

    #[test]
    fn draft_edits_do_not_trigger_rerender() {
        let edit = Action::DraftEdited { field: DraftField::Amount, value: "1".to_string() };
        assert_eq!(edit.update_type(), None);
        assert_eq!(
            Action::ConfirmationDismissed.update_type(),
            Some(UpdateType::Incremental(IncrementalUpdate::TransactionModal))
        );
    }
}
