// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza las secciones que cambiaron, sin re-renderizar todo
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, get_element_by_id, input_value, query_selector_all, set_inner_html, set_input_value};
use crate::state::AppState;
use crate::viewmodels::VaultViewModel;
use crate::views::{render_tx_modal, render_vault_info};

/// ID del contenedor del resultado de la búsqueda
pub const VAULT_INFO_ID: &str = "vault-info";
/// ID del contenedor del modal
pub const TX_MODAL_ROOT_ID: &str = "tx-modal-root";
/// Clase de los campos "Vault ID" (buscar + sacar)
pub const VAULT_ID_INPUT_CLASS: &str = "vault-id-input";

/// Repintar el bloque del cofre buscado
pub fn update_vault_info(state: &AppState, vm: &VaultViewModel) -> Result<(), JsValue> {
    let container = get_element_by_id(VAULT_INFO_ID)
        .ok_or_else(|| JsValue::from_str("#vault-info not found, needs full render"))?;

    set_inner_html(&container, "");
    if let Some(record) = &state.vault_record {
        let info = render_vault_info(record, vm.clock(), &state.language)?;
        append_child(&container, &info)?;
    }

    log::debug!("🔄 [INCREMENTAL] vault-info actualizado");
    Ok(())
}

/// Mostrar u ocultar el modal de la transacción
pub fn update_tx_modal(state: &AppState, vm: &VaultViewModel) -> Result<(), JsValue> {
    let root = get_element_by_id(TX_MODAL_ROOT_ID)
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;

    set_inner_html(&root, "");
    if let Some(pending) = &state.pending_tx {
        let modal = render_tx_modal(pending, vm, &state.language)?;
        append_child(&root, &modal)?;
        log::info!("🪟 [INCREMENTAL] Modal abierto para {}", pending.hash_hex());
    } else {
        log::debug!("🪟 [INCREMENTAL] Modal cerrado");
    }
    Ok(())
}

/// Copiar `vault_id` a todos los campos "Vault ID".
/// El campo que el usuario está tecleando ya tiene el valor y no se toca (cursor intacto).
pub fn sync_vault_id_inputs(state: &AppState) -> Result<(), JsValue> {
    let selector = format!(".{}", VAULT_ID_INPUT_CLASS);
    for input in query_selector_all(&selector)? {
        if input_value(&input) != state.vault_id {
            set_input_value(&input, &state.vault_id);
        }
    }
    Ok(())
}
