// ============================================================================
// APP - Aplicación principal (raíz #app + store + viewmodel)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::dom::incremental::{sync_vault_id_inputs, update_tx_modal, update_vault_info};
use crate::state::{AppState, IncrementalUpdate, Store};
use crate::viewmodels::VaultViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    view_model: VaultViewModel,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let store = Store::new(AppState::new(&CONFIG.default_language));
        let view_model = VaultViewModel::browser(store);

        Ok(Self { view_model, root })
    }

    pub fn store(&self) -> &Store {
        self.view_model.store()
    }

    /// Re-render completo
    pub fn render(&mut self) -> Result<(), JsValue> {
        let state = self.store().snapshot();
        log::debug!("🎬 [APP] render (conectado: {})", state.session.is_connected());

        set_inner_html(&self.root, "");
        let app_view = render_app(&state, &self.view_model)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Actualizar solo la sección afectada
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        let state = self.store().snapshot();
        match update_type {
            IncrementalUpdate::VaultInfo => update_vault_info(&state, &self.view_model),
            IncrementalUpdate::TransactionModal => update_tx_modal(&state, &self.view_model),
            IncrementalUpdate::VaultIdInputs => sync_vault_id_inputs(&state),
        }
    }
}
