// ============================================================================
// APP VIEW - Layout completo del panel
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder, TX_MODAL_ROOT_ID};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;
use crate::views::{
    render_create_panel, render_fetch_panel, render_tx_modal, render_wallet_bar, render_withdraw_panel,
};

/// Renderizar la app completa a partir del estado actual
pub fn render_app(state: &AppState, vm: &VaultViewModel) -> Result<Element, JsValue> {
    let lang = state.language.as_str();

    let container = ElementBuilder::new("main")?
        .class("app-container")
        .child(ElementBuilder::new("h1")?.text(&t("titulo", lang)).build())?
        .child(render_wallet_bar(&state.session, vm, lang)?)?
        .build();

    append_child(&container, &render_create_panel(&state.draft, vm, lang)?)?;
    append_child(&container, &render_fetch_panel(state, vm)?)?;
    append_child(&container, &render_withdraw_panel(&state.vault_id, vm, lang)?)?;

    let modal_root = ElementBuilder::new("div")?
        .id(TX_MODAL_ROOT_ID)?
        .build();
    if let Some(pending) = &state.pending_tx {
        append_child(&modal_root, &render_tx_modal(pending, vm, lang)?)?;
    }
    append_child(&container, &modal_root)?;

    Ok(container)
}
