// ============================================================================
// WITHDRAW PANEL - "Sacar Vault"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{button, on_click, ElementBuilder};
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;
use crate::views::render_vault_id_input;

pub fn render_withdraw_panel(vault_id: &str, vm: &VaultViewModel, lang: &str) -> Result<Element, JsValue> {
    let withdraw_btn = button("btn-danger", &t("sacar_btn", lang))?;
    {
        let vm = vm.clone();
        on_click(&withdraw_btn, move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move { vm.withdraw_vault().await });
        })?;
    }

    Ok(ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text(&t("sacar_vault_titulo", lang)).build())?
        .child(render_vault_id_input(vault_id, vm, lang)?)?
        .child(withdraw_btn)?
        .build())
}
