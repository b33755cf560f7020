// ============================================================================
// CREATE PANEL - Formulario "Criar Vault (ETH)"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, button, input, on_click, on_input_value, ElementBuilder};
use crate::models::{DraftField, VaultDraft};
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;

pub fn render_create_panel(draft: &VaultDraft, vm: &VaultViewModel, lang: &str) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text(&t("criar_vault_titulo", lang)).build())?
        .build();

    let fields = [
        (DraftField::Beneficiary, "text", t("beneficiario_placeholder", lang), draft.beneficiary.as_str()),
        (DraftField::UnlockTime, "datetime-local", String::new(), draft.unlock_time.as_str()),
        (DraftField::Amount, "text", t("valor_placeholder", lang), draft.amount.as_str()),
    ];

    for (field, kind, placeholder, value) in fields {
        let field_input = input(kind, &placeholder, value)?;
        let vm = vm.clone();
        on_input_value(&field_input, move |text| vm.edit_draft(field, text))?;
        append_child(&panel, &field_input)?;
    }

    let create_btn = button("btn-primary", &t("criar_vault_btn", lang))?;
    {
        let vm = vm.clone();
        on_click(&create_btn, move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move { vm.create_vault().await });
        })?;
    }
    append_child(&panel, &create_btn)?;

    Ok(panel)
}
