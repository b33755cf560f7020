// ============================================================================
// FETCH PANEL - "Buscar Vault" + resultado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, button, on_click, ElementBuilder, VAULT_INFO_ID};
use crate::models::VaultRecord;
use crate::services::Clock;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;
use crate::views::render_vault_id_input;

pub fn render_fetch_panel(state: &AppState, vm: &VaultViewModel) -> Result<Element, JsValue> {
    let lang = state.language.as_str();
    let panel = ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text(&t("buscar_vault_titulo", lang)).build())?
        .child(render_vault_id_input(&state.vault_id, vm, lang)?)?
        .build();

    let fetch_btn = button("btn-secondary", &t("buscar_btn", lang))?;
    {
        let vm = vm.clone();
        on_click(&fetch_btn, move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move { vm.fetch_vault().await });
        })?;
    }
    append_child(&panel, &fetch_btn)?;

    // Contenedor del resultado: se repinta incrementalmente
    let info = ElementBuilder::new("div")?
        .id(VAULT_INFO_ID)?
        .class("vault-info")
        .build();
    if let Some(record) = &state.vault_record {
        append_child(&info, &render_vault_info(record, vm.clock(), lang)?)?;
    }
    append_child(&panel, &info)?;

    Ok(panel)
}

/// Tabla del cofre leído
pub fn render_vault_info(record: &VaultRecord, clock: &dyn Clock, lang: &str) -> Result<Element, JsValue> {
    let rows = [
        (t("owner", lang), record.owner.to_string()),
        (t("beneficiario", lang), record.beneficiary.to_string()),
        (t("valor", lang), format!("{} ETH", record.amount_eth())),
        (t("desbloqueio", lang), clock.format_local(record.unlock_time)),
        (t("token", lang), record.token_label()),
        (t("retirado", lang), record.withdrawn_label(lang)),
    ];

    let list = ElementBuilder::new("dl")?.class("vault-record").build();
    for (label, value) in rows {
        append_child(&list, &ElementBuilder::new("dt")?.text(&label).build())?;
        append_child(&list, &ElementBuilder::new("dd")?.text(&value).build())?;
    }
    Ok(list)
}
