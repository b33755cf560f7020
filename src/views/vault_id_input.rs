// ============================================================================
// VAULT ID INPUT - Campo compartido por "Buscar" y "Sacar"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{input, on_input_value, set_attribute, VAULT_ID_INPUT_CLASS};
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;

/// Cada copia escribe en el mismo `vault_id`; las demás se sincronizan incrementalmente
pub fn render_vault_id_input(value: &str, vm: &VaultViewModel, lang: &str) -> Result<Element, JsValue> {
    let field = input("text", &t("vault_id_placeholder", lang), value)?;
    set_attribute(&field, "class", VAULT_ID_INPUT_CLASS)?;
    set_attribute(&field, "inputmode", "numeric")?;

    let vm = vm.clone();
    on_input_value(&field, move |text| vm.edit_vault_id(text))?;
    Ok(field)
}
