// ============================================================================
// TX MODAL - Confirmación de transacción enviada
// ============================================================================
// Se cierra con click fuera del contenido o con "Fechar". Nunca solo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{append_child, button, on_click, ElementBuilder};
use crate::models::PendingTransactionReceipt;
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;

pub fn render_tx_modal(
    pending: &PendingTransactionReceipt,
    vm: &VaultViewModel,
    lang: &str,
) -> Result<Element, JsValue> {
    // Overlay: click fuera del contenido cierra
    let modal = ElementBuilder::new("div")?
        .id("tx-modal")?
        .class("modal-backdrop show")
        .build();
    {
        let vm = vm.clone();
        on_click(&modal, move |_| vm.dismiss_confirmation())?;
    }

    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .build();
    on_click(&content, move |e: MouseEvent| {
        e.stop_propagation();
    })?;

    let title = ElementBuilder::new("h3")?
        .text(&t("tx_enviada", lang))
        .build();

    let hash = pending.hash_hex();
    let link = ElementBuilder::new("a")?
        .class("tx-link")
        .attr("href", &pending.explorer_url(&vm.config().explorer_url))?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text(&hash)
        .build();

    let hash_line = ElementBuilder::new("p")?
        .child(ElementBuilder::new("strong")?.text(&t("tx_hash", lang)).build())?
        .child(link)?
        .build();

    let close_btn = button("btn-secondary", &t("fechar", lang))?;
    {
        let vm = vm.clone();
        on_click(&close_btn, move |_| vm.dismiss_confirmation())?;
    }

    append_child(&content, &title)?;
    append_child(&content, &hash_line)?;
    append_child(&content, &close_btn)?;
    append_child(&modal, &content)?;

    Ok(modal)
}
