// ============================================================================
// WALLET BAR - Botón de conexión / banner de cuenta conectada
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{button, on_click, ElementBuilder};
use crate::models::Session;
use crate::services::{InjectedProvider, WalletProvider};
use crate::utils::i18n::t;
use crate::viewmodels::VaultViewModel;

pub fn render_wallet_bar(session: &Session, vm: &VaultViewModel, lang: &str) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?
        .id("wallet-bar")?
        .class("wallet-bar")
        .build();

    match session.account() {
        Some(account) => {
            let banner = ElementBuilder::new("p")?
                .class("wallet-connected")
                .text(&format!("{} {}", t("conectado", lang), account))
                .build();
            bar.append_child(&banner)?;
        }
        None => {
            let connect_btn = button("btn-primary", &t("conectar_carteira", lang))?;
            let vm = vm.clone();
            on_click(&connect_btn, move |_| {
                let vm = vm.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let provider = InjectedProvider::detect()
                        .map(|p| Rc::new(p) as Rc<dyn WalletProvider>);
                    vm.connect_wallet(provider).await;
                });
            })?;
            bar.append_child(&connect_btn)?;
        }
    }

    Ok(bar)
}
