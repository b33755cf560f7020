// ============================================================================
// COFRE CRIPTO - PANEL DE COFRES CON BLOQUEO TEMPORAL (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Acciones del panel (conectar, crear, buscar, sacar)
// - Contract: Binding tipado del contrato (ABI con `sol!`)
// - Services: Wallet inyectada (EIP-1193), avisos y reloj del navegador
// - State: Estado inmutable + Store con subscribers
// - Models: Sesión, borrador, cofre, recibos
// ============================================================================

mod error;
mod config;
mod models;
mod contract;
mod services;
mod state;
mod viewmodels;
mod dom;
mod views;
mod utils;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

// Instancia global de la App (hilo único del navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 [APP] Cofre Cripto - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    // Cada dispatch con cambio visible programa su repintado
    app.store().subscribe(|update_type| {
        Timeout::new(0, move || rerender_app_with_type(update_type)).forget();
    });

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Actualizar la app con el tipo de repintado indicado
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                log::debug!("🔄 [RERENDER] Incremental: {:?}", inc_type);
                let needs_full_render = match app_cell.borrow().as_ref() {
                    Some(app) => match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            let error_str = format!("{:?}", e);
                            if error_str.contains("needs full render") {
                                log::warn!("⚠️ [RERENDER] Sección no encontrada, re-render completo");
                                true
                            } else {
                                log::error!("❌ [RERENDER] Error en actualización incremental: {:?}", e);
                                false
                            }
                        }
                    },
                    None => {
                        log::warn!("⚠️ [RERENDER] App no está inicializada");
                        false
                    }
                };

                if needs_full_render {
                    if let Some(app_mut) = app_cell.borrow_mut().as_mut() {
                        if let Err(e) = app_mut.render() {
                            log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                        }
                    }
                }
            }
            UpdateType::FullRender => {
                log::debug!("🔄 [RERENDER] Re-render completo");
                match app_cell.borrow_mut().as_mut() {
                    Some(app_mut) => {
                        if let Err(e) = app_mut.render() {
                            log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                        }
                    }
                    None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
                }
            }
        }
    });
}
