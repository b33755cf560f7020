// ============================================================================
// NOTIFIER - Aviso bloqueante al usuario
// ============================================================================

pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()`
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("❌ [NOTICE] No se pudo mostrar el aviso: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [NOTICE] Sin window, aviso descartado: {}", message),
        }
    }
}
