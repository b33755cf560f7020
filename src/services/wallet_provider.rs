// ============================================================================
// WALLET PROVIDER - SOLO COMUNICACIÓN CON LA WALLET (EIP-1193)
// ============================================================================
// Sin lógica de negocio: recibe método + params JSON y devuelve el resultado
// JSON de `ethereum.request({ method, params })`.
// ============================================================================

use futures::future::LocalBoxFuture;
use js_sys::{Function, Object, Promise, Reflect, JSON};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use crate::error::VaultError;

/// Proveedor EIP-1193. El navegador inyecta uno; los tests usan uno simulado.
pub trait WalletProvider {
    fn request(&self, method: &str, params: Value) -> LocalBoxFuture<'_, Result<Value, VaultError>>;

    /// Pausa entre consultas del recibo
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

/// `window.ethereum` (Metamask y compatibles)
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    /// `None` si el navegador no tiene wallet instalada
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            log::warn!("⚠️ [WALLET] window.ethereum no encontrado");
            return None;
        }
        Some(Self { ethereum })
    }
}

impl WalletProvider for InjectedProvider {
    fn request(&self, method: &str, params: Value) -> LocalBoxFuture<'_, Result<Value, VaultError>> {
        let method = method.to_string();
        Box::pin(async move { eip1193_request(&self.ethereum, &method, &params).await })
    }

    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::TimeoutFuture::new(millis))
    }
}

async fn eip1193_request(ethereum: &JsValue, method: &str, params: &Value) -> Result<Value, VaultError> {
    log::debug!("📡 [RPC] {} {}", method, params);

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(js_error)?;
    let params_js = JSON::parse(&params.to_string()).map_err(js_error)?;
    Reflect::set(&args, &JsValue::from_str("params"), &params_js).map_err(js_error)?;

    let request: Function = Reflect::get(ethereum, &JsValue::from_str("request"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| VaultError::MalformedResponse("ethereum.request não é uma função".to_string()))?;

    let promise: Promise = request
        .call1(ethereum, &args)
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| VaultError::MalformedResponse(format!("{} não retornou uma Promise", method)))?;

    let result = JsFuture::from(promise).await.map_err(js_error)?;
    if result.is_undefined() || result.is_null() {
        return Ok(Value::Null);
    }

    let text: String = JSON::stringify(&result).map_err(js_error)?.into();
    serde_json::from_str(&text).map_err(|e| VaultError::MalformedResponse(format!("{}: {}", method, e)))
}

/// Error JS (rechazo de la Promise) → `VaultError::Provider` con el mensaje crudo
pub fn js_error(value: JsValue) -> VaultError {
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    let code = Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    VaultError::Provider { code, message }
}
