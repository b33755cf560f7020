// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// `closure.forget()` entrega el closure a JS y no se libera nunca, aunque el
// nodo se elimine del DOM. Cada render (completo o del modal) deja sus
// closures vivos: solo registrar listeners en elementos recién creados.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, InputEvent, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback(
        "input",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Input handler que recibe directamente el texto del campo
pub fn on_input_value<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: Fn(String) + 'static,
{
    on_input(element, move |e: InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(target.value());
        }
    })
}
