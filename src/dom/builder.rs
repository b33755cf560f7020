// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute, set_input_value, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Valor inicial de un `<input>`
    pub fn value(self, value: &str) -> Self {
        set_input_value(&self.element, value);
        self
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

/// `<input>` con tipo y placeholder
pub fn input(kind: &str, placeholder: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .attr("type", kind)?
        .attr("placeholder", placeholder)?
        .value(value)
        .build())
}

/// `<button type="button">` con texto
pub fn button(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(text)
        .build())
}
