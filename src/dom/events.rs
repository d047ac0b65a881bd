// ============================================================================
// EVENT HANDLING - Listeners con dueño
// ============================================================================
// Cada Listener guarda su Closure y la desregistra en Drop: al re-renderizar,
// soltar la lista de listeners anterior los desconecta del DOM viejo.
// Nunca se suelta un Listener desde dentro de su propio callback: las vistas
// solo encolan acciones y el re-render ocurre en otro tick.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(element: &Element, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: element.clone().unchecked_into(),
            event_type,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("⚠️ [DOM] No se pudo quitar listener '{}'", self.event_type);
        }
    }
}
