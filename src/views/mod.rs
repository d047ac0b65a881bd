// ============================================================================
// VIEWS - Funciones que dibujan DOM a partir de un PageView (sin lógica)
// ============================================================================

pub mod app;
pub mod auth;
pub mod history;
pub mod products;
pub mod shared;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};
use crate::dom::Listener;
use crate::viewmodels::{Action, PageView};

pub use app::DomRenderer;

/// Destino de los renders de las páginas.
/// `render` reemplaza todo lo anterior; `clear` deja el mount point vacío.
pub trait Renderer {
    fn render(&self, view: &PageView);
    fn clear(&self);
}

/// Entrega de acciones al App (siempre diferida a otro tick)
pub type Dispatcher = Rc<dyn Fn(Action)>;

/// Contexto de un render: junta los listeners que se registran mientras se
/// construye el DOM para que el renderer los suelte en el siguiente render.
pub struct RenderCx {
    dispatch: Dispatcher,
    listeners: Vec<Listener>,
}

impl RenderCx {
    pub fn new(dispatch: Dispatcher) -> Self {
        Self {
            dispatch,
            listeners: Vec::new(),
        }
    }

    /// `handler` decide a partir del evento si hay acción que enviar
    pub fn on<F>(&mut self, element: &Element, event_type: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: Fn(&Event) -> Option<Action> + 'static,
    {
        let dispatch = self.dispatch.clone();
        let listener = Listener::new(element, event_type, move |event| {
            if let Some(action) = handler(&event) {
                dispatch(action);
            }
        })?;
        self.listeners.push(listener);
        Ok(())
    }

    pub fn on_click(&mut self, element: &Element, action: Action) -> Result<(), JsValue> {
        self.on(element, "click", move |event| {
            event.prevent_default();
            Some(action.clone())
        })
    }

    /// Submit de un `<form>`: `read` recoge los campos del propio form
    pub fn on_submit<F>(&mut self, form: &Element, read: F) -> Result<(), JsValue>
    where
        F: Fn(&Element) -> Action + 'static,
    {
        let scope = form.clone();
        self.on(form, "submit", move |event| {
            event.prevent_default();
            Some(read(&scope))
        })
    }

    pub fn into_listeners(self) -> Vec<Listener> {
        self.listeners
    }
}
