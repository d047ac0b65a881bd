// ============================================================================
// DOM RENDERER - Único escritor del mount point (#app)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, get_element_by_id, toggle_class, Listener};
use crate::state::PageId;
use crate::utils::{AUTH_PAGE_CLASS, MOUNT_POINT_ID};
use crate::viewmodels::{Action, PageView};
use crate::views::auth::render_auth_page;
use crate::views::history::render_history_page;
use crate::views::products::render_dashboard_page;
use crate::views::{Dispatcher, RenderCx, Renderer};

pub struct DomRenderer {
    root: Element,
    dispatcher: RefCell<Option<Dispatcher>>,
    /// Listeners del último render; se sueltan (y desregistran) en el siguiente
    listeners: RefCell<Vec<Listener>>,
}

impl DomRenderer {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            dispatcher: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Renderer sobre `#app`
    pub fn mount_point() -> Result<Self, JsValue> {
        get_element_by_id(MOUNT_POINT_ID)
            .map(Self::new)
            .ok_or_else(|| JsValue::from_str("No #app element found"))
    }

    pub fn set_dispatcher(&self, dispatcher: Dispatcher) {
        *self.dispatcher.borrow_mut() = Some(dispatcher);
    }

    fn draw(&self, view: &PageView) -> Result<(), JsValue> {
        let dispatch = self.dispatcher.borrow().clone();
        let dispatch: Dispatcher = match dispatch {
            Some(dispatch) => dispatch,
            None => Rc::new(|action: Action| {
                log::warn!("⚠️ [RENDER] Sin dispatcher, acción para {} perdida", action.target().name())
            }),
        };
        let mut cx = RenderCx::new(dispatch);

        let content = match view {
            PageView::Login(form) => render_auth_page(&mut cx, PageId::Login, form)?,
            PageView::Register(form) => render_auth_page(&mut cx, PageId::Register, form)?,
            PageView::Dashboard(dashboard) => render_dashboard_page(&mut cx, dashboard)?,
            PageView::History(history) => render_history_page(&mut cx, history)?,
        };

        self.reset();
        append_child(&self.root, &content)?;
        *self.listeners.borrow_mut() = cx.into_listeners();
        self.set_auth_layout(matches!(view.page(), PageId::Login | PageId::Register))
    }

    fn reset(&self) {
        self.listeners.borrow_mut().clear();
        clear_children(&self.root);
    }

    /// Las pantallas de login/registro centran el contenido con `auth-page`
    fn set_auth_layout(&self, on: bool) -> Result<(), JsValue> {
        match self.root.parent_element() {
            Some(parent) => toggle_class(&parent, AUTH_PAGE_CLASS, on),
            None => Ok(()),
        }
    }
}

impl Renderer for DomRenderer {
    fn render(&self, view: &PageView) {
        if let Err(e) = self.draw(view) {
            log::error!("❌ [RENDER] Error dibujando {}: {:?}", view.page().name(), e);
        }
    }

    fn clear(&self) {
        self.reset();
        if let Err(e) = self.set_auth_layout(false) {
            log::warn!("⚠️ [RENDER] No se pudo quitar '{}': {:?}", AUTH_PAGE_CLASS, e);
        }
    }
}
