// ============================================================================
// SHOPTRACK - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que dibujan DOM a partir de un PageView (sin lógica)
// - ViewModels: un Page Controller por pantalla
// - Services: SOLO comunicación (HTTP, storage, event loop)
// - State: sesión + navegación con Rc<RefCell>
// - App: máquina de estados de navegación
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::services::{BrowserScheduler, BrowserStorage, GlooHttpClient};
use crate::state::AppState;
use crate::viewmodels::Action;
use crate::views::DomRenderer;

// Instancia única de la aplicación
thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 ShopTrack - Rust Puro + MVVM ({})", CONFIG.environment);

    let renderer = Rc::new(DomRenderer::mount_point()?);
    let state = AppState::new(
        CONFIG.clone(),
        Rc::new(BrowserStorage),
        Rc::new(GlooHttpClient),
        Rc::new(BrowserScheduler),
    );
    let app = App::new(state, renderer.clone());

    // Las acciones de la vista se procesan en otro tick: el re-render
    // resultante nunca suelta el listener que se está ejecutando.
    let weak = Rc::downgrade(&app);
    renderer.set_dispatcher(Rc::new(move |action: Action| {
        let weak = weak.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(app) = weak.upgrade() {
                app.dispatch(action);
            }
        });
    }));

    app.init();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Desmontar la app (hot reload / tests de integración en el navegador)
#[wasm_bindgen]
pub fn teardown_app() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if let Some(app) = app {
        app.teardown();
    }
}
