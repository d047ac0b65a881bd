// ============================================================================
// SCHEDULER - Cola de tareas y temporizadores del event loop
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;

/// Todo corre en un único hilo: las tareas se encolan y los timers disparan
/// callbacks en un tick posterior.
pub trait Scheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Event loop del navegador
#[derive(Clone, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        // Timeout se cancela al hacer drop; forget() lo deja correr
        Timeout::new(delay_ms, callback).forget();
    }
}
