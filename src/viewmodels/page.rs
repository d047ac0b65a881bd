// ============================================================================
// PAGE - Contrato de un Page Controller + su contexto de montaje
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use crate::state::{AppState, Navigator, PageId};
use crate::viewmodels::{Action, PageView};
use crate::views::Renderer;

/// Un Page Controller posee una vista de página completa y sus datos.
pub trait PageController {
    fn page(&self) -> PageId;
    /// Primer render + cargas iniciales
    fn mount(&self);
    /// Idempotente: reemplaza todo el DOM anterior de la página
    fn render(&self);
    fn handle(&self, action: Action);
    /// A partir de aquí cualquier respuesta pendiente se descarta
    fn unmount(&self);
}

/// Lo que recibe una página al montarse
#[derive(Clone)]
pub struct PageContext {
    pub state: AppState,
    pub navigator: Navigator,
    renderer: Rc<dyn Renderer>,
    mounted: Rc<Cell<bool>>,
    seq: Rc<Cell<u64>>,
}

impl PageContext {
    pub fn new(state: AppState, renderer: Rc<dyn Renderer>, navigator: Navigator) -> Self {
        Self {
            state,
            navigator,
            renderer,
            mounted: Rc::new(Cell::new(true)),
            seq: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn detach(&self) {
        self.mounted.set(false);
    }

    /// Dibujar solo si la página sigue montada (nunca tocar DOM ajeno)
    pub fn render(&self, view: PageView) {
        if !self.is_mounted() {
            log::debug!("🚫 [PAGE] Render de {} descartado: página desmontada", view.page().name());
            return;
        }
        self.renderer.render(&view);
    }

    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.state.scheduler.spawn(Box::pin(task));
    }

    pub fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.state.scheduler.after(delay_ms, Box::new(callback));
    }

    /// IDs locales para avisos y overlays
    pub fn next_id(&self) -> u64 {
        let next = self.seq.get() + 1;
        self.seq.set(next);
        next
    }
}

/// Acción que llegó a una página que no le corresponde
pub(crate) fn ignore_foreign(page: PageId, action: &Action) {
    // sin {:?}: la acción puede llevar la contraseña
    log::warn!(
        "⚠️ [PAGE] {} ignora una acción dirigida a {}",
        page.name(),
        action.target().name()
    );
}
