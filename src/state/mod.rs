// ============================================================================
// STATE MODULE - Session Store + estado de navegación (Rc<RefCell>)
// ============================================================================

pub mod app_state;
pub mod session_state;

pub use app_state::*;
pub use session_state::*;
