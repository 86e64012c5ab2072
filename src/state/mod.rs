// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod timeline_state;

pub use reactivity::*;
pub use timeline_state::*;
