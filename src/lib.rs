// ============================================================================
// SEGUIMIENTO DE ENVÍOS - FRONTEND MVVM (RUST + WASM)
// ============================================================================
// - Components: render Yew (sin lógica)
// - Hooks: conectan ViewModels con Yew
// - ViewModels: resolver del pipeline + controlador de selección/revelado
// - Services: SOLO comunicación API
// - State: Rc<RefCell> + notificaciones
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
