// ============================================================================
// STATE MODULE - Estado inmutable por actualización + store con notificaciones
// ============================================================================

pub mod app_state;
pub mod store;

pub use app_state::*;
pub use store::*;
