// ============================================================================
// VIEWMODELS - Lógica de presentación (sin DOM)
// ============================================================================

pub mod vault_viewmodel;

pub use vault_viewmodel::VaultViewModel;
