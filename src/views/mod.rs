// ============================================================================
// VIEWS - Funciones que construyen DOM (sin lógica)
// ============================================================================

pub mod app;
pub mod wallet_bar;
pub mod create_panel;
pub mod vault_id_input;
pub mod fetch_panel;
pub mod withdraw_panel;
pub mod tx_modal;

pub use app::render_app;
pub use wallet_bar::render_wallet_bar;
pub use create_panel::render_create_panel;
pub use vault_id_input::render_vault_id_input;
pub use fetch_panel::{render_fetch_panel, render_vault_info};
pub use withdraw_panel::render_withdraw_panel;
pub use tx_modal::render_tx_modal;
