pub mod session;
pub mod draft;
pub mod vault;
pub mod receipt;

pub use session::Session;
pub use draft::{VaultDraft, DraftField, CreateVaultRequest};
pub use vault::{VaultRecord, VaultId};
pub use receipt::{PendingTransactionReceipt, FinalizedReceipt};
