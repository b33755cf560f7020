pub mod wallet_provider;
pub mod notifier;
pub mod clock;

pub use wallet_provider::{WalletProvider, InjectedProvider};
pub use notifier::{Notifier, BrowserNotifier};
pub use clock::{Clock, BrowserClock};
