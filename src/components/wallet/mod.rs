//! Wallet button and details popup.

mod button;
mod popup;

pub use button::WalletButton;
pub use popup::WalletPopup;
