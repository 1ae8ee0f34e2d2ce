//! UI components built with Leptos.
//!
//! - [`navbar`] - Top navigation bar hosting the wallet button
//! - [`wallet`] - Wallet button and details popup
//! - [`toaster`] - Transaction notifications
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod navbar;
pub mod toaster;
pub mod wallet;

pub use navbar::Navbar;
pub use toaster::Toaster;
