//! Browser implementations of the widget's capabilities.
//!
//! - [`InjectedWallet`] - `window.ethereum` (EIP-1193) as a wallet provider
//! - [`BrowserRuntime`] - `spawn_local` and timers
//! - [`ToastSink`] - toast notifications backed by a signal

mod runtime;
mod toasts;
mod wallet;

pub use runtime::BrowserRuntime;
pub use toasts::{Toast, ToastSink};
pub use wallet::InjectedWallet;
