//! Wallet connection widget core.
//!
//! This crate provides:
//! - [`ConnectionManager`] - wallet connection state machine
//! - [`TransactionStatusTracker`] - simulated transaction lifecycle
//! - [`WalletProvider`], [`NotificationSink`], [`Runtime`] - capabilities the host supplies
//! - [`display`] - labels derived from the two state machines
//!
//! Nothing here touches browser APIs; the web shell wires these pieces to
//! `window.ethereum`, timers and the DOM.

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod runtime;
pub mod transaction;
pub mod wallet;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{ErrorKind, WalletError};
pub use models::{
    AccountAddress, ConnectionState, ConnectionStatus, NetworkInfo, RawNetwork, TxStatus,
};
pub use notify::{NotificationKind, NotificationSink};
pub use runtime::Runtime;
pub use transaction::{TransactionStatusTracker, run_demo};
pub use wallet::{
    ConnectionEvent, ConnectionManager, NetworkNames, ProviderEvents, Subscription,
    WalletProvider,
};
