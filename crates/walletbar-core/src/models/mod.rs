//! Data models shared by the wallet widget.
//!
//! Contains domain types for:
//! - [`ConnectionState`], [`ConnectionStatus`], [`AccountAddress`] - Wallet connection state
//! - [`NetworkInfo`], [`RawNetwork`] - Network identity as reported and as displayed
//! - [`TxStatus`] - Simulated transaction lifecycle

mod network;
mod transaction;
mod wallet;

pub use network::{NetworkInfo, RawNetwork};
pub use transaction::TxStatus;
pub use wallet::{AccountAddress, ConnectionState, ConnectionStatus};
