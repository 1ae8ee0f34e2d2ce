//! Wallet connection.
//!
//! - [`ConnectionManager`] - connection state machine
//! - [`WalletProvider`] - capability implemented by injected wallets
//! - [`NetworkNames`] - raw to friendly network names

mod manager;
mod names;
mod provider;

pub use manager::{ConnectionEvent, ConnectionManager};
pub use names::{NetworkNames, UNKNOWN_NETWORK, parse_chain_id, raw_network_name};
pub use provider::{ProviderEvents, Subscription, WalletProvider, register_listeners};
