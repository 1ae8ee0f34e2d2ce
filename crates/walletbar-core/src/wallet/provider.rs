//! Wallet provider capability.
//!
//! Abstracts an injected EIP-1193 style wallet so the connection logic can
//! run against the browser object or a test double.

use std::fmt;

use async_trait::async_trait;

use crate::error::WalletError;
use crate::models::{AccountAddress, RawNetwork};

/// Callbacks a provider invokes for its push events.
pub struct ProviderEvents {
    /// `accountsChanged`; an empty list means the wallet revoked access.
    pub accounts_changed: Box<dyn Fn(Vec<AccountAddress>)>,
    /// `chainChanged`; the new identity has to be queried separately.
    pub network_changed: Box<dyn Fn()>,
}

/// Live event registration. Dropping it removes the listeners.
#[must_use = "dropping a subscription unregisters its listeners"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Remove the listeners now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Register `listeners` in order with `add`.
///
/// If one registration fails, the listeners already registered are passed to
/// `remove` before the error is returned, so none is left behind without its
/// owner.
pub fn register_listeners<L, E>(
    listeners: Vec<L>,
    mut add: impl FnMut(&L) -> Result<(), E>,
    mut remove: impl FnMut(&L),
) -> Result<Vec<L>, E> {
    for (index, listener) in listeners.iter().enumerate() {
        if let Err(error) = add(listener) {
            listeners[..index].iter().for_each(&mut remove);
            return Err(error);
        }
    }
    Ok(listeners)
}

/// An injected wallet.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Ask the user to authorize account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<AccountAddress>, WalletError>;

    /// Current network identity.
    async fn network(&self) -> Result<RawNetwork, WalletError>;

    /// Register for `accountsChanged` and `chainChanged`.
    fn subscribe(&self, events: ProviderEvents) -> Result<Subscription, WalletError>;
}
