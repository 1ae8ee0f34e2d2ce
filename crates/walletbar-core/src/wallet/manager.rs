//! Wallet connection lifecycle.
//!
//! [`ConnectionManager`] owns the [`ConnectionState`], reacts to the
//! provider's push events and resolves the friendly network label.
//!
//! # Interleaving
//!
//! Provider calls are suspension points and push events may arrive while a
//! call is outstanding. Each `connect()` captures the current epoch; any
//! completion that finds a different epoch is dropped. Disconnecting, or the
//! wallet revoking access, advances the epoch. Network queries also carry a
//! sequence number so an older answer never replaces a newer one.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, error, info, warn};

use super::names::NetworkNames;
use super::provider::{ProviderEvents, Subscription, WalletProvider};
use crate::error::{ErrorKind, WalletError};
use crate::models::{AccountAddress, ConnectionState};
use crate::runtime::Runtime;

/// Notification sent to connection observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// State, details visibility or the connect guard changed.
    Changed,
    /// A failure was classified. Only user-facing kinds need a notice.
    Error(ErrorKind),
}

type Listener = Rc<dyn Fn(&ConnectionEvent)>;

/// Connection state machine for one injected wallet.
pub struct ConnectionManager<P> {
    this: Weak<Self>,
    provider: Option<P>,
    names: NetworkNames,
    runtime: Rc<dyn Runtime>,
    state: RefCell<ConnectionState>,
    connecting: Cell<bool>,
    details_open: Cell<bool>,
    epoch: Cell<u64>,
    network_seq: Cell<u64>,
    subscription: RefCell<Option<Subscription>>,
    listeners: RefCell<Vec<Listener>>,
}

impl<P: WalletProvider + 'static> ConnectionManager<P> {
    /// Create the manager and register the provider's event listeners.
    ///
    /// `provider` is `None` when no wallet is injected; `connect()` then
    /// reports [`ErrorKind::ProviderUnavailable`].
    pub fn mount(provider: Option<P>, names: NetworkNames, runtime: Rc<dyn Runtime>) -> Rc<Self> {
        let manager = Rc::new_cyclic(|this| Self {
            this: this.clone(),
            provider,
            names,
            runtime,
            state: RefCell::new(ConnectionState::Disconnected),
            connecting: Cell::new(false),
            details_open: Cell::new(false),
            epoch: Cell::new(0),
            network_seq: Cell::new(0),
            subscription: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        if let Err(error) = manager.attach() {
            warn!(%error, "failed to register wallet event listeners");
        }
        manager
    }

    fn attach(&self) -> Result<(), WalletError> {
        let Some(provider) = &self.provider else {
            return Ok(());
        };

        let on_accounts = self.this.clone();
        let on_network = self.this.clone();
        let subscription = provider.subscribe(ProviderEvents {
            accounts_changed: Box::new(move |addresses| {
                if let Some(manager) = on_accounts.upgrade() {
                    manager.handle_accounts_changed(addresses);
                }
            }),
            network_changed: Box::new(move || {
                if let Some(manager) = on_network.upgrade() {
                    let runtime = manager.runtime.clone();
                    runtime.spawn(Box::pin(async move {
                        manager.handle_network_changed().await;
                    }));
                }
            }),
        })?;

        self.subscription.replace(Some(subscription));
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Ask the wallet for account access, then resolve the network.
    ///
    /// Failures never escape: they are logged, reported as
    /// [`ConnectionEvent::Error`], and the state is rolled back.
    pub async fn connect(&self) {
        if self.connecting.get() {
            debug!("connect already in progress");
            return;
        }

        let Some(provider) = &self.provider else {
            warn!("connect requested without a wallet provider");
            self.emit(&ConnectionEvent::Error(ErrorKind::ProviderUnavailable));
            return;
        };

        let epoch = self.advance_epoch();
        self.connecting.set(true);
        let previous = self.state.replace(ConnectionState::Connecting);
        self.emit(&ConnectionEvent::Changed);

        let authorized = provider.request_accounts().await;
        self.connecting.set(false);

        if self.epoch.get() != epoch {
            debug!("discarding authorization result of a superseded connect");
            self.emit(&ConnectionEvent::Changed);
            return;
        }

        let first = authorized.and_then(|accounts| {
            accounts
                .into_iter()
                .next()
                .ok_or(WalletError::NoAccount)
        });

        let account = match first {
            Ok(account) => account,
            Err(error) => {
                error!(%error, "wallet authorization failed");
                {
                    let mut state = self.state.borrow_mut();
                    if *state == ConnectionState::Connecting {
                        *state = previous;
                    }
                }
                self.emit(&ConnectionEvent::Changed);
                self.emit(&ConnectionEvent::Error(ErrorKind::AuthorizationRejected));
                return;
            }
        };

        info!(%account, "wallet connected");
        self.state.replace(ConnectionState::connected(account));
        self.emit(&ConnectionEvent::Changed);

        self.resolve_network(epoch).await;
    }

    /// Forget the account locally. Authorization with the wallet is kept.
    pub fn disconnect(&self) {
        self.advance_epoch();
        self.state.replace(ConnectionState::Disconnected);
        self.details_open.set(false);
        info!("wallet disconnected");
        self.emit(&ConnectionEvent::Changed);
    }

    /// `accountsChanged` handler.
    pub fn handle_accounts_changed(&self, addresses: Vec<AccountAddress>) {
        match addresses.into_iter().next() {
            None => {
                self.advance_epoch();
                self.state.replace(ConnectionState::Disconnected);
                self.details_open.set(false);
                info!("wallet revoked account access");
            }
            Some(account) => {
                debug!(%account, "active account changed");
                let mut state = self.state.borrow_mut();
                match &mut *state {
                    ConnectionState::Connected { account: current, .. } => *current = account,
                    other => *other = ConnectionState::connected(account),
                }
            }
        }
        self.emit(&ConnectionEvent::Changed);
    }

    /// `chainChanged` handler. Keeps the previous network on failure.
    pub async fn handle_network_changed(&self) {
        if !self.state.borrow().is_connected() {
            debug!("network changed while no account is connected");
            return;
        }
        let epoch = self.epoch.get();
        self.resolve_network(epoch).await;
    }

    /// Show the details view, or start connecting when there is no account.
    pub async fn open_details(&self) {
        let has_account = self.state.borrow().is_connected();
        if has_account {
            self.details_open.set(true);
            self.emit(&ConnectionEvent::Changed);
        } else {
            self.connect().await;
        }
    }

    pub fn close_details(&self) {
        if self.details_open.replace(false) {
            self.emit(&ConnectionEvent::Changed);
        }
    }

    /// Release the provider listeners. Also happens on drop.
    pub fn teardown(&self) {
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.cancel();
            debug!("wallet event listeners released");
        }
    }

    async fn resolve_network(&self, epoch: u64) {
        let Some(provider) = &self.provider else {
            return;
        };

        let seq = self.network_seq.get() + 1;
        self.network_seq.set(seq);

        match provider.network().await {
            Ok(raw) => {
                if self.epoch.get() != epoch || self.network_seq.get() != seq {
                    debug!(chain_id = raw.chain_id, "discarding stale network result");
                    return;
                }
                let info = self.names.resolve(raw);
                let applied = match &mut *self.state.borrow_mut() {
                    ConnectionState::Connected { network, .. } => {
                        *network = Some(info);
                        true
                    }
                    _ => false,
                };
                if applied {
                    self.emit(&ConnectionEvent::Changed);
                }
            }
            Err(error) => {
                warn!(%error, "network resolution failed");
                if self.epoch.get() == epoch && self.network_seq.get() == seq {
                    self.emit(&ConnectionEvent::Error(ErrorKind::NetworkResolutionFailed));
                }
            }
        }
    }
}

impl<P> ConnectionManager<P> {
    /// Register an observer for [`ConnectionEvent`]s.
    pub fn subscribe(&self, listener: impl Fn(&ConnectionEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    /// True while an authorization request is outstanding.
    pub fn is_connecting(&self) -> bool {
        self.connecting.get()
    }

    pub fn details_open(&self) -> bool {
        self.details_open.get()
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    fn advance_epoch(&self) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        epoch
    }

    fn emit(&self, event: &ConnectionEvent) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(event);
        }
    }
}
