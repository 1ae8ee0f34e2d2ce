//! Test doubles for the provider, runtime and notification capabilities.
//!
//! Enabled for unit tests and, through the `mock` feature, for integration
//! tests and downstream crates.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::error::WalletError;
use crate::models::{AccountAddress, RawNetwork};
use crate::notify::{NotificationKind, NotificationSink};
use crate::runtime::Runtime;
use crate::wallet::{ProviderEvents, Subscription, WalletProvider};

// ============================================================================
// FakeProvider
// ============================================================================

type Reply<T> = Result<T, WalletError>;

struct Listeners {
    accounts_changed: Rc<dyn Fn(Vec<AccountAddress>)>,
    network_changed: Rc<dyn Fn()>,
}

#[derive(Default)]
struct ProviderInner {
    scripted_accounts: RefCell<VecDeque<Reply<Vec<AccountAddress>>>>,
    scripted_networks: RefCell<VecDeque<Reply<RawNetwork>>>,
    deferred_accounts: RefCell<VecDeque<oneshot::Sender<Reply<Vec<AccountAddress>>>>>,
    deferred_networks: RefCell<VecDeque<oneshot::Sender<Reply<RawNetwork>>>>,
    account_requests: Cell<usize>,
    network_requests: Cell<usize>,
    listeners: RefCell<Option<Listeners>>,
    unsubscribes: Cell<usize>,
}

/// Scriptable wallet.
///
/// Replies queued with `push_*` are returned immediately. A request made
/// with an empty queue stays pending until the matching `resolve_*` call,
/// which lets tests interleave push events with suspended requests.
#[derive(Clone, Default)]
pub struct FakeProvider {
    inner: Rc<ProviderInner>,
}

impl FakeProvider {
    pub fn push_accounts(&self, reply: Reply<Vec<AccountAddress>>) {
        self.inner.scripted_accounts.borrow_mut().push_back(reply);
    }

    pub fn push_network(&self, reply: Reply<RawNetwork>) {
        self.inner.scripted_networks.borrow_mut().push_back(reply);
    }

    /// Answer the oldest pending account request.
    pub fn resolve_accounts(&self, reply: Reply<Vec<AccountAddress>>) -> bool {
        let sender = self.inner.deferred_accounts.borrow_mut().pop_front();
        sender.is_some_and(|sender| sender.send(reply).is_ok())
    }

    /// Answer the oldest pending network request.
    pub fn resolve_network(&self, reply: Reply<RawNetwork>) -> bool {
        let sender = self.inner.deferred_networks.borrow_mut().pop_front();
        sender.is_some_and(|sender| sender.send(reply).is_ok())
    }

    pub fn account_requests(&self) -> usize {
        self.inner.account_requests.get()
    }

    pub fn network_requests(&self) -> usize {
        self.inner.network_requests.get()
    }

    pub fn is_subscribed(&self) -> bool {
        self.inner.listeners.borrow().is_some()
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.inner.unsubscribes.get()
    }

    /// Fire `accountsChanged` if a listener is registered.
    pub fn emit_accounts_changed(&self, addresses: Vec<AccountAddress>) {
        let callback = self
            .inner
            .listeners
            .borrow()
            .as_ref()
            .map(|l| l.accounts_changed.clone());
        if let Some(callback) = callback {
            callback(addresses);
        }
    }

    /// Fire `chainChanged` if a listener is registered.
    pub fn emit_network_changed(&self) {
        let callback = self
            .inner
            .listeners
            .borrow()
            .as_ref()
            .map(|l| l.network_changed.clone());
        if let Some(callback) = callback {
            callback();
        }
    }
}

async fn deferred<T>(receiver: oneshot::Receiver<Reply<T>>) -> Reply<T> {
    receiver
        .await
        .unwrap_or_else(|_| Err(WalletError::RequestRejected("request dropped".into())))
}

#[async_trait(?Send)]
impl WalletProvider for FakeProvider {
    async fn request_accounts(&self) -> Result<Vec<AccountAddress>, WalletError> {
        let inner = &self.inner;
        inner.account_requests.set(inner.account_requests.get() + 1);
        let scripted = inner.scripted_accounts.borrow_mut().pop_front();
        match scripted {
            Some(reply) => reply,
            None => {
                let (sender, receiver) = oneshot::channel();
                inner.deferred_accounts.borrow_mut().push_back(sender);
                deferred(receiver).await
            }
        }
    }

    async fn network(&self) -> Result<RawNetwork, WalletError> {
        let inner = &self.inner;
        inner.network_requests.set(inner.network_requests.get() + 1);
        let scripted = inner.scripted_networks.borrow_mut().pop_front();
        match scripted {
            Some(reply) => reply,
            None => {
                let (sender, receiver) = oneshot::channel();
                inner.deferred_networks.borrow_mut().push_back(sender);
                deferred(receiver).await
            }
        }
    }

    fn subscribe(&self, events: ProviderEvents) -> Result<Subscription, WalletError> {
        self.inner.listeners.replace(Some(Listeners {
            accounts_changed: Rc::from(events.accounts_changed),
            network_changed: Rc::from(events.network_changed),
        }));

        let inner = self.inner.clone();
        Ok(Subscription::new(move || {
            inner.listeners.replace(None);
            inner.unsubscribes.set(inner.unsubscribes.get() + 1);
        }))
    }
}

// ============================================================================
// ManualRuntime
// ============================================================================

/// Runtime that only makes progress when the test asks it to.
#[derive(Default)]
pub struct ManualRuntime {
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
    timers: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualRuntime {
    /// Drive spawned tasks, including ones spawned meanwhile, to completion.
    pub async fn run_tasks(&self) {
        loop {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                task.await;
            }
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Delays of the timers currently scheduled, in scheduling order.
    pub fn timer_delays(&self) -> Vec<Duration> {
        self.timers.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Fire every timer scheduled so far. Timers scheduled by the callbacks
    /// wait for the next call. Returns how many fired.
    pub fn fire_timers(&self) -> usize {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        let fired = timers.len();
        for (_, callback) in timers {
            callback();
        }
        fired
    }
}

impl Runtime for ManualRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        self.timers.borrow_mut().push((delay, callback));
    }
}

// ============================================================================
// RecordingSink
// ============================================================================

/// One call made on a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkEvent {
    Show {
        kind: NotificationKind,
        message: String,
        id: String,
    },
    Dismiss(String),
    Alert(String),
}

/// Notification sink that remembers every call.
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Ids currently on screen, oldest first.
    pub fn visible(&self) -> Vec<String> {
        let mut visible: Vec<String> = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                SinkEvent::Show { id, .. } => {
                    visible.retain(|v| v != id);
                    visible.push(id.clone());
                }
                SinkEvent::Dismiss(id) => visible.retain(|v| v != id),
                SinkEvent::Alert(_) => {}
            }
        }
        visible
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn show(&self, kind: NotificationKind, message: &str, id: &str) {
        self.events.borrow_mut().push(SinkEvent::Show {
            kind,
            message: message.to_string(),
            id: id.to_string(),
        });
    }

    fn dismiss(&self, id: &str) {
        self.events
            .borrow_mut()
            .push(SinkEvent::Dismiss(id.to_string()));
    }

    fn alert(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(SinkEvent::Alert(message.to_string()));
    }
}
