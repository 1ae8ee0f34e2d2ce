//! Root application module.
//!
//! Contains the main App component and the AppContext that bridges the
//! widget's state machines to Leptos signals.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use tracing::info;
use walletbar_core::config::{DEMO_STEP_DELAY_MS, messages};
use walletbar_core::{
    ConnectionEvent, ConnectionManager, ConnectionState, NetworkNames, NotificationSink, Runtime,
    TransactionStatusTracker, TxStatus, run_demo,
};

use crate::browser::{BrowserRuntime, InjectedWallet, Toast, ToastSink};
use crate::components::{Navbar, Toaster};

// ============================================================================
// Widget
// ============================================================================

/// The non-reactive half of the app: state machines and their capabilities.
struct Widget {
    manager: Rc<ConnectionManager<InjectedWallet>>,
    tracker: Rc<TransactionStatusTracker>,
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// The wallet and transaction signals mirror the state machines: they are
/// written only by the listeners registered in [`AppContext::new`], and
/// components change state through the action methods below.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Wallet connection state.
    pub connection: RwSignal<ConnectionState>,
    /// An authorization request is outstanding.
    pub connecting: RwSignal<bool>,
    /// Wallet details popup visibility.
    pub details_open: RwSignal<bool>,
    /// Simulated transaction status.
    pub tx_status: RwSignal<TxStatus>,
    /// Toasts on screen.
    pub toasts: RwSignal<Vec<Toast>>,
    /// Items in the cart. Written by the storefront's cart through
    /// `use_context::<AppContext>()`; the navbar only reads it.
    pub cart_count: RwSignal<usize>,
    widget: StoredValue<Widget, LocalStorage>,
}

impl AppContext {
    /// Detects the injected wallet, mounts both state machines and wires
    /// their listeners to signals.
    pub fn new() -> Self {
        let connection = RwSignal::new(ConnectionState::default());
        let connecting = RwSignal::new(false);
        let details_open = RwSignal::new(false);
        let tx_status = RwSignal::new(TxStatus::default());
        let toasts = RwSignal::new(Vec::new());

        let runtime: Rc<dyn Runtime> = Rc::new(BrowserRuntime);
        let sink: Rc<dyn NotificationSink> = Rc::new(ToastSink::new(toasts, runtime.clone()));

        let provider = match InjectedWallet::detect() {
            Ok(wallet) => Some(wallet),
            Err(error) => {
                info!(%error, "no injected wallet");
                None
            }
        };
        let manager = ConnectionManager::mount(provider, NetworkNames::builtin(), runtime.clone());

        let observed = Rc::downgrade(&manager);
        let alerts = sink.clone();
        manager.subscribe(move |event| match event {
            ConnectionEvent::Changed => {
                if let Some(manager) = observed.upgrade() {
                    connection.set(manager.state());
                    connecting.set(manager.is_connecting());
                    details_open.set(manager.details_open());
                }
            }
            ConnectionEvent::Error(kind) if kind.is_user_facing() => {
                alerts.alert(messages::PROVIDER_MISSING);
            }
            ConnectionEvent::Error(_) => {}
        });

        let tracker = TransactionStatusTracker::new(sink, runtime);
        tracker.subscribe(move |status| tx_status.set(status));

        Self {
            connection,
            connecting,
            details_open,
            tx_status,
            toasts,
            cart_count: RwSignal::new(0),
            widget: StoredValue::new_local(Widget { manager, tracker }),
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Wallet button: open details when connected, otherwise connect.
    pub fn wallet_clicked(&self) {
        let manager = self.widget.with_value(|w| w.manager.clone());
        wasm_bindgen_futures::spawn_local(async move {
            manager.open_details().await;
        });
    }

    pub fn close_details(&self) {
        self.widget.with_value(|w| w.manager.close_details());
    }

    pub fn disconnect(&self) {
        self.widget.with_value(|w| w.manager.disconnect());
    }

    /// Run the pending → confirm → minted sequence.
    pub fn simulate_mint(&self) {
        let started = self
            .widget
            .with_value(|w| run_demo(&w.tracker, Duration::from_millis(DEMO_STEP_DELAY_MS)));
        if !started {
            info!("mint already in progress");
        }
    }

    /// Release provider listeners and clear transaction toasts.
    fn teardown(&self) {
        self.widget.with_value(|w| {
            w.manager.teardown();
            w.tracker.reset();
        });
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Releases wallet listeners when the root is unmounted
/// - Renders the navbar and the toast stack
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    on_cleanup(move || ctx.teardown());

    view! {
        <Navbar />
        <Toaster />
    }
}
