//! End-to-end flows across the connection manager and the transaction
//! tracker, driven through the mock capabilities.

use std::rc::Rc;
use std::time::Duration;

use walletbar_core::config::{DEMO_STEP_DELAY_MS, messages};
use walletbar_core::display::{tx_status_label, wallet_button_disabled, wallet_button_label};
use walletbar_core::mock::{FakeProvider, ManualRuntime, RecordingSink};
use walletbar_core::{
    ConnectionEvent, ConnectionManager, ConnectionState, NetworkNames, NotificationSink,
    RawNetwork, TransactionStatusTracker, TxStatus, run_demo,
};

struct Widget {
    provider: FakeProvider,
    runtime: Rc<ManualRuntime>,
    sink: Rc<RecordingSink>,
    manager: Rc<ConnectionManager<FakeProvider>>,
    tracker: Rc<TransactionStatusTracker>,
}

fn mount_with(provider: Option<FakeProvider>) -> Widget {
    let runtime = Rc::new(ManualRuntime::default());
    let sink = Rc::new(RecordingSink::default());
    let manager = ConnectionManager::mount(
        provider.clone(),
        NetworkNames::builtin(),
        runtime.clone(),
    );
    let tracker = TransactionStatusTracker::new(sink.clone(), runtime.clone());

    let alerts = sink.clone();
    manager.subscribe(move |event| {
        if let ConnectionEvent::Error(kind) = event
            && kind.is_user_facing()
        {
            alerts.alert(messages::PROVIDER_MISSING);
        }
    });

    Widget {
        provider: provider.unwrap_or_default(),
        runtime,
        sink,
        manager,
        tracker,
    }
}

fn connected_widget() -> Widget {
    let provider = FakeProvider::default();
    provider.push_accounts(Ok(vec!["0x1234567890abcdef".into()]));
    provider.push_network(Ok(RawNetwork::new(1, "homestead")));
    mount_with(Some(provider))
}

#[tokio::test]
async fn missing_provider_shows_blocking_notice() {
    let widget = mount_with(None);

    widget.manager.open_details().await;

    assert_eq!(widget.manager.state(), ConnectionState::Disconnected);
    assert!(!widget.manager.is_connecting());
    assert_eq!(widget.sink.alerts(), vec!["Please install MetaMask!"]);
}

#[tokio::test]
async fn connect_then_open_details() {
    let widget = connected_widget();

    widget.manager.open_details().await;
    assert_eq!(
        wallet_button_label(&widget.manager.state(), widget.manager.is_connecting()),
        "Details (0x123...)"
    );
    assert_eq!(
        widget.manager.state().network().map(|n| n.friendly_name.clone()),
        Some("Ethereum Mainnet".to_string())
    );

    widget.manager.open_details().await;
    assert!(widget.manager.details_open());
    assert_eq!(widget.provider.account_requests(), 1);
}

#[tokio::test]
async fn disconnect_leaves_transaction_untouched() {
    let widget = connected_widget();
    widget.manager.connect().await;
    widget.tracker.start_pending();
    widget.tracker.request_wallet_confirmation();
    assert!(wallet_button_disabled(
        widget.manager.is_connecting(),
        widget.tracker.status()
    ));

    widget.manager.disconnect();

    assert_eq!(widget.manager.state(), ConnectionState::Disconnected);
    assert!(widget.manager.state().account().is_none());
    assert_eq!(
        widget.tracker.status(),
        TxStatus::AwaitingWalletConfirmation
    );
    assert_eq!(
        tx_status_label(widget.tracker.status()),
        "Confirm in wallet"
    );
}

#[tokio::test]
async fn wallet_revocation_during_demo() {
    let widget = connected_widget();
    widget.manager.connect().await;
    widget.manager.open_details().await;

    assert!(run_demo(
        &widget.tracker,
        Duration::from_millis(DEMO_STEP_DELAY_MS)
    ));
    widget.provider.emit_accounts_changed(vec![]);

    assert_eq!(widget.manager.state(), ConnectionState::Disconnected);
    assert!(!widget.manager.details_open());
    assert_eq!(widget.tracker.status(), TxStatus::Pending);

    widget.runtime.fire_timers();
    widget.runtime.fire_timers();
    assert_eq!(widget.tracker.status(), TxStatus::Succeeded);
    assert_eq!(widget.sink.visible(), vec!["tx-success"]);

    widget.runtime.fire_timers();
    assert_eq!(widget.tracker.status(), TxStatus::Idle);
}

#[tokio::test]
async fn chain_switch_updates_label() {
    let widget = connected_widget();
    widget.manager.connect().await;

    widget
        .provider
        .push_network(Ok(RawNetwork::new(137, "matic")));
    widget.provider.emit_network_changed();
    assert_eq!(widget.runtime.pending_tasks(), 1);
    widget.runtime.run_tasks().await;

    assert_eq!(
        walletbar_core::display::network_label(&widget.manager.state()),
        "Polygon"
    );
}
