use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use crate::config::{TX_RESET_DELAY_MS, messages, notification_ids};
use crate::models::TxStatus;
use crate::notify::{NotificationKind, NotificationSink};
use crate::runtime::Runtime;

type Listener = Rc<dyn Fn(TxStatus)>;

/// Status state machine for the single simulated transaction.
///
/// | From | Event | To |
/// |------|-------|----|
/// | Idle | `start_pending` | Pending |
/// | Pending | `request_wallet_confirmation` | AwaitingWalletConfirmation |
/// | any but Succeeded | `mark_succeeded` | Succeeded |
/// | Succeeded | reset delay elapses | Idle |
///
/// Events that are not valid for the current status are ignored. Every
/// applied transition bumps the generation; the delayed reset only fires if
/// the generation it captured is still current.
pub struct TransactionStatusTracker {
    this: Weak<Self>,
    status: Cell<TxStatus>,
    generation: Cell<u64>,
    reset_delay: Duration,
    sink: Rc<dyn NotificationSink>,
    runtime: Rc<dyn Runtime>,
    listeners: RefCell<Vec<Listener>>,
}

impl TransactionStatusTracker {
    pub fn new(sink: Rc<dyn NotificationSink>, runtime: Rc<dyn Runtime>) -> Rc<Self> {
        Self::with_reset_delay(sink, runtime, Duration::from_millis(TX_RESET_DELAY_MS))
    }

    pub fn with_reset_delay(
        sink: Rc<dyn NotificationSink>,
        runtime: Rc<dyn Runtime>,
        reset_delay: Duration,
    ) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            status: Cell::new(TxStatus::Idle),
            generation: Cell::new(0),
            reset_delay,
            sink,
            runtime,
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn status(&self) -> TxStatus {
        self.status.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn subscribe(&self, listener: impl Fn(TxStatus) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub(crate) fn runtime(&self) -> &Rc<dyn Runtime> {
        &self.runtime
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Idle → Pending. Returns whether the event was applied.
    pub fn start_pending(&self) -> bool {
        if self.status.get() != TxStatus::Idle {
            debug!(status = ?self.status.get(), "ignoring start_pending");
            return false;
        }
        self.transition(TxStatus::Pending);
        self.sink.show(
            NotificationKind::Loading,
            messages::TX_PENDING,
            notification_ids::TX_PENDING,
        );
        true
    }

    /// Pending → AwaitingWalletConfirmation.
    pub fn request_wallet_confirmation(&self) -> bool {
        if self.status.get() != TxStatus::Pending {
            debug!(status = ?self.status.get(), "ignoring request_wallet_confirmation");
            return false;
        }
        self.transition(TxStatus::AwaitingWalletConfirmation);
        self.sink.show(
            NotificationKind::Loading,
            messages::TX_CONFIRM,
            notification_ids::TX_CONFIRM,
        );
        true
    }

    /// Any non-succeeded status → Succeeded, then back to Idle after the
    /// reset delay.
    pub fn mark_succeeded(&self) -> bool {
        if self.status.get() == TxStatus::Succeeded {
            debug!("ignoring mark_succeeded, already succeeded");
            return false;
        }
        self.sink.dismiss(notification_ids::TX_PENDING);
        self.sink.dismiss(notification_ids::TX_CONFIRM);
        self.transition(TxStatus::Succeeded);
        self.sink.show(
            NotificationKind::Success,
            messages::TX_SUCCESS,
            notification_ids::TX_SUCCESS,
        );
        self.schedule_reset();
        true
    }

    /// Back to Idle from anywhere, clearing transaction notifications.
    pub fn reset(&self) {
        self.sink.dismiss(notification_ids::TX_PENDING);
        self.sink.dismiss(notification_ids::TX_CONFIRM);
        self.sink.dismiss(notification_ids::TX_SUCCESS);
        if self.status.get() != TxStatus::Idle {
            self.transition(TxStatus::Idle);
        }
    }

    fn schedule_reset(&self) {
        let generation = self.generation.get();
        let this = self.this.clone();
        self.runtime.set_timeout(
            self.reset_delay,
            Box::new(move || {
                if let Some(tracker) = this.upgrade() {
                    tracker.expire(generation);
                }
            }),
        );
    }

    fn expire(&self, generation: u64) {
        if self.generation.get() != generation {
            debug!(generation, "stale reset skipped");
            return;
        }
        self.transition(TxStatus::Idle);
    }

    fn transition(&self, next: TxStatus) {
        debug!(from = ?self.status.get(), to = ?next, "transaction status");
        self.status.set(next);
        self.generation.set(self.generation.get() + 1);

        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ManualRuntime, RecordingSink, SinkEvent};

    fn tracker() -> (Rc<TransactionStatusTracker>, Rc<RecordingSink>, Rc<ManualRuntime>) {
        let sink = Rc::new(RecordingSink::default());
        let runtime = Rc::new(ManualRuntime::default());
        let tracker = TransactionStatusTracker::new(sink.clone(), runtime.clone());
        (tracker, sink, runtime)
    }

    #[test]
    fn test_starts_idle() {
        let (tracker, sink, _) = tracker();
        assert_eq!(tracker.status(), TxStatus::Idle);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_full_lifecycle_returns_to_idle() {
        let (tracker, sink, runtime) = tracker();

        assert!(tracker.start_pending());
        assert_eq!(tracker.status(), TxStatus::Pending);
        assert_eq!(sink.visible(), vec!["tx-pending"]);

        assert!(tracker.request_wallet_confirmation());
        assert_eq!(tracker.status(), TxStatus::AwaitingWalletConfirmation);
        assert_eq!(sink.visible(), vec!["tx-pending", "tx-confirm"]);

        assert!(tracker.mark_succeeded());
        assert_eq!(tracker.status(), TxStatus::Succeeded);
        assert_eq!(sink.visible(), vec!["tx-success"]);
        assert_eq!(
            runtime.timer_delays(),
            vec![Duration::from_millis(TX_RESET_DELAY_MS)]
        );

        assert_eq!(runtime.fire_timers(), 1);
        assert_eq!(tracker.status(), TxStatus::Idle);
    }

    #[test]
    fn test_pending_then_success_skipping_confirmation() {
        let (tracker, _, runtime) = tracker();
        tracker.start_pending();
        assert!(tracker.mark_succeeded());
        runtime.fire_timers();
        assert_eq!(tracker.status(), TxStatus::Idle);
    }

    #[test]
    fn test_success_from_idle_is_accepted() {
        let (tracker, sink, _) = tracker();
        assert!(tracker.mark_succeeded());
        assert_eq!(tracker.status(), TxStatus::Succeeded);
        assert!(sink.events().contains(&SinkEvent::Show {
            kind: NotificationKind::Success,
            message: "Minted!".to_string(),
            id: "tx-success".to_string(),
        }));
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let (tracker, sink, runtime) = tracker();

        assert!(!tracker.request_wallet_confirmation());
        assert_eq!(tracker.status(), TxStatus::Idle);

        tracker.start_pending();
        assert!(!tracker.start_pending());
        assert_eq!(tracker.status(), TxStatus::Pending);

        tracker.mark_succeeded();
        assert!(!tracker.mark_succeeded());
        assert!(!tracker.start_pending());
        assert!(!tracker.request_wallet_confirmation());
        assert_eq!(tracker.status(), TxStatus::Succeeded);
        assert_eq!(runtime.pending_timers(), 1);

        let shows = sink
            .events()
            .into_iter()
            .filter(|e| matches!(e, SinkEvent::Show { .. }))
            .count();
        assert_eq!(shows, 2);
    }

    #[test]
    fn test_stale_reset_does_not_clobber_new_transaction() {
        let (tracker, _, runtime) = tracker();
        tracker.mark_succeeded();

        tracker.reset();
        assert!(tracker.start_pending());

        runtime.fire_timers();
        assert_eq!(tracker.status(), TxStatus::Pending);
    }

    #[test]
    fn test_reset_dismisses_notifications() {
        let (tracker, sink, _) = tracker();
        tracker.start_pending();
        tracker.request_wallet_confirmation();

        tracker.reset();

        assert_eq!(tracker.status(), TxStatus::Idle);
        assert!(sink.visible().is_empty());
    }

    #[test]
    fn test_listeners_see_every_transition() {
        let (tracker, _, runtime) = tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = seen.clone();
        tracker.subscribe(move |status| record.borrow_mut().push(status));

        tracker.start_pending();
        tracker.request_wallet_confirmation();
        tracker.mark_succeeded();
        runtime.fire_timers();

        assert_eq!(
            *seen.borrow(),
            vec![
                TxStatus::Pending,
                TxStatus::AwaitingWalletConfirmation,
                TxStatus::Succeeded,
                TxStatus::Idle,
            ]
        );
    }

    #[test]
    fn test_reset_after_drop_is_harmless() {
        let (tracker, _, runtime) = tracker();
        tracker.mark_succeeded();
        drop(tracker);
        assert_eq!(runtime.fire_timers(), 1);
    }
}
