//! Toast notifications.
//!
//! Toasts live in a signal rendered by the `Toaster` component. Showing an
//! id that is already on screen replaces that toast in place.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use walletbar_core::config::TOAST_DURATION_MS;
use walletbar_core::{NotificationKind, NotificationSink, Runtime};

use crate::utils::dom;

/// A toast on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique per `show` call; used as the render key.
    pub seq: u64,
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
}

/// [`NotificationSink`] that writes into a toast list signal.
///
/// Loading toasts stay until dismissed; the rest expire after
/// [`TOAST_DURATION_MS`].
pub struct ToastSink {
    toasts: RwSignal<Vec<Toast>>,
    runtime: Rc<dyn Runtime>,
    next_seq: Cell<u64>,
}

impl ToastSink {
    pub fn new(toasts: RwSignal<Vec<Toast>>, runtime: Rc<dyn Runtime>) -> Self {
        Self {
            toasts,
            runtime,
            next_seq: Cell::new(0),
        }
    }

    fn expire_later(&self, seq: u64) {
        let toasts = self.toasts;
        self.runtime.set_timeout(
            Duration::from_millis(TOAST_DURATION_MS),
            Box::new(move || {
                let _ = toasts.try_update(|list| list.retain(|toast| toast.seq != seq));
            }),
        );
    }
}

impl NotificationSink for ToastSink {
    fn show(&self, kind: NotificationKind, message: &str, id: &str) {
        let seq = self.next_seq.get() + 1;
        self.next_seq.set(seq);

        let toast = Toast {
            seq,
            id: id.to_string(),
            kind,
            message: message.to_string(),
        };
        self.toasts.update(|list| {
            match list.iter_mut().find(|existing| existing.id == toast.id) {
                Some(existing) => *existing = toast,
                None => list.push(toast),
            }
        });

        if kind != NotificationKind::Loading {
            self.expire_later(seq);
        }
    }

    fn dismiss(&self, id: &str) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    fn alert(&self, message: &str) {
        if let Some(window) = dom::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use walletbar_core::mock::ManualRuntime;

    use super::*;

    fn sink() -> (ToastSink, RwSignal<Vec<Toast>>, Rc<ManualRuntime>) {
        let toasts = RwSignal::new(Vec::new());
        let runtime = Rc::new(ManualRuntime::default());
        (ToastSink::new(toasts, runtime.clone()), toasts, runtime)
    }

    fn ids(toasts: RwSignal<Vec<Toast>>) -> Vec<String> {
        toasts.get_untracked().into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_show_and_dismiss() {
        let (sink, toasts, _) = sink();
        sink.show(NotificationKind::Loading, "Transaction pending...", "tx-pending");
        sink.show(NotificationKind::Loading, "Confirm in wallet", "tx-confirm");
        assert_eq!(ids(toasts), vec!["tx-pending", "tx-confirm"]);

        sink.dismiss("tx-pending");
        assert_eq!(ids(toasts), vec!["tx-confirm"]);
    }

    #[test]
    fn test_same_id_replaces_in_place() {
        let (sink, toasts, _) = sink();
        sink.show(NotificationKind::Loading, "first", "tx");
        sink.show(NotificationKind::Info, "second", "other");
        sink.show(NotificationKind::Loading, "third", "tx");

        let list = toasts.get_untracked();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "third");
        assert_eq!(list[1].message, "second");
    }

    #[test]
    fn test_loading_toasts_do_not_expire() {
        let (sink, toasts, runtime) = sink();
        sink.show(NotificationKind::Loading, "Transaction pending...", "tx-pending");
        assert_eq!(runtime.pending_timers(), 0);

        sink.show(NotificationKind::Success, "Minted!", "tx-success");
        assert_eq!(
            runtime.timer_delays(),
            vec![Duration::from_millis(TOAST_DURATION_MS)]
        );

        runtime.fire_timers();
        assert_eq!(ids(toasts), vec!["tx-pending"]);
    }

    #[test]
    fn test_expiry_skips_replaced_toast() {
        let (sink, toasts, runtime) = sink();
        sink.show(NotificationKind::Success, "Minted!", "tx-success");
        sink.show(NotificationKind::Loading, "again", "tx-success");

        runtime.fire_timers();
        assert_eq!(ids(toasts), vec!["tx-success"]);
    }
}
