use std::rc::{Rc, Weak};
use std::time::Duration;

use super::TransactionStatusTracker;

/// Walk the tracker through pending, confirmation and success, one `step`
/// apart.
///
/// Returns `false` without doing anything if a transaction is already
/// active. A later step is dropped if something else moved the tracker in
/// the meantime.
pub fn run_demo(tracker: &Rc<TransactionStatusTracker>, step: Duration) -> bool {
    if !tracker.start_pending() {
        return false;
    }
    schedule_step(tracker, step, Step::Confirm);
    true
}

#[derive(Clone, Copy)]
enum Step {
    Confirm,
    Succeed,
}

fn schedule_step(tracker: &Rc<TransactionStatusTracker>, step: Duration, next: Step) {
    let weak: Weak<TransactionStatusTracker> = Rc::downgrade(tracker);
    let generation = tracker.generation();
    tracker.runtime().set_timeout(
        step,
        Box::new(move || {
            let Some(tracker) = weak.upgrade() else {
                return;
            };
            if tracker.generation() != generation {
                return;
            }
            match next {
                Step::Confirm => {
                    if tracker.request_wallet_confirmation() {
                        schedule_step(&tracker, step, Step::Succeed);
                    }
                }
                Step::Succeed => {
                    tracker.mark_succeeded();
                }
            }
        }),
    );
}
