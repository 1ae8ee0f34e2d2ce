//! Simulated transaction lifecycle.
//!
//! - [`TransactionStatusTracker`] - the status state machine and its notifications
//! - [`run_demo`] - drives a full mint sequence on timers

mod demo;
mod tracker;

pub use demo::run_demo;
pub use tracker::TransactionStatusTracker;
