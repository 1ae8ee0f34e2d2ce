//! Event-loop capability used by the state machines.
//!
//! Everything runs on one thread: spawned tasks and timer callbacks are not
//! required to be `Send`.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Spawning and timers, provided by the host event loop.
pub trait Runtime {
    /// Run `task` to completion in the background.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Invoke `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}
