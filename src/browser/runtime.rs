use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use walletbar_core::Runtime;

/// Runs tasks on the page's microtask queue and timers on `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: Pin<Box<dyn Future<Output = ()>>>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Timers are never cancelled; stale callbacks are ignored by their owners.
        Timeout::new(millis, callback).forget();
    }
}
