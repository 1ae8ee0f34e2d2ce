//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - safe access to the window and document
//! - [`logging`] - `tracing` output routed to the browser console

pub mod dom;
pub mod logging;
