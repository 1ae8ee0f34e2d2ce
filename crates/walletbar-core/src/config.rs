//! Widget configuration.
//!
//! Centralizes the constants used by the state machines and the display
//! helpers.

// =============================================================================
// Transaction Lifecycle
// =============================================================================

/// Delay before a succeeded transaction returns to idle, in milliseconds.
pub const TX_RESET_DELAY_MS: u64 = 3000;

/// Delay between steps of the simulated mint, in milliseconds.
pub const DEMO_STEP_DELAY_MS: u64 = 1500;

// =============================================================================
// Notifications
// =============================================================================

/// Stable notification identifiers, so later states can dismiss earlier ones.
pub mod notification_ids {
    pub const TX_PENDING: &str = "tx-pending";
    pub const TX_CONFIRM: &str = "tx-confirm";
    pub const TX_SUCCESS: &str = "tx-success";
}

/// Notification texts.
pub mod messages {
    pub const TX_PENDING: &str = "Transaction pending...";
    pub const TX_CONFIRM: &str = "Confirm in wallet";
    pub const TX_SUCCESS: &str = "Minted!";

    /// Blocking notice shown when no wallet provider is injected.
    pub const PROVIDER_MISSING: &str = "Please install MetaMask!";
}

/// How long non-loading toasts stay on screen, in milliseconds.
pub const TOAST_DURATION_MS: u64 = 4000;

// =============================================================================
// Display
// =============================================================================

/// Display labels for the wallet button and details panel.
pub mod labels {
    pub const CONNECT: &str = "Connect Wallet";
    pub const CONNECTING: &str = "Connecting...";
    pub const UNKNOWN_NETWORK: &str = "Unknown Network";

    pub const TX_IDLE: &str = "No active transactions";
    pub const TX_PENDING: &str = "Transaction Pending...";
    pub const TX_CONFIRM: &str = "Confirm in wallet";
    pub const TX_SUCCESS: &str = "Minted!";
}

/// Number of address characters shown on the wallet button.
pub const ADDRESS_PREVIEW_LEN: usize = 5;
