//! Error types for the wallet widget.
//!
//! - [`WalletError`] - failures reported by a wallet provider
//! - [`ErrorKind`] - classification surfaced to connection observers

use thiserror::Error;

/// Wallet-related errors for EIP-1193 style providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// MetaMask or compatible wallet not installed
    #[error("MetaMask not installed. Please install MetaMask extension.")]
    NotInstalled,
    /// Failed to create request object
    #[error("Failed to create wallet request")]
    RequestCreationFailed,
    /// Request to wallet was rejected by user
    #[error("Wallet request rejected: {0}")]
    RequestRejected(String),
    /// No account returned from wallet
    #[error("No account returned from wallet")]
    NoAccount,
    /// Provider answered with something we could not decode
    #[error("Invalid response from wallet: {0}")]
    InvalidResponse(String),
    /// Registering or removing an event listener failed
    #[error("Failed to manage wallet event listener: {0}")]
    SubscriptionFailed(String),
}

/// Failure classes a connection observer can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("no wallet provider available")]
    ProviderUnavailable,
    #[error("wallet authorization rejected")]
    AuthorizationRejected,
    #[error("network resolution failed")]
    NetworkResolutionFailed,
}

impl ErrorKind {
    /// Only a missing provider is shown to the user; the rest are logged.
    pub fn is_user_facing(self) -> bool {
        matches!(self, Self::ProviderUnavailable)
    }
}
