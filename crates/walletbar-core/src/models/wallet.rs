use std::fmt;

use serde::{Deserialize, Serialize};

use super::NetworkInfo;

/// Opaque account identifier handed out by the wallet provider.
///
/// Compared by exact value; no checksum or case normalization is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` characters of the address, for compact labels.
    pub fn preview(&self, len: usize) -> &str {
        match self.0.char_indices().nth(len) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Coarse connection status, without the attached data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Wallet connection state.
///
/// An account exists only in the `Connected` variant, and a network only
/// alongside an account.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        account: AccountAddress,
        network: Option<NetworkInfo>,
    },
}

impl ConnectionState {
    pub fn connected(account: AccountAddress) -> Self {
        Self::Connected {
            account,
            network: None,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        match self {
            Self::Disconnected => ConnectionStatus::Disconnected,
            Self::Connecting => ConnectionStatus::Connecting,
            Self::Connected { .. } => ConnectionStatus::Connected,
        }
    }

    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    pub fn account(&self) -> Option<&AccountAddress> {
        match self {
            Self::Connected { account, .. } => Some(account),
            _ => None,
        }
    }

    pub fn network(&self) -> Option<&NetworkInfo> {
        match self {
            Self::Connected { network, .. } => network.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disconnected() {
        let state = ConnectionState::default();
        assert_eq!(state, ConnectionState::Disconnected);
        assert_eq!(state.status(), ConnectionStatus::Disconnected);
        assert!(state.account().is_none());
        assert!(state.network().is_none());
    }

    #[test]
    fn test_connecting_has_no_account() {
        let state = ConnectionState::Connecting;
        assert!(!state.is_connected());
        assert_eq!(state.status(), ConnectionStatus::Connecting);
        assert!(state.account().is_none());
    }

    #[test]
    fn test_connected_accessors() {
        let state = ConnectionState::Connected {
            account: AccountAddress::from("0xABCDEF"),
            network: Some(NetworkInfo::new(1, "homestead", "Ethereum Mainnet")),
        };
        assert!(state.is_connected());
        assert_eq!(state.account().map(|a| a.as_str()), Some("0xABCDEF"));
        assert_eq!(
            state.network().map(|n| n.friendly_name.as_str()),
            Some("Ethereum Mainnet")
        );
    }

    #[test]
    fn test_address_compares_case_sensitively() {
        assert_ne!(AccountAddress::from("0xabc"), AccountAddress::from("0xABC"));
        assert_eq!(AccountAddress::from("0xabc"), AccountAddress::from("0xabc"));
    }

    #[test]
    fn test_address_preview() {
        let address = AccountAddress::from("0x1234567890abcdef");
        assert_eq!(address.preview(5), "0x123");
        assert_eq!(AccountAddress::from("0x1").preview(5), "0x1");
    }
}
