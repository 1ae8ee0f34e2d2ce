//! Display helpers for the wallet button and details panel.

use crate::config::{ADDRESS_PREVIEW_LEN, labels};
use crate::models::{ConnectionState, TxStatus};

/// Wallet button text: progress while connecting, an address preview once
/// connected, otherwise the call to action.
pub fn wallet_button_label(state: &ConnectionState, connecting: bool) -> String {
    if connecting {
        return labels::CONNECTING.to_string();
    }
    match state.account() {
        Some(account) => format!("Details ({}...)", account.preview(ADDRESS_PREVIEW_LEN)),
        None => labels::CONNECT.to_string(),
    }
}

/// The button is locked while connecting or while a transaction is in flight.
pub fn wallet_button_disabled(connecting: bool, tx: TxStatus) -> bool {
    connecting || tx.is_in_flight()
}

pub fn network_label(state: &ConnectionState) -> &str {
    state
        .network()
        .map(|network| network.friendly_name.as_str())
        .unwrap_or(labels::UNKNOWN_NETWORK)
}

pub fn tx_status_label(tx: TxStatus) -> &'static str {
    match tx {
        TxStatus::Idle => labels::TX_IDLE,
        TxStatus::Pending => labels::TX_PENDING,
        TxStatus::AwaitingWalletConfirmation => labels::TX_CONFIRM,
        TxStatus::Succeeded => labels::TX_SUCCESS,
    }
}

/// Navbar cart link text.
pub fn cart_label(count: usize) -> String {
    format!("Cart ({count})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountAddress, NetworkInfo};

    fn connected(network: Option<NetworkInfo>) -> ConnectionState {
        ConnectionState::Connected {
            account: AccountAddress::from("0x1234567890abcdef"),
            network,
        }
    }

    #[test]
    fn test_button_label() {
        assert_eq!(
            wallet_button_label(&ConnectionState::Disconnected, false),
            "Connect Wallet"
        );
        assert_eq!(
            wallet_button_label(&ConnectionState::Connecting, true),
            "Connecting..."
        );
        assert_eq!(wallet_button_label(&connected(None), false), "Details (0x123...)");
    }

    #[test]
    fn test_connecting_wins_over_account() {
        assert_eq!(wallet_button_label(&connected(None), true), "Connecting...");
    }

    #[test]
    fn test_button_disabled() {
        assert!(!wallet_button_disabled(false, TxStatus::Idle));
        assert!(wallet_button_disabled(true, TxStatus::Idle));
        assert!(wallet_button_disabled(false, TxStatus::Pending));
        assert!(wallet_button_disabled(false, TxStatus::AwaitingWalletConfirmation));
        assert!(!wallet_button_disabled(false, TxStatus::Succeeded));
    }

    #[test]
    fn test_network_label() {
        let polygon = NetworkInfo::new(137, "matic", "Polygon");
        assert_eq!(network_label(&connected(Some(polygon))), "Polygon");
        assert_eq!(network_label(&connected(None)), "Unknown Network");
        assert_eq!(network_label(&ConnectionState::Disconnected), "Unknown Network");
    }

    #[test]
    fn test_cart_label_follows_count() {
        assert_eq!(cart_label(0), "Cart (0)");
        assert_eq!(cart_label(3), "Cart (3)");
    }

    #[test]
    fn test_tx_status_label() {
        assert_eq!(tx_status_label(TxStatus::Idle), "No active transactions");
        assert_eq!(tx_status_label(TxStatus::Pending), "Transaction Pending...");
        assert_eq!(
            tx_status_label(TxStatus::AwaitingWalletConfirmation),
            "Confirm in wallet"
        );
        assert_eq!(tx_status_label(TxStatus::Succeeded), "Minted!");
    }
}
