/// Lifecycle of the single simulated transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TxStatus {
    #[default]
    Idle,
    Pending,
    AwaitingWalletConfirmation,
    Succeeded,
}

impl TxStatus {
    /// True while the transaction has started but not yet succeeded.
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Pending | Self::AwaitingWalletConfirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight() {
        assert!(!TxStatus::Idle.is_in_flight());
        assert!(TxStatus::Pending.is_in_flight());
        assert!(TxStatus::AwaitingWalletConfirmation.is_in_flight());
        assert!(!TxStatus::Succeeded.is_in_flight());
        assert_eq!(TxStatus::default(), TxStatus::Idle);
    }
}
