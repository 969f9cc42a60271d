use {crate::store::StoreError, thiserror::Error};

/// Errors produced by the staking ledger.
///
/// `InvalidAmount`, `InsufficientStake`, and `NoRewards` are validation
/// rejections: local, synchronous, non-retryable, and never accompanied by a
/// state change. The remaining variants surface bookkeeping or collaborator
/// faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The amount is zero or below the minimum entry stake.
    #[error("Invalid amount: offered {amount} base units, minimum is {minimum}")]
    InvalidAmount { amount: u64, minimum: u64 },

    /// Unstake requested more than the staked balance.
    #[error(
        "Insufficient stake: requested {requested} base units but only {available} are staked"
    )]
    InsufficientStake { requested: u64, available: u64 },

    /// Claim with nothing pending.
    #[error("No rewards to claim")]
    NoRewards,

    /// Checked arithmetic failed while updating reward bookkeeping.
    #[error("Arithmetic overflow in reward bookkeeping")]
    ArithmeticOverflow,

    /// The ledger configuration is invalid (e.g. zero minimum stake).
    #[error("Invalid ledger configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The persistence collaborator failed.
    #[error("Account store failure: {reason}")]
    Store { reason: String },
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        LedgerError::Store { reason: err.reason }
    }
}
