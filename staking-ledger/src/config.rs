use {
    crate::{
        constants::{BRONZE_MIN_UNITS, DEFAULT_REWARD_CADENCE_SECS},
        error::LedgerError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Tunables for a [`crate::StakingLedger`].
///
/// Tier thresholds and APYs are fixed platform policy (see
/// [`crate::constants`]); the config covers only the entry gate and the
/// informational reward cadence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct LedgerConfig {
    /// Minimum stake per call, in base units.
    /// Every stake call must meet this, not just the first.
    pub min_stake: u64,

    /// Informational reward cadence in seconds. Maintains
    /// `next_reward_time` on stake entry and claim; never gates anything.
    pub reward_cadence: i64,
}

impl LedgerConfig {
    /// Reject configurations the ledger cannot operate under.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.min_stake == 0 {
            return Err(LedgerError::InvalidConfig {
                reason: "min_stake must be positive".to_string(),
            });
        }
        if self.min_stake > BRONZE_MIN_UNITS {
            return Err(LedgerError::InvalidConfig {
                reason: format!(
                    "min_stake {} exceeds the Bronze entry threshold {}",
                    self.min_stake, BRONZE_MIN_UNITS
                ),
            });
        }
        if self.reward_cadence <= 0 {
            return Err(LedgerError::InvalidConfig {
                reason: "reward_cadence must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_stake: BRONZE_MIN_UNITS,                 // 100 tokens — the tier entry minimum
            reward_cadence: DEFAULT_REWARD_CADENCE_SECS, // 7 days
        }
    }
}
