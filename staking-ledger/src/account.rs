//! Per-owner staking account state.

use {
    crate::{constants::BRONZE_MIN_UNITS, tier::Tier},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Per-owner staking state.
///
/// Created lazily by the first successful stake, mutated only through
/// [`crate::StakingLedger`] operations, never destroyed: an account that
/// unstakes to zero persists with `staked = 0, tier = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct StakeAccount {
    /// Opaque owner identity (wallet address string).
    pub owner: String,

    /// Staked balance in base units. Adjusted only by stake/unstake.
    pub staked: u64,

    /// Rewards projected but not yet claimed, in base units.
    /// Grows via accrual, resets to zero atomically on claim.
    pub pending_rewards: u64,

    /// Tier derived from `staked`. Recomputed on every mutation and
    /// re-derived on load; never trusted from storage.
    pub tier: Tier,

    /// When the balance last left zero (unix seconds; 0 = never staked).
    pub staking_start_time: i64,

    /// High-water mark of reward projection (unix seconds).
    pub last_accrual_time: i64,

    /// Informational reward-cadence marker (unix seconds), surfaced to
    /// display layers. Never gates claim or accrual.
    pub next_reward_time: i64,
}

impl StakeAccount {
    /// Zero-initialized account for an owner that has never staked.
    pub fn zeroed(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            staked: 0,
            pending_rewards: 0,
            tier: Tier::None,
            staking_start_time: 0,
            last_accrual_time: 0,
            next_reward_time: 0,
        }
    }

    /// Recompute `tier` from the current balance.
    pub fn normalize_tier(&mut self) {
        self.tier = Tier::for_amount(self.staked);
    }

    /// Whether this owner may open prediction markets.
    /// True exactly when the account holds any tier.
    pub fn can_create_market(&self) -> bool {
        self.staked >= BRONZE_MIN_UNITS
    }

    /// Whether this owner may vote on predictions.
    pub fn can_vote(&self) -> bool {
        self.staked >= BRONZE_MIN_UNITS
    }
}
