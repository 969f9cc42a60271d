//! Staking Ledger Test Harness
//!
//! Provides a deterministic environment for integration-testing the
//! staking ledger:
//!
//! - A manual clock pinned at a fixed base timestamp
//! - An in-memory account store
//! - Helpers for advancing simulated time in day or second steps
//! - Convenience wrappers that unwrap the common happy paths
//!
//! The harness never touches the wall clock; every scenario drives time
//! explicitly so reward arithmetic is exact and repeatable.

use {
    mundial_staking_ledger::{
        projected_reward, Clock, InMemoryStore, LedgerConfig, ManualClock, StakeAccount,
        StakingLedger, UnixTimestamp, SECONDS_PER_DAY, UNITS_PER_TOKEN,
    },
    std::sync::Arc,
};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Base simulated unix timestamp (~Nov 2023).
pub const BASE_TIMESTAMP: UnixTimestamp = 1_700_000_000;

/// One whole token in base units.
pub const TOKEN: u64 = UNITS_PER_TOKEN;

/// Owners used across scenarios.
pub const ALICE: &str = "wallet-alice";
pub const BOB: &str = "wallet-bob";
pub const CAROL: &str = "wallet-carol";

// ─── Test harness ────────────────────────────────────────────────────────────

/// Top-level test harness wrapping a ledger over an in-memory store and a
/// shared manual clock.
pub struct LedgerTestHarness {
    /// Ledger under test.
    pub ledger: StakingLedger<InMemoryStore, Arc<ManualClock>>,
    /// Shared handle onto the ledger's clock, for driving simulated time.
    pub clock: Arc<ManualClock>,
}

impl Default for LedgerTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerTestHarness {
    /// Create a harness with the default ledger configuration, starting at
    /// `BASE_TIMESTAMP`.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a harness with a custom ledger configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        let clock = Arc::new(ManualClock::starting_at(BASE_TIMESTAMP));
        let ledger = StakingLedger::new(InMemoryStore::new(), Arc::clone(&clock), config)
            .expect("test configuration is valid");
        Self { ledger, clock }
    }

    /// Advance the simulated time by `days` days.
    pub fn advance_days(&self, days: i64) {
        self.clock.advance(days * SECONDS_PER_DAY);
    }

    /// Advance the simulated time by `seconds` seconds.
    pub fn advance_seconds(&self, seconds: i64) {
        self.clock.advance(seconds);
    }

    /// Current simulated timestamp.
    pub fn now(&self) -> UnixTimestamp {
        self.clock.now()
    }

    /// Stake whole tokens for `owner`, unwrapping the result.
    pub fn stake_tokens(&self, owner: &str, tokens: u64) -> StakeAccount {
        self.ledger
            .stake(owner, tokens * TOKEN)
            .unwrap_or_else(|err| panic!("stake of {tokens} tokens for {owner} failed: {err}"))
    }

    /// Unstake whole tokens for `owner`, unwrapping the result.
    pub fn unstake_tokens(&self, owner: &str, tokens: u64) -> StakeAccount {
        self.ledger
            .unstake(owner, tokens * TOKEN)
            .unwrap_or_else(|err| panic!("unstake of {tokens} tokens for {owner} failed: {err}"))
    }

    /// Project rewards for `owner` at the current simulated time and return
    /// the marginal accrued units.
    pub fn accrue_now(&self, owner: &str) -> u64 {
        self.ledger
            .accrue(owner, self.now())
            .unwrap_or_else(|err| panic!("accrue for {owner} failed: {err}"))
            .accrued
    }

    /// Account snapshot for `owner`.
    pub fn account(&self, owner: &str) -> StakeAccount {
        self.ledger
            .get_account(owner)
            .unwrap_or_else(|err| panic!("get_account for {owner} failed: {err}"))
    }
}

/// Reward owed by the continuous-accrual formula, for building expected
/// values in scenarios.
pub fn expected_reward(staked_units: u64, apy_bps: u64, elapsed_secs: i64) -> u64 {
    projected_reward(staked_units, apy_bps, elapsed_secs)
}
