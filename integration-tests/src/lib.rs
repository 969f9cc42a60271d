//! MundialBuzz Staking Integration Tests
//!
//! Scenario test suite for the staking ledger, driven entirely through a
//! simulated clock.
//!
//! # Areas Covered
//!
//! 1. **Lifecycle** — enter, top up, upgrade, downgrade, exit; rejected
//!    operations leave accounts untouched
//! 2. **Accrual** — reward projection across simulated days and weeks,
//!    settlement on stake/unstake, claim cycles, cadence markers
//! 3. **Tiers** — threshold boundaries, progress interpolation, catalog,
//!    eligibility gates
//! 4. **Concurrency** — same-owner serialization and cross-owner parallelism

pub mod harness;
