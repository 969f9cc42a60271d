//! # MundialBuzz Staking Ledger
//!
//! Staking-tier and reward-accrual engine for the MundialBuzz prediction
//! platform.
//!
//! Owners stake native tokens; the staked balance derives a **tier**
//! (Bronze / Silver / Gold / Platinum) that grants an APY and a set of
//! platform benefits. Rewards accrue continuously with elapsed time and are
//! claimed atomically. The ledger is a library-level component: identity
//! arrives as an opaque owner string, time through a [`Clock`], persistence
//! through an [`AccountStore`].
//!
//! ## Tier table
//!
//! | Tier     | Entry (tokens) | APY  |
//! |----------|---------------:|-----:|
//! | Bronze   | 100            |  5 % |
//! | Silver   | 500            |  7 % |
//! | Gold     | 1 000          | 10 % |
//! | Platinum | 2 500          | 15 % |
//!
//! ## Quick start
//!
//! ```rust
//! use mundial_staking_ledger::{StakingLedger, Tier, UNITS_PER_TOKEN};
//!
//! let ledger = StakingLedger::in_memory();
//!
//! // Stake 550 tokens: enough for Silver.
//! let account = ledger.stake("wallet-1", 550 * UNITS_PER_TOKEN).unwrap();
//! assert_eq!(account.tier, Tier::Silver);
//!
//! // Project rewards one year out, then claim them.
//! let year_later = account.last_accrual_time + 31_536_000;
//! let accrual = ledger.accrue("wallet-1", year_later).unwrap();
//! assert_eq!(accrual.accrued, 550 * UNITS_PER_TOKEN * 7 / 100); // 7 % APY
//!
//! let claimed = ledger.claim("wallet-1").unwrap();
//! assert_eq!(claimed.amount, accrual.accrued);
//! assert_eq!(claimed.account.pending_rewards, 0);
//! ```
//!
//! See [`tier`] for the threshold policy and [`ledger`] for operation
//! semantics.

pub mod account;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod store;
pub mod tier;


// Re-exports for convenience.
pub use account::StakeAccount;
pub use clock::{Clock, ManualClock, SystemClock, UnixTimestamp};
pub use config::LedgerConfig;
pub use constants::{BPS_DENOMINATOR, SECONDS_PER_DAY, SECONDS_PER_YEAR, UNITS_PER_TOKEN};
pub use error::LedgerError;
pub use ledger::{projected_reward, Accrual, ClaimedRewards, StakingLedger};
pub use store::{AccountStore, InMemoryStore, StoreError};
pub use tier::{progress_to_next_tier, Tier, TierInfo};
