//! The staking controller: validation, tier recomputation, reward
//! projection, and persistence.

use {
    crate::{
        account::StakeAccount,
        clock::{Clock, SystemClock, UnixTimestamp},
        config::LedgerConfig,
        constants::{BPS_DENOMINATOR, SECONDS_PER_YEAR},
        error::LedgerError,
        store::{AccountStore, InMemoryStore},
        tier::{Tier, TierInfo},
    },
    dashmap::DashMap,
    log::{debug, trace},
    parking_lot::Mutex,
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// Reward owed for `elapsed` seconds on `staked` base units at `apy_bps`.
///
/// # Formula
///
/// ```text
/// reward = staked × apy_bps × elapsed / (BPS_DENOMINATOR × SECONDS_PER_YEAR)
/// ```
///
/// Computed in u128 with truncating division; the conversion back to u64
/// saturates. Non-positive `elapsed` yields zero.
pub fn projected_reward(staked: u64, apy_bps: u64, elapsed: i64) -> u64 {
    if elapsed <= 0 {
        return 0;
    }
    let numerator = (staked as u128)
        .saturating_mul(apy_bps as u128)
        .saturating_mul(elapsed as u128);
    let denominator = (BPS_DENOMINATOR as u128).saturating_mul(SECONDS_PER_YEAR as u128);
    let reward = numerator / denominator;
    reward.min(u64::MAX as u128) as u64
}

/// Outcome of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedRewards {
    /// Base units moved out of `pending_rewards`.
    pub amount: u64,
    /// Post-claim account snapshot.
    pub account: StakeAccount,
}

/// Outcome of an accrual projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accrual {
    /// Base units added to `pending_rewards` by this projection.
    pub accrued: u64,
    /// Post-projection account snapshot.
    pub account: StakeAccount,
}

/// Staking controller over an [`AccountStore`] and a [`Clock`].
///
/// Every operation touches exactly one account. Same-owner operations are
/// serialized through a per-owner mutex registry; operations on different
/// owners proceed in parallel. Each successful operation persists as a
/// single whole-account write, so rejections leave no partial state behind.
pub struct StakingLedger<S = InMemoryStore, C = SystemClock>
where
    S: AccountStore,
    C: Clock,
{
    store: S,
    clock: C,
    config: LedgerConfig,
    /// Per-owner operation locks, created on first touch and retained for
    /// the ledger's lifetime.
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl StakingLedger {
    /// Ledger with the default configuration, an in-memory store, and the
    /// system clock. The usual starting point for embedders and tests.
    pub fn in_memory() -> Self {
        Self {
            store: InMemoryStore::new(),
            clock: SystemClock,
            config: LedgerConfig::default(),
            locks: DashMap::new(),
        }
    }
}

impl<S, C> StakingLedger<S, C>
where
    S: AccountStore,
    C: Clock,
{
    /// Ledger over an explicit store, clock, and configuration.
    pub fn new(store: S, clock: C, config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self {
            store,
            clock,
            config,
            locks: DashMap::new(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The backing store, for read-side extras such as account listing.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ascending tier catalog for display surfaces.
    pub fn tiers(&self) -> &'static [TierInfo] {
        Tier::catalog()
    }

    /// Snapshot of the owner's account, or a zero-account if absent.
    ///
    /// Lock-free: stores hand back whole-account values, so a snapshot is
    /// always internally consistent.
    pub fn get_account(&self, owner: &str) -> Result<StakeAccount, LedgerError> {
        self.load_or_zeroed(owner)
    }

    /// Stake `amount` base units for `owner`.
    ///
    /// The prior balance's accrual is settled at the operation instant
    /// first, so the incoming capital earns nothing for time before the
    /// call. The account is created on first use; a stake taking the
    /// balance off zero stamps `staking_start_time` and starts the reward
    /// cadence. Fails with [`LedgerError::InvalidAmount`] below the
    /// configured minimum, which applies to every call, not just the first.
    pub fn stake(&self, owner: &str, amount: u64) -> Result<StakeAccount, LedgerError> {
        if amount < self.config.min_stake {
            return Err(LedgerError::InvalidAmount {
                amount,
                minimum: self.config.min_stake,
            });
        }

        let lock = self.lock_for(owner);
        let _guard = lock.lock();

        let now = self.clock.now();
        let mut account = self.load_or_zeroed(owner)?;
        settle(&mut account, now)?;

        let was_empty = account.staked == 0;
        account.staked = account
            .staked
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        account.normalize_tier();
        if was_empty {
            account.staking_start_time = now;
            account.next_reward_time = now.saturating_add(self.config.reward_cadence);
        }

        self.store.put(owner, &account)?;
        debug!(
            "stake: owner={} amount={} staked={} tier={}",
            owner, amount, account.staked, account.tier
        );
        Ok(account)
    }

    /// Withdraw `amount` base units of stake.
    ///
    /// Accrual is settled at the pre-withdrawal balance first, so no earned
    /// time is forfeited. The tier may downgrade, including to `None`; the
    /// account itself persists even at zero balance.
    pub fn unstake(&self, owner: &str, amount: u64) -> Result<StakeAccount, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount { amount, minimum: 1 });
        }

        let lock = self.lock_for(owner);
        let _guard = lock.lock();

        let now = self.clock.now();
        let mut account = self.load_or_zeroed(owner)?;
        if amount > account.staked {
            return Err(LedgerError::InsufficientStake {
                requested: amount,
                available: account.staked,
            });
        }
        settle(&mut account, now)?;

        account.staked = account.staked.saturating_sub(amount);
        account.normalize_tier();

        self.store.put(owner, &account)?;
        debug!(
            "unstake: owner={} amount={} staked={} tier={}",
            owner, amount, account.staked, account.tier
        );
        Ok(account)
    }

    /// Claim all pending rewards.
    ///
    /// Drains exactly what accrual has recorded and resets the cadence
    /// marker; callers that want wall-clock-fresh rewards run
    /// [`Self::accrue`] first. The reset is atomic: either the full pending
    /// balance is returned and zeroed, or nothing changes.
    pub fn claim(&self, owner: &str) -> Result<ClaimedRewards, LedgerError> {
        let lock = self.lock_for(owner);
        let _guard = lock.lock();

        let now = self.clock.now();
        let mut account = self.load_or_zeroed(owner)?;
        if account.pending_rewards == 0 {
            return Err(LedgerError::NoRewards);
        }

        let amount = account.pending_rewards;
        account.pending_rewards = 0;
        account.next_reward_time = now.saturating_add(self.config.reward_cadence);

        self.store.put(owner, &account)?;
        debug!("claim: owner={} amount={}", owner, amount);
        Ok(ClaimedRewards { amount, account })
    }

    /// Project rewards up to `now` and advance the accrual clock.
    ///
    /// Idempotent: a second call at the same `now` adds nothing, and a
    /// `now` behind the accrual clock is a no-op rather than a negative
    /// accrual. Owners that never staked get a zero snapshot back and no
    /// stored state.
    pub fn accrue(&self, owner: &str, now: UnixTimestamp) -> Result<Accrual, LedgerError> {
        let lock = self.lock_for(owner);
        let _guard = lock.lock();

        let mut account = match self.load(owner)? {
            Some(account) => account,
            None => {
                return Ok(Accrual {
                    accrued: 0,
                    account: StakeAccount::zeroed(owner),
                })
            }
        };
        if now <= account.last_accrual_time {
            return Ok(Accrual { accrued: 0, account });
        }

        let accrued = settle(&mut account, now)?;
        self.store.put(owner, &account)?;
        trace!(
            "accrue: owner={} accrued={} pending={}",
            owner,
            accrued,
            account.pending_rewards
        );
        Ok(Accrual { accrued, account })
    }

    fn lock_for(&self, owner: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(owner.to_string())
            .or_insert_with(Default::default)
            .clone()
    }

    /// Load the stored account, re-deriving the tier. Absent owners yield
    /// `None`.
    fn load(&self, owner: &str) -> Result<Option<StakeAccount>, LedgerError> {
        let mut account = match self.store.get(owner)? {
            Some(account) => account,
            None => return Ok(None),
        };
        account.normalize_tier();
        Ok(Some(account))
    }

    fn load_or_zeroed(&self, owner: &str) -> Result<StakeAccount, LedgerError> {
        Ok(self
            .load(owner)?
            .unwrap_or_else(|| StakeAccount::zeroed(owner)))
    }
}

/// Project rewards up to `now` at the current balance and tier, credit them
/// to `pending_rewards`, and advance `last_accrual_time`. Returns the amount
/// credited. A `now` at or behind the accrual clock credits nothing.
fn settle(account: &mut StakeAccount, now: UnixTimestamp) -> Result<u64, LedgerError> {
    if now <= account.last_accrual_time {
        return Ok(0);
    }
    let elapsed = now.saturating_sub(account.last_accrual_time);
    let accrued = projected_reward(account.staked, account.tier.apy_bps(), elapsed);
    account.pending_rewards = account
        .pending_rewards
        .checked_add(accrued)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    account.last_accrual_time = now;
    Ok(accrued)
}
