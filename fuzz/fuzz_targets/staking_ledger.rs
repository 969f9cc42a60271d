//! Fuzz the staking ledger operation surface.
//!
//! Goals:
//! - Find panics or overflows in stake/unstake/claim/accrue.
//! - Verify the tier always matches the stored balance.
//! - Verify pending rewards move only through accrual and claim.
//! - Verify rejected operations leave the account untouched.

#![no_main]

use {
    arbitrary::{Arbitrary, Unstructured},
    libfuzzer_sys::fuzz_target,
    mundial_staking_ledger::{
        constants::BRONZE_MIN_UNITS, Clock, InMemoryStore, LedgerConfig, ManualClock,
        StakingLedger, Tier, UNITS_PER_TOKEN,
    },
    std::sync::Arc,
};

// ── Bounds ──

const BASE_TIMESTAMP: i64 = 1_700_000_000;
const OWNER: &str = "wallet-fuzz";

/// Fuzz action.
#[derive(Debug)]
enum FuzzAction {
    Stake { units: u64 },
    Unstake { units: u64 },
    Accrue { advance_secs: i64 },
    Claim,
}

impl<'a> Arbitrary<'a> for FuzzAction {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let variant = u.int_in_range(0..=3)?;
        match variant {
            0 => {
                // Mostly realistic token counts, occasionally extreme.
                let units = if u.ratio(7, 8)? {
                    u.int_in_range(1..=10_000)?.saturating_mul(UNITS_PER_TOKEN)
                } else {
                    u.int_in_range(1..=u64::MAX)?
                };
                Ok(FuzzAction::Stake { units })
            }
            1 => {
                let units = if u.ratio(7, 8)? {
                    u.int_in_range(0..=10_000)?.saturating_mul(UNITS_PER_TOKEN)
                } else {
                    u.int_in_range(0..=u64::MAX)?
                };
                Ok(FuzzAction::Unstake { units })
            }
            2 => Ok(FuzzAction::Accrue {
                // Up to a year forward, occasionally a day backwards.
                advance_secs: u.int_in_range(-86_400..=31_536_000)?,
            }),
            3 => Ok(FuzzAction::Claim),
            _ => unreachable!(),
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let clock = Arc::new(ManualClock::starting_at(BASE_TIMESTAMP));
    let ledger = StakingLedger::new(
        InMemoryStore::new(),
        Arc::clone(&clock),
        LedgerConfig::default(),
    )
    .expect("default configuration is valid");

    let num_actions: usize = match u.int_in_range(1..=100) {
        Ok(n) => n,
        Err(_) => return,
    };

    // Widened mirrors of the account; the ledger caps at u64 through
    // rejections, so any drift from the mirror is a bug.
    let mut model_staked: u128 = 0;
    let mut model_pending: u128 = 0;
    let mut last_accrual_seen: i64 = 0;

    for _ in 0..num_actions {
        let action: FuzzAction = match u.arbitrary() {
            Ok(a) => a,
            Err(_) => break,
        };

        match action {
            FuzzAction::Stake { units } => {
                if ledger.stake(OWNER, units).is_ok() {
                    model_staked += units as u128;
                }
            }

            FuzzAction::Unstake { units } => {
                if ledger.unstake(OWNER, units).is_ok() {
                    model_staked -= units as u128;
                }
            }

            FuzzAction::Accrue { advance_secs } => {
                clock.advance(advance_secs);
                if let Ok(accrual) = ledger.accrue(OWNER, clock.now()) {
                    model_pending += accrual.accrued as u128;
                }
            }

            FuzzAction::Claim => match ledger.claim(OWNER) {
                Ok(claimed) => {
                    // ── Invariant: claim drains exactly the accrued total ──
                    assert_eq!(
                        claimed.amount as u128, model_pending,
                        "claim paid {} with {} recorded",
                        claimed.amount, model_pending
                    );
                    assert_eq!(claimed.account.pending_rewards, 0);
                    model_pending = 0;
                }
                Err(_) => {
                    // ── Invariant: claims only fail when nothing is pending ──
                    assert_eq!(
                        model_pending, 0,
                        "claim refused with {model_pending} units pending"
                    );
                }
            },
        }

        let account = ledger
            .get_account(OWNER)
            .expect("in-memory loads cannot fail");

        // ── Invariant: balance and pending match the mirror exactly ──
        assert_eq!(account.staked as u128, model_staked);
        assert_eq!(account.pending_rewards as u128, model_pending);

        // ── Invariant: the tier is always derived from the balance ──
        assert_eq!(account.tier, Tier::for_amount(account.staked));
        assert_eq!(
            account.can_create_market(),
            account.staked >= BRONZE_MIN_UNITS
        );

        // ── Invariant: the accrual clock never runs backwards ──
        assert!(
            account.last_accrual_time >= last_accrual_seen,
            "accrual clock moved {} → {}",
            last_accrual_seen,
            account.last_accrual_time
        );
        last_accrual_seen = account.last_accrual_time;
    }
});
