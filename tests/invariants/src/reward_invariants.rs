//! Property-based tests for reward arithmetic and tier policy.
//!
//! Properties tested:
//! 1. The reward projection matches a u128 reference model, cap included.
//! 2. Zero stake, zero rate, or non-positive elapsed time pays nothing.
//! 3. The projection is monotone in stake, rate, and time.
//! 4. Doubling the stake doubles the reward up to one unit of truncation.
//! 5. A partial year never pays more than the annual rate; a full year on
//!    whole tokens pays it exactly.
//! 6. Tier derivation is consistent with the catalog and monotone.
//! 7. Progress toward the next tier is a percentage, monotone per band.

#[cfg(test)]
mod tests {
    use {
        mundial_staking_ledger::{
            constants::{BRONZE_MIN_UNITS, GOLD_MIN_UNITS, PLATINUM_MIN_UNITS, SILVER_MIN_UNITS},
            progress_to_next_tier, projected_reward, StakeAccount, Tier, BPS_DENOMINATOR,
            SECONDS_PER_YEAR, UNITS_PER_TOKEN,
        },
        proptest::prelude::*,
    };

    // ── Reference models ──

    /// The projection formula, restated: u128 widening, floor division,
    /// capped at `u64::MAX`.
    fn reference_reward(staked: u64, apy_bps: u64, elapsed: i64) -> u64 {
        if elapsed <= 0 {
            return 0;
        }
        let numerator = staked as u128 * apy_bps as u128 * elapsed as u128;
        let denominator = BPS_DENOMINATOR as u128 * SECONDS_PER_YEAR as u128;
        (numerator / denominator).min(u64::MAX as u128) as u64
    }

    /// Lower edge of the progress band `staked` falls in.
    fn band_floor(staked: u64) -> u64 {
        if staked >= PLATINUM_MIN_UNITS {
            PLATINUM_MIN_UNITS
        } else if staked >= GOLD_MIN_UNITS {
            GOLD_MIN_UNITS
        } else if staked >= SILVER_MIN_UNITS {
            SILVER_MIN_UNITS
        } else {
            0
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Projection matches the reference model
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn projection_matches_reference(
            staked in any::<u64>(),
            apy_bps in 0..=10_000u64,
            elapsed in -1_000..=100 * SECONDS_PER_YEAR,
        ) {
            prop_assert_eq!(
                projected_reward(staked, apy_bps, elapsed),
                reference_reward(staked, apy_bps, elapsed)
            );
        }

        #[test]
        fn projection_zero_conditions(
            staked in any::<u64>(),
            apy_bps in 0..=10_000u64,
            elapsed in 1..=100 * SECONDS_PER_YEAR,
        ) {
            // ── INVARIANT: nothing staked, no rate, or no time pays nothing ──
            prop_assert_eq!(projected_reward(0, apy_bps, elapsed), 0);
            prop_assert_eq!(projected_reward(staked, 0, elapsed), 0);
            prop_assert_eq!(projected_reward(staked, apy_bps, 0), 0);
            prop_assert_eq!(projected_reward(staked, apy_bps, -elapsed), 0);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Projection is monotone in every argument
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn projection_monotone_in_every_argument(
            staked in 0..=1_000_000_000 * UNITS_PER_TOKEN,
            stake_bump in 0..=1_000_000 * UNITS_PER_TOKEN,
            apy_bps in 0..=1_500u64,
            apy_bump in 0..=500u64,
            elapsed in 1..=10 * SECONDS_PER_YEAR,
            extra in 0..=SECONDS_PER_YEAR,
        ) {
            let base = projected_reward(staked, apy_bps, elapsed);
            // ── INVARIANT: more stake, more rate, or more time never pays less ──
            prop_assert!(projected_reward(staked + stake_bump, apy_bps, elapsed) >= base);
            prop_assert!(projected_reward(staked, apy_bps + apy_bump, elapsed) >= base);
            prop_assert!(projected_reward(staked, apy_bps, elapsed + extra) >= base);
        }

        #[test]
        fn projection_scales_linearly_with_stake(
            staked in 1..=500_000_000 * UNITS_PER_TOKEN,
            apy_bps in 1..=1_500u64,
            elapsed in 1..=10 * SECONDS_PER_YEAR,
        ) {
            let reward_1x = projected_reward(staked, apy_bps, elapsed);
            let reward_2x = projected_reward(staked * 2, apy_bps, elapsed);

            // Doubling the stake doubles the reward up to one unit of
            // truncation.
            prop_assert!(reward_2x >= reward_1x * 2);
            prop_assert!(
                reward_2x - reward_1x * 2 <= 1,
                "2x stake pays {} against 2 * {}",
                reward_2x,
                reward_1x
            );
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Annual-rate bounds
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn projection_never_exceeds_the_annual_rate(
            staked in 0..=1_000_000_000 * UNITS_PER_TOKEN,
            apy_bps in 0..=1_500u64,
            elapsed in 1..=SECONDS_PER_YEAR,
        ) {
            let annual = (staked as u128 * apy_bps as u128 / BPS_DENOMINATOR as u128) as u64;
            // ── INVARIANT: a partial year never pays more than the full year ──
            prop_assert!(projected_reward(staked, apy_bps, elapsed) <= annual);
        }

        #[test]
        fn full_year_on_whole_tokens_is_exact(
            tokens in 0..=1_000_000_000u64,
            apy_bps in 0..=1_500u64,
        ) {
            let reward = projected_reward(tokens * UNITS_PER_TOKEN, apy_bps, SECONDS_PER_YEAR);
            // A token is 10^9 base units, so one BPS of a whole token is the
            // exact integer 10^5: a full year truncates nothing.
            prop_assert_eq!(reward, tokens * 100_000 * apy_bps);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Tier derivation is consistent and monotone
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn tier_always_covers_its_own_entry(staked in any::<u64>()) {
            let tier = Tier::for_amount(staked);
            // ── INVARIANT: a balance meets its derived tier's entry ──
            prop_assert!(staked >= tier.min_units());

            // And falls short of every higher tier's entry.
            for info in Tier::catalog() {
                if info.tier > tier {
                    prop_assert!(staked < info.min_units);
                }
            }
        }

        #[test]
        fn tier_is_monotone_in_balance(
            staked in any::<u64>(),
            bump in 0..=PLATINUM_MIN_UNITS,
        ) {
            let bumped = staked.saturating_add(bump);
            prop_assert!(Tier::for_amount(bumped) >= Tier::for_amount(staked));
        }

        #[test]
        fn eligibility_flips_exactly_at_the_entry_threshold(staked in any::<u64>()) {
            let mut account = StakeAccount::zeroed("wallet-prop");
            account.staked = staked;
            account.normalize_tier();

            let eligible = staked >= BRONZE_MIN_UNITS;
            // ── INVARIANT: platform access tracks the Bronze entry exactly ──
            prop_assert_eq!(account.can_create_market(), eligible);
            prop_assert_eq!(account.can_vote(), eligible);
            prop_assert_eq!(account.tier != Tier::None, eligible);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 5. Progress toward the next tier behaves as a percentage
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn progress_is_always_a_percentage(staked in any::<u64>()) {
            let pct = progress_to_next_tier(staked);
            prop_assert!(
                (0.0..=100.0).contains(&pct),
                "progress {} out of range for {} base units",
                pct,
                staked
            );
        }

        #[test]
        fn progress_is_monotone_within_a_band(
            staked in 0..=3 * PLATINUM_MIN_UNITS,
            bump in 0..=UNITS_PER_TOKEN,
        ) {
            let bumped = staked + bump;
            prop_assume!(band_floor(staked) == band_floor(bumped));
            prop_assert!(progress_to_next_tier(bumped) >= progress_to_next_tier(staked));
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 6. Tier catalog is strictly ascending
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    #[test]
    fn tier_catalog_is_strictly_ascending() {
        let catalog = Tier::catalog();
        assert_eq!(catalog.len(), 4);
        for pair in catalog.windows(2) {
            assert!(pair[0].tier < pair[1].tier);
            assert!(pair[0].min_units < pair[1].min_units);
            assert!(pair[0].apy_bps < pair[1].apy_bps);
            assert!(pair[0].benefits.len() < pair[1].benefits.len());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 7. Entry thresholds read as band edges
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    #[test]
    fn entry_thresholds_read_as_band_edges() {
        assert_eq!(progress_to_next_tier(0), 0.0);
        assert_eq!(progress_to_next_tier(SILVER_MIN_UNITS), 0.0);
        assert_eq!(progress_to_next_tier(GOLD_MIN_UNITS), 0.0);
        assert_eq!(progress_to_next_tier(PLATINUM_MIN_UNITS), 100.0);
        assert_eq!(progress_to_next_tier(u64::MAX), 100.0);
    }
}
