//! Tier policy: staked balance → tier, APY, and benefit set.

use {
    crate::constants::{
        APY_BRONZE_BPS, APY_GOLD_BPS, APY_PLATINUM_BPS, APY_SILVER_BPS, BRONZE_MIN_UNITS,
        GOLD_MIN_UNITS, PLATINUM_MIN_UNITS, SILVER_MIN_UNITS,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::fmt,
};

const BRONZE_BENEFITS: &[&str] = &["Prediction access", "Basic rewards"];
const SILVER_BENEFITS: &[&str] = &["Prediction access", "Boosted rewards", "Weighted votes"];
const GOLD_BENEFITS: &[&str] = &[
    "Prediction access",
    "Premium rewards",
    "Weighted votes",
    "Exclusive NFTs",
];
const PLATINUM_BENEFITS: &[&str] = &[
    "Prediction access",
    "Maximum rewards",
    "Weighted votes",
    "Exclusive NFTs",
    "Governance",
];

/// Staking tier derived from a staked balance.
///
/// Tiers are strictly ordered by entry threshold; [`Tier::for_amount`]
/// checks the thresholds descending, first match wins. `None` is below the
/// minimum entry stake: no rewards, no platform access.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub enum Tier {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Derive the tier for a staked balance (base units).
    pub fn for_amount(staked: u64) -> Tier {
        if staked >= PLATINUM_MIN_UNITS {
            Tier::Platinum
        } else if staked >= GOLD_MIN_UNITS {
            Tier::Gold
        } else if staked >= SILVER_MIN_UNITS {
            Tier::Silver
        } else if staked >= BRONZE_MIN_UNITS {
            Tier::Bronze
        } else {
            Tier::None
        }
    }

    /// Reward rate as APY basis points.
    pub fn apy_bps(self) -> u64 {
        match self {
            Tier::None => 0,
            Tier::Bronze => APY_BRONZE_BPS,
            Tier::Silver => APY_SILVER_BPS,
            Tier::Gold => APY_GOLD_BPS,
            Tier::Platinum => APY_PLATINUM_BPS,
        }
    }

    /// Minimum staked balance (base units) to hold this tier.
    pub fn min_units(self) -> u64 {
        match self {
            Tier::None => 0,
            Tier::Bronze => BRONZE_MIN_UNITS,
            Tier::Silver => SILVER_MIN_UNITS,
            Tier::Gold => GOLD_MIN_UNITS,
            Tier::Platinum => PLATINUM_MIN_UNITS,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Tier::None => "None",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }

    /// Platform benefits unlocked at this tier.
    pub fn benefits(self) -> &'static [&'static str] {
        match self {
            Tier::None => &[],
            Tier::Bronze => BRONZE_BENEFITS,
            Tier::Silver => SILVER_BENEFITS,
            Tier::Gold => GOLD_BENEFITS,
            Tier::Platinum => PLATINUM_BENEFITS,
        }
    }

    /// Ascending catalog of the four real tiers, for display surfaces.
    pub fn catalog() -> &'static [TierInfo] {
        &TIER_CATALOG
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the tier catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub name: &'static str,
    /// Entry threshold in base units.
    pub min_units: u64,
    /// Reward rate as APY basis points.
    pub apy_bps: u64,
    pub benefits: &'static [&'static str],
}

const TIER_CATALOG: [TierInfo; 4] = [
    TierInfo {
        tier: Tier::Bronze,
        name: "Bronze",
        min_units: BRONZE_MIN_UNITS,
        apy_bps: APY_BRONZE_BPS,
        benefits: BRONZE_BENEFITS,
    },
    TierInfo {
        tier: Tier::Silver,
        name: "Silver",
        min_units: SILVER_MIN_UNITS,
        apy_bps: APY_SILVER_BPS,
        benefits: SILVER_BENEFITS,
    },
    TierInfo {
        tier: Tier::Gold,
        name: "Gold",
        min_units: GOLD_MIN_UNITS,
        apy_bps: APY_GOLD_BPS,
        benefits: GOLD_BENEFITS,
    },
    TierInfo {
        tier: Tier::Platinum,
        name: "Platinum",
        min_units: PLATINUM_MIN_UNITS,
        apy_bps: APY_PLATINUM_BPS,
        benefits: PLATINUM_BENEFITS,
    },
];

/// Progress through the current threshold band toward the next tier, as a
/// percentage in `[0.0, 100.0]`.
///
/// Bands match the entry thresholds exactly: `[0, 500)`, `[500, 1000)` and
/// `[1000, 2500)` tokens; at or above the Platinum threshold the value
/// saturates at 100. The first band interpolates from zero, so the Bronze
/// entry stake of 100 tokens reads as 20%.
pub fn progress_to_next_tier(staked: u64) -> f64 {
    let (band_start, band_end) = if staked >= PLATINUM_MIN_UNITS {
        return 100.0;
    } else if staked >= GOLD_MIN_UNITS {
        (GOLD_MIN_UNITS, PLATINUM_MIN_UNITS)
    } else if staked >= SILVER_MIN_UNITS {
        (SILVER_MIN_UNITS, GOLD_MIN_UNITS)
    } else {
        (0, SILVER_MIN_UNITS)
    };
    let pct = (staked - band_start) as f64 / (band_end - band_start) as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}
