//! Staking units, rates, and tier thresholds.
//!
//! All token amounts in this crate are integer base units
//! (`UNITS_PER_TOKEN` per whole token); reward rates are APY basis points.

/// Base units per whole token (10⁹, the native-token convention).
pub const UNITS_PER_TOKEN: u64 = 1_000_000_000;

/// Basis points denominator (10_000 bps = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds per day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds per year (365 days), the period APY is quoted against.
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

// ---------------------------------------------------------------------------
// Tier entry thresholds (base units)
// ---------------------------------------------------------------------------

/// Bronze entry: 100 tokens. Also the minimum stake per call.
pub const BRONZE_MIN_UNITS: u64 = 100 * UNITS_PER_TOKEN;

/// Silver entry: 500 tokens.
pub const SILVER_MIN_UNITS: u64 = 500 * UNITS_PER_TOKEN;

/// Gold entry: 1_000 tokens.
pub const GOLD_MIN_UNITS: u64 = 1_000 * UNITS_PER_TOKEN;

/// Platinum entry: 2_500 tokens.
pub const PLATINUM_MIN_UNITS: u64 = 2_500 * UNITS_PER_TOKEN;

// ---------------------------------------------------------------------------
// Tier reward rates — APY in basis points
// ---------------------------------------------------------------------------

/// Bronze: 5% APY.
pub const APY_BRONZE_BPS: u64 = 500;

/// Silver: 7% APY.
pub const APY_SILVER_BPS: u64 = 700;

/// Gold: 10% APY.
pub const APY_GOLD_BPS: u64 = 1_000;

/// Platinum: 15% APY.
pub const APY_PLATINUM_BPS: u64 = 1_500;

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// Default informational reward cadence: 7 days.
pub const DEFAULT_REWARD_CADENCE_SECS: i64 = 7 * SECONDS_PER_DAY;
