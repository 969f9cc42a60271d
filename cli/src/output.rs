//! Output formatting: JSON or aligned human-readable text.

use {
    chrono::{Duration, SecondsFormat, TimeZone, Utc},
    chrono_humanize::{Accuracy, HumanTime, Tense},
    clap::ArgMatches,
    mundial_staking_ledger::{
        progress_to_next_tier, Accrual, StakeAccount, TierInfo, UnixTimestamp, UNITS_PER_TOKEN,
    },
    serde::{Deserialize, Serialize},
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Display,
    Json,
    JsonCompact,
}

impl OutputFormat {
    pub fn from_matches(matches: &ArgMatches<'_>) -> Self {
        match matches.value_of("output_format") {
            Some("json") => OutputFormat::Json,
            Some("json-compact") => OutputFormat::JsonCompact,
            _ => OutputFormat::Display,
        }
    }

    pub fn formatted_string<T>(&self, item: &T) -> String
    where
        T: Serialize + fmt::Display,
    {
        match self {
            OutputFormat::Display => format!("{item}"),
            OutputFormat::Json => serde_json::to_string_pretty(item).unwrap_or_default(),
            OutputFormat::JsonCompact => serde_json::to_string(item).unwrap_or_default(),
        }
    }
}

/// Whole tokens for a base-unit amount (display only; may round above 2⁵³).
pub fn units_to_tokens(units: u64) -> f64 {
    units as f64 / UNITS_PER_TOKEN as f64
}

/// Base units for a decimal token amount from the command line.
pub fn tokens_to_units(tokens: f64) -> u64 {
    (tokens * UNITS_PER_TOKEN as f64).round() as u64
}

fn format_timestamp(ts: UnixTimestamp) -> Option<String> {
    if ts == 0 {
        return None;
    }
    Utc.timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn time_until_rewards(next_reward_time: UnixTimestamp, now: UnixTimestamp) -> Option<String> {
    if next_reward_time == 0 {
        return None;
    }
    if next_reward_time <= now {
        return Some("Rewards available".to_string());
    }
    let remaining = Duration::seconds(next_reward_time.saturating_sub(now));
    Some(HumanTime::from(remaining).to_text_en(Accuracy::Rough, Tense::Future))
}

// ── Account output ──────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug)]
pub struct CliStakeAccount {
    pub owner: String,
    pub staked_tokens: f64,
    pub pending_rewards_tokens: f64,
    pub tier: String,
    pub apy_pct: f64,
    pub progress_to_next_tier_pct: f64,
    pub can_create_market: bool,
    pub can_vote: bool,
    pub staking_start: Option<String>,
    pub next_reward: Option<String>,
    pub time_until_rewards: Option<String>,
}

impl CliStakeAccount {
    pub fn new(account: &StakeAccount, now: UnixTimestamp) -> Self {
        Self {
            owner: account.owner.clone(),
            staked_tokens: units_to_tokens(account.staked),
            pending_rewards_tokens: units_to_tokens(account.pending_rewards),
            tier: account.tier.to_string(),
            apy_pct: account.tier.apy_bps() as f64 / 100.0,
            progress_to_next_tier_pct: progress_to_next_tier(account.staked),
            can_create_market: account.can_create_market(),
            can_vote: account.can_vote(),
            staking_start: format_timestamp(account.staking_start_time),
            next_reward: format_timestamp(account.next_reward_time),
            time_until_rewards: time_until_rewards(account.next_reward_time, now),
        }
    }
}

impl fmt::Display for CliStakeAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stake Account: {}", self.owner)?;
        writeln!(f, "  Staked:            {} CHZ", self.staked_tokens)?;
        writeln!(f, "  Pending Rewards:   {} CHZ", self.pending_rewards_tokens)?;
        writeln!(f, "  Tier:              {} ({}% APY)", self.tier, self.apy_pct)?;
        writeln!(
            f,
            "  Next Tier:         {:.1}% of the way there",
            self.progress_to_next_tier_pct
        )?;
        writeln!(f, "  Can Create Market: {}", self.can_create_market)?;
        writeln!(f, "  Can Vote:          {}", self.can_vote)?;
        if let Some(ref start) = self.staking_start {
            writeln!(f, "  Staking Since:     {start}")?;
        }
        if let Some(ref next) = self.next_reward {
            writeln!(f, "  Next Reward Mark:  {next}")?;
        }
        if let Some(ref until) = self.time_until_rewards {
            writeln!(f, "  Rewards ETA:       {until}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliAccountList {
    pub accounts: Vec<CliStakeAccount>,
}

impl fmt::Display for CliAccountList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accounts.is_empty() {
            writeln!(f, "No stake accounts found.")?;
        } else {
            writeln!(
                f,
                "{:<44} {:>14} {:>10} {:>16} {:>10}",
                "Owner", "Staked", "Tier", "Pending Rewards", "Progress"
            )?;
            writeln!(f, "{}", "-".repeat(98))?;
            for account in &self.accounts {
                writeln!(
                    f,
                    "{:<44} {:>10.4} CHZ {:>10} {:>12.4} CHZ {:>9.1}%",
                    account.owner,
                    account.staked_tokens,
                    account.tier,
                    account.pending_rewards_tokens,
                    account.progress_to_next_tier_pct,
                )?;
            }
        }
        Ok(())
    }
}

// ── Operation receipts ──────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug)]
pub struct CliClaim {
    pub owner: String,
    pub claimed_tokens: f64,
    pub account: CliStakeAccount,
}

impl fmt::Display for CliClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Claimed {} CHZ", self.claimed_tokens)?;
        write!(f, "{}", self.account)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliAccrual {
    pub owner: String,
    pub accrued_tokens: f64,
    pub pending_rewards_tokens: f64,
    pub projected_at: Option<String>,
}

impl CliAccrual {
    pub fn new(accrual: &Accrual, now: UnixTimestamp) -> Self {
        Self {
            owner: accrual.account.owner.clone(),
            accrued_tokens: units_to_tokens(accrual.accrued),
            pending_rewards_tokens: units_to_tokens(accrual.account.pending_rewards),
            projected_at: format_timestamp(now),
        }
    }
}

impl fmt::Display for CliAccrual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accrued {} CHZ for {}", self.accrued_tokens, self.owner)?;
        writeln!(f, "  Pending Rewards:   {} CHZ", self.pending_rewards_tokens)?;
        if let Some(ref at) = self.projected_at {
            writeln!(f, "  Projected At:      {at}")?;
        }
        Ok(())
    }
}

// ── Tier catalog ────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug)]
pub struct CliTierInfo {
    pub name: String,
    pub min_tokens: f64,
    pub apy_pct: f64,
    pub benefits: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliTierTable {
    pub tiers: Vec<CliTierInfo>,
}

impl CliTierTable {
    pub fn new(catalog: &[TierInfo]) -> Self {
        let tiers = catalog
            .iter()
            .map(|info| CliTierInfo {
                name: info.name.to_string(),
                min_tokens: units_to_tokens(info.min_units),
                apy_pct: info.apy_bps as f64 / 100.0,
                benefits: info.benefits.iter().map(|b| b.to_string()).collect(),
            })
            .collect();
        Self { tiers }
    }
}

impl fmt::Display for CliTierTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>12} {:>8}  {}",
            "Tier", "Min Stake", "APY", "Benefits"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;
        for tier in &self.tiers {
            writeln!(
                f,
                "{:<10} {:>8} CHZ {:>7}%  {}",
                tier.name,
                tier.min_tokens,
                tier.apy_pct,
                tier.benefits.join(", "),
            )?;
        }
        Ok(())
    }
}
