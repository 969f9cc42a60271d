//! clap command definitions for the staking CLI.

use clap::{App, AppSettings, Arg, SubCommand};

fn is_amount(string: String) -> Result<(), String> {
    match string.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(()),
        _ => Err(format!(
            "Unable to parse input amount as positive decimal tokens, provided: {string}"
        )),
    }
}

fn is_unix_timestamp(string: String) -> Result<(), String> {
    string
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| format!("Unable to parse input as a unix timestamp, provided: {string}"))
}

// ── Subcommand Definition (clap) ────────────────────────────────────
pub trait StakingSubCommands {
    fn staking_subcommands(self) -> Self;
}

impl StakingSubCommands for App<'_, '_> {
    fn staking_subcommands(self) -> Self {
        self.subcommand(
            SubCommand::with_name("stake")
                .about("Stake tokens to enter or upgrade a tier")
                .arg(
                    Arg::with_name("owner")
                        .long("owner")
                        .value_name("ADDRESS")
                        .takes_value(true)
                        .required(true)
                        .help("Wallet address the stake account belongs to"),
                )
                .arg(
                    Arg::with_name("amount")
                        .index(1)
                        .value_name("AMOUNT")
                        .takes_value(true)
                        .required(true)
                        .validator(is_amount)
                        .help("Amount to stake, in decimal tokens (minimum 100 per call)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("unstake")
                .about("Withdraw staked tokens (pending rewards are kept)")
                .arg(
                    Arg::with_name("owner")
                        .long("owner")
                        .value_name("ADDRESS")
                        .takes_value(true)
                        .required(true)
                        .help("Wallet address the stake account belongs to"),
                )
                .arg(
                    Arg::with_name("amount")
                        .index(1)
                        .value_name("AMOUNT")
                        .takes_value(true)
                        .required(true)
                        .validator(is_amount)
                        .help("Amount to withdraw, in decimal tokens"),
                ),
        )
        .subcommand(
            SubCommand::with_name("claim")
                .about("Claim all pending rewards, projected up to the current time")
                .arg(
                    Arg::with_name("owner")
                        .long("owner")
                        .value_name("ADDRESS")
                        .takes_value(true)
                        .required(true)
                        .help("Wallet address the stake account belongs to"),
                ),
        )
        .subcommand(
            SubCommand::with_name("accrue")
                .about("Project rewards owed for elapsed time into the pending balance")
                .arg(
                    Arg::with_name("owner")
                        .long("owner")
                        .value_name("ADDRESS")
                        .takes_value(true)
                        .required(true)
                        .help("Wallet address the stake account belongs to"),
                )
                .arg(
                    Arg::with_name("at")
                        .long("at")
                        .value_name("UNIX_TS")
                        .takes_value(true)
                        .validator(is_unix_timestamp)
                        .help("Project as of this unix timestamp [default: now]"),
                ),
        )
        .subcommand(
            SubCommand::with_name("info")
                .about("Display a stake account: balances, tier, progress, eligibility")
                .arg(
                    Arg::with_name("owner")
                        .long("owner")
                        .value_name("ADDRESS")
                        .takes_value(true)
                        .required(true)
                        .help("Wallet address the stake account belongs to"),
                ),
        )
        .subcommand(
            SubCommand::with_name("tiers").about("Display the tier catalog: thresholds, APY, benefits"),
        )
        .subcommand(
            SubCommand::with_name("list").about("List every stake account in the ledger file"),
        )
    }
}

pub fn get_clap_app<'ab, 'v>(name: &str, about: &'ab str, version: &'v str) -> App<'ab, 'v> {
    App::new(name)
        .about(about)
        .version(version)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("ledger")
                .long("ledger")
                .value_name("FILE")
                .takes_value(true)
                .global(true)
                .default_value("mundial-ledger.yaml")
                .help("YAML ledger file accounts are persisted in"),
        )
        .arg(
            Arg::with_name("output_format")
                .long("output")
                .value_name("FORMAT")
                .takes_value(true)
                .global(true)
                .possible_values(&["json", "json-compact"])
                .help("Return information in specified output format"),
        )
        .staking_subcommands()
}
