//! Parsing and processing for the staking subcommands.

use {
    crate::{
        cli::{CliConfig, CliError, ProcessResult},
        db::LedgerDb,
        output::{
            tokens_to_units, units_to_tokens, CliAccountList, CliAccrual, CliClaim,
            CliStakeAccount, CliTierTable,
        },
    },
    clap::ArgMatches,
    mundial_staking_ledger::{Clock, LedgerConfig, StakingLedger, SystemClock, UnixTimestamp},
};

// ── CLI Command Enum Variants ───────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum StakingCliCommand {
    Stake {
        owner: String,
        amount: f64,
    },
    Unstake {
        owner: String,
        amount: f64,
    },
    Claim {
        owner: String,
    },
    Accrue {
        owner: String,
        at: Option<UnixTimestamp>,
    },
    Info {
        owner: String,
    },
    Tiers,
    List,
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_staking_command(matches: &ArgMatches<'_>) -> Result<StakingCliCommand, CliError> {
    match matches.subcommand() {
        ("stake", Some(matches)) => {
            let owner = matches.value_of("owner").unwrap().to_string();
            let amount: f64 = matches
                .value_of("amount")
                .unwrap()
                .parse()
                .map_err(|_| CliError::BadParameter("Invalid amount".to_string()))?;
            Ok(StakingCliCommand::Stake { owner, amount })
        }
        ("unstake", Some(matches)) => {
            let owner = matches.value_of("owner").unwrap().to_string();
            let amount: f64 = matches
                .value_of("amount")
                .unwrap()
                .parse()
                .map_err(|_| CliError::BadParameter("Invalid amount".to_string()))?;
            Ok(StakingCliCommand::Unstake { owner, amount })
        }
        ("claim", Some(matches)) => {
            let owner = matches.value_of("owner").unwrap().to_string();
            Ok(StakingCliCommand::Claim { owner })
        }
        ("accrue", Some(matches)) => {
            let owner = matches.value_of("owner").unwrap().to_string();
            let at = match matches.value_of("at") {
                Some(value) => Some(value.parse::<UnixTimestamp>().map_err(|_| {
                    CliError::BadParameter("Invalid timestamp".to_string())
                })?),
                None => None,
            };
            Ok(StakingCliCommand::Accrue { owner, at })
        }
        ("info", Some(matches)) => {
            let owner = matches.value_of("owner").unwrap().to_string();
            Ok(StakingCliCommand::Info { owner })
        }
        ("tiers", Some(_matches)) => Ok(StakingCliCommand::Tiers),
        ("list", Some(_matches)) => Ok(StakingCliCommand::List),
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────
pub fn process_staking_command(config: &CliConfig, command: &StakingCliCommand) -> ProcessResult {
    let db = LedgerDb::open(&config.ledger_path)?;
    let ledger = StakingLedger::new(db, SystemClock, LedgerConfig::default())?;
    match command {
        StakingCliCommand::Stake { owner, amount } => {
            process_stake(&ledger, config, owner, *amount)
        }
        StakingCliCommand::Unstake { owner, amount } => {
            process_unstake(&ledger, config, owner, *amount)
        }
        StakingCliCommand::Claim { owner } => process_claim(&ledger, config, owner),
        StakingCliCommand::Accrue { owner, at } => process_accrue(&ledger, config, owner, *at),
        StakingCliCommand::Info { owner } => process_info(&ledger, config, owner),
        StakingCliCommand::Tiers => process_tiers(&ledger, config),
        StakingCliCommand::List => process_list(&ledger, config),
    }
}

fn process_stake(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
    owner: &str,
    amount: f64,
) -> ProcessResult {
    let account = ledger.stake(owner, tokens_to_units(amount))?;
    let cli_account = CliStakeAccount::new(&account, SystemClock.now());
    Ok(config.output_format.formatted_string(&cli_account))
}

fn process_unstake(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
    owner: &str,
    amount: f64,
) -> ProcessResult {
    let account = ledger.unstake(owner, tokens_to_units(amount))?;
    let cli_account = CliStakeAccount::new(&account, SystemClock.now());
    Ok(config.output_format.formatted_string(&cli_account))
}

fn process_claim(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
    owner: &str,
) -> ProcessResult {
    // Claim drains but does not project, so bring the pending balance up
    // to the current instant first.
    let now = SystemClock.now();
    ledger.accrue(owner, now)?;
    let claimed = ledger.claim(owner)?;
    let cli_claim = CliClaim {
        owner: owner.to_string(),
        claimed_tokens: units_to_tokens(claimed.amount),
        account: CliStakeAccount::new(&claimed.account, now),
    };
    Ok(config.output_format.formatted_string(&cli_claim))
}

fn process_accrue(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
    owner: &str,
    at: Option<UnixTimestamp>,
) -> ProcessResult {
    let now = at.unwrap_or_else(|| SystemClock.now());
    let accrual = ledger.accrue(owner, now)?;
    let cli_accrual = CliAccrual::new(&accrual, now);
    Ok(config.output_format.formatted_string(&cli_accrual))
}

fn process_info(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
    owner: &str,
) -> ProcessResult {
    let account = ledger.get_account(owner)?;
    let cli_account = CliStakeAccount::new(&account, SystemClock.now());
    Ok(config.output_format.formatted_string(&cli_account))
}

fn process_tiers(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
) -> ProcessResult {
    let table = CliTierTable::new(ledger.tiers());
    Ok(config.output_format.formatted_string(&table))
}

fn process_list(
    ledger: &StakingLedger<LedgerDb, SystemClock>,
    config: &CliConfig,
) -> ProcessResult {
    let now = SystemClock.now();
    let mut accounts = Vec::new();
    for owner in ledger.store().owners() {
        let account = ledger.get_account(&owner)?;
        accounts.push(CliStakeAccount::new(&account, now));
    }
    Ok(config
        .output_format
        .formatted_string(&CliAccountList { accounts }))
}
