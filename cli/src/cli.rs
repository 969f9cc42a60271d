use {
    crate::output::OutputFormat,
    mundial_staking_ledger::{LedgerError, StoreError},
    std::path::PathBuf,
    thiserror::Error,
};

/// Settings shared by every subcommand.
#[derive(Debug)]
pub struct CliConfig {
    /// The YAML ledger file accounts are persisted in.
    pub ledger_path: PathBuf,
    pub output_format: OutputFormat,
}

/// Rendered output of a processed command, ready to print.
pub type ProcessResult = Result<String, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Bad parameter: {0}")]
    BadParameter(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
