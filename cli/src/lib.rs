pub mod clap_app;
pub mod cli;
pub mod db;
pub mod output;
pub mod staking;
