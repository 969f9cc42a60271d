use {
    clap::{crate_description, crate_version},
    mundial_cli::{
        clap_app::get_clap_app,
        cli::CliConfig,
        output::OutputFormat,
        staking::{parse_staking_command, process_staking_command},
    },
    std::{path::PathBuf, process::exit},
};

fn main() {
    env_logger::init();

    let matches =
        get_clap_app("mundial-staking", crate_description!(), crate_version!()).get_matches();

    let config = CliConfig {
        // Guaranteed by the default_value on the arg.
        ledger_path: PathBuf::from(matches.value_of("ledger").unwrap()),
        output_format: OutputFormat::from_matches(&matches),
    };

    let command = match parse_staking_command(&matches) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    match process_staking_command(&config, &command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            exit(1);
        }
    }
}
