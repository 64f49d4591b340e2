use clap::{Arg, ArgAction, Command};

use super::subcommands::fields::*;
use super::subcommands::submit::*;
use crate::config::{env_config, ENV_ENDPOINT, ENV_SERVER_ERRORS, ENV_TIMEOUT};
use crate::{ConfigError, FormConfig};

const PROGRAM_NAME: &str = "regform";

pub async fn run_cli(args: Vec<String>) {
    env_logger::init();
    let app = Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .about(format!(
            "{}: validate and submit registration forms",
            PROGRAM_NAME
        ))
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .global(true)
                .help("Base URL of the form endpoint"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("all-errors")
                .long("all-errors")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Apply every server-reported field error"),
        )
        .subcommand(submit_subcommand()) // "submit --email .."
        .subcommand(validate_subcommand()) // "validate --email .."
        .subcommand(fields_subcommand()); // "fields"

    let matches = app.try_get_matches_from(args);

    match matches {
        Ok(matches) => {
            let config = match create_initial_config(&matches) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Invalid configuration: {}", e);
                    std::process::exit(1);
                }
            };

            let succeeded = match matches.subcommand() {
                Some(("submit", matches)) => {
                    handle_submit(matches, &config).await
                }
                Some(("validate", matches)) => {
                    handle_validate(matches, &config)
                }
                Some(("fields", _)) => {
                    handle_fields();
                    true
                }
                _ => {
                    // given the `arg_required_else_help(true)` is defined,
                    // this branch should never be reached
                    eprintln!("No subcommand given, try '--help'");
                    false
                }
            };
            if !succeeded {
                std::process::exit(1);
            }
        }
        Err(e) => {
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                print!("{}", e);
            } else {
                eprintln!("Error parsing command-line arguments: {}", e);
                eprintln!(
                    "For more detailed help, try running '--help' or \
                     '<subcommand> --help'."
                );
                std::process::exit(1);
            }
        }
    }
}

fn create_initial_config(
    matches: &clap::ArgMatches,
) -> Result<FormConfig, ConfigError> {
    let mut config_hashmap = env_config();

    // command-line flags take precedence over the environment
    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config_hashmap.insert(ENV_ENDPOINT.to_string(), endpoint.to_string());
    }
    if let Some(timeout) = matches.get_one::<String>("timeout") {
        config_hashmap.insert(ENV_TIMEOUT.to_string(), timeout.to_string());
    }
    if matches.get_flag("all-errors") {
        config_hashmap.insert(ENV_SERVER_ERRORS.to_string(), "all".to_string());
    }

    FormConfig::from_map(&config_hashmap)
}
