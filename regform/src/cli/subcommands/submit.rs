use clap::{Arg, ArgMatches, Command};

use crate::{
    FieldName, FieldRegistry, FormConfig, FormInput, HttpClient,
    LifetimeToken, MemoryFieldRegistry, Notifier, SubmitController,
    SubmitOutcome, UserSchema,
};

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

pub fn submit_subcommand() -> Command {
    with_field_args(
        Command::new("submit")
            .about("Validates the form and posts it to the endpoint")
            .arg_required_else_help(true),
    )
}

pub fn validate_subcommand() -> Command {
    with_field_args(
        Command::new("validate")
            .about("Validates the form without submitting it")
            .arg_required_else_help(true),
    )
}

fn with_field_args(command: Command) -> Command {
    FieldName::ALL.iter().fold(command, |command, field| {
        command.arg(
            Arg::new(field.as_str())
                .long(arg_name(*field))
                .default_value("")
                .help(field.placeholder()),
        )
    })
}

fn arg_name(field: FieldName) -> &'static str {
    match field {
        FieldName::Email => "email",
        FieldName::GithubUrl => "github-url",
        FieldName::YearsOfExperience => "years",
        FieldName::Password => "password",
        FieldName::ConfirmPassword => "confirm-password",
    }
}

fn input_from_matches(matches: &ArgMatches) -> FormInput {
    let mut input = FormInput::new();
    for field in FieldName::ALL {
        if let Some(value) = matches.get_one::<String>(field.as_str()) {
            input.set(field, value.as_str());
        }
    }
    input
}

fn print_field_errors(registry: &MemoryFieldRegistry) {
    for (field, error) in registry.errors().iter() {
        println!("{} ({}): {}", field, error.kind().as_str(), error);
    }
}

pub fn handle_validate(matches: &ArgMatches, config: &FormConfig) -> bool {
    let input = input_from_matches(matches);
    let registry = MemoryFieldRegistry::with_all_fields();
    let controller = SubmitController::new(
        UserSchema::new(),
        HttpClient::from_config(config),
        TerminalNotifier,
    )
    .with_config(config);

    match controller.validate(&input, &registry) {
        Ok(_) => {
            println!("valid");
            true
        }
        Err(_) => {
            print_field_errors(&registry);
            false
        }
    }
}

pub async fn handle_submit(matches: &ArgMatches, config: &FormConfig) -> bool {
    let input = input_from_matches(matches);
    let registry = MemoryFieldRegistry::with_all_fields();
    let token = LifetimeToken::new();
    let controller = SubmitController::new(
        UserSchema::new(),
        HttpClient::from_config(config),
        TerminalNotifier,
    )
    .with_config(config);

    log::info!("Submitting to {}{}", config.endpoint(), config.path());
    match controller.submit(&input, &registry, &token).await {
        SubmitOutcome::Accepted { applied } if applied.is_empty() => {
            println!("submitted");
            true
        }
        SubmitOutcome::Accepted { .. } | SubmitOutcome::Invalid(_) => {
            print_field_errors(&registry);
            false
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Discarded => false,
    }
}
