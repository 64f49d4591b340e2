use clap::Command;

use crate::FieldName;

pub fn fields_subcommand() -> Command {
    Command::new("fields").about("Lists the form fields in declaration order")
}

pub fn handle_fields() {
    for field in FieldName::ALL {
        println!(
            "{:<20}{:<10}{}",
            field.as_str(),
            field.input_type(),
            field.placeholder()
        );
    }
}
