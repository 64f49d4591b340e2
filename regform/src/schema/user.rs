use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Number;
use url::Url;

use super::helpers::{validate_range, validate_with_pattern, Validator};
use super::Schema;
use crate::form::data::parse_number;
use crate::form::{FieldError, FieldErrors, FieldName, FormData, FormInput};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$"
    )
    .unwrap();
}

const INVALID_EMAIL: &str = "Invalid email";
const INVALID_URL: &str = "Invalid url";
const INVALID_GITHUB_URL: &str = "Invalid GitHub URL";
const YEARS_REQUIRED: &str = "Years of Experience is required";
const YEARS_TOO_LOW: &str = "Number must be greater than or equal to 1";
const YEARS_TOO_HIGH: &str = "Number must be less than or equal to 10";
const PASSWORD_TOO_SHORT: &str = "Password is too short";
const PASSWORD_TOO_LONG: &str = "Password is too long";
const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

const MIN_YEARS: f64 = 1.0;
const MAX_YEARS: f64 = 10.0;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 20;

/// Default registration rules. Each field reports the first rule it fails.
pub struct UserSchema {
    text_rules: Vec<(FieldName, Vec<Validator>)>,
}

impl Default for UserSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSchema {
    pub fn new() -> Self {
        let text_rules = vec![
            (
                FieldName::Email,
                vec![
                    validate_with_pattern(
                        EMAIL_REGEX.clone(),
                        INVALID_EMAIL.to_string(),
                    ),
                    // the address pattern can not express these without
                    // lookahead
                    Arc::new(|input: &str| {
                        if input.starts_with('.') || input.contains("..") {
                            Err(INVALID_EMAIL.to_string())
                        } else {
                            Ok(())
                        }
                    }) as Validator,
                ],
            ),
            (
                FieldName::GithubUrl,
                vec![
                    Arc::new(|input: &str| {
                        Url::parse(input)
                            .map(|_| ())
                            .map_err(|_| INVALID_URL.to_string())
                    }) as Validator,
                    Arc::new(|input: &str| {
                        if input.contains("github.com") {
                            Ok(())
                        } else {
                            Err(INVALID_GITHUB_URL.to_string())
                        }
                    }) as Validator,
                ],
            ),
            (
                FieldName::Password,
                vec![validate_range(
                    Some((MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)),
                    Some((MAX_PASSWORD_LENGTH, PASSWORD_TOO_LONG)),
                )],
            ),
        ];
        Self { text_rules }
    }

    fn validate_years(input: &str) -> Result<Number, String> {
        let years =
            parse_number(input).ok_or_else(|| YEARS_REQUIRED.to_string())?;
        // parse_number only yields finite numbers
        let value = years.as_f64().unwrap_or(f64::NAN);
        if value < MIN_YEARS {
            Err(YEARS_TOO_LOW.to_string())
        } else if value > MAX_YEARS {
            Err(YEARS_TOO_HIGH.to_string())
        } else {
            Ok(years)
        }
    }
}

impl Schema for UserSchema {
    fn validate(&self, input: &FormInput) -> Result<FormData, FieldErrors> {
        let mut errors = FieldErrors::new();

        for (field, validators) in &self.text_rules {
            let value = input.value(*field);
            if let Some(message) =
                validators.iter().find_map(|validate| validate(value).err())
            {
                errors.insert(*field, FieldError::validation(message));
            }
        }

        let years =
            match Self::validate_years(input.value(FieldName::YearsOfExperience))
            {
                Ok(years) => Some(years),
                Err(message) => {
                    errors.insert(
                        FieldName::YearsOfExperience,
                        FieldError::validation(message),
                    );
                    None
                }
            };

        if input.value(FieldName::Password)
            != input.value(FieldName::ConfirmPassword)
        {
            errors.insert(
                FieldName::ConfirmPassword,
                FieldError::validation(PASSWORDS_DO_NOT_MATCH),
            );
        }

        match years {
            Some(years) if errors.is_empty() => Ok(FormData {
                email: input.value(FieldName::Email).to_string(),
                github_url: input.value(FieldName::GithubUrl).to_string(),
                years_of_experience: years,
                password: input.value(FieldName::Password).to_string(),
                confirm_password: input
                    .value(FieldName::ConfirmPassword)
                    .to_string(),
            }),
            _ => Err(errors),
        }
    }
}
