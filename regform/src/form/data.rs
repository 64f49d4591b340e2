use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::FieldName;

/// Raw values as entered into the input widgets. Every field is text until
/// the schema has coerced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    email: String,
    github_url: String,
    years_of_experience: String,
    password: String,
    confirm_password: String,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<S: Into<String>>(mut self, field: FieldName, value: S) -> Self {
        self.set(field, value);
        self
    }

    pub fn set<S: Into<String>>(&mut self, field: FieldName, value: S) {
        *self.slot_mut(field) = value.into();
    }

    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::GithubUrl => &self.github_url,
            FieldName::YearsOfExperience => &self.years_of_experience,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Email => &mut self.email,
            FieldName::GithubUrl => &mut self.github_url,
            FieldName::YearsOfExperience => &mut self.years_of_experience,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Validated payload, posted as JSON with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub email: String,
    pub github_url: String,
    pub years_of_experience: Number,
    pub password: String,
    pub confirm_password: String,
}

impl FormData {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Coerce entered text into a JSON number the way a numeric input does:
/// surrounding whitespace is ignored, integers stay integers, anything that
/// is not a finite number yields `None`.
pub(crate) fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Number::from(int));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}
