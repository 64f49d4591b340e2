use serde_json::{Map, Value};

use crate::config::ServerErrorPolicy;
use crate::error::SubmitError;
use crate::form::{FieldError, FieldName};

/// Body of a completed submission: `{ errors?: { [field]: message } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerResponse {
    errors: Map<String, Value>,
}

impl ServerResponse {
    /// An empty body or a missing `errors` key means no errors. A body that
    /// is not a JSON object, or an `errors` entry that is not an object, is
    /// malformed.
    pub fn parse(body: &[u8]) -> Result<Self, SubmitError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;

        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(SubmitError::MalformedResponse(format!(
                    "expected an object, got {}",
                    type_name(&other)
                )))
            }
        };

        match object.remove("errors") {
            None => Ok(Self::default()),
            Some(Value::Object(errors)) => Ok(Self { errors }),
            Some(other) => Err(SubmitError::MalformedResponse(format!(
                "expected errors to be an object, got {}",
                type_name(&other)
            ))),
        }
    }

    pub fn raw_errors(&self) -> &Map<String, Value> {
        &self.errors
    }

    /// Field errors to apply, in declaration order. Keys outside the field
    /// set and falsy entries are skipped.
    pub fn field_errors(
        &self,
        policy: ServerErrorPolicy,
    ) -> Vec<(FieldName, FieldError)> {
        let matches = FieldName::ALL.into_iter().filter_map(|field| {
            self.errors
                .get(field.as_str())
                .filter(|value| is_truthy(value))
                .map(|value| (field, FieldError::server(message_of(value))))
        });
        match policy {
            ServerErrorPolicy::FirstMatch => matches.take(1).collect(),
            ServerErrorPolicy::AllFields => matches.collect(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
