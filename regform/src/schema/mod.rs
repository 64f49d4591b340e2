mod helpers;
mod user;

pub use helpers::{validate_range, validate_with_pattern, Validator};
pub use user::UserSchema;

use crate::form::{FieldErrors, FormData, FormInput};

/// Client-side rule set evaluated before anything is sent.
///
/// Implementations report at most one error per field; a field set other
/// than [`crate::FieldName::ALL`] cannot be expressed.
pub trait Schema {
    fn validate(&self, input: &FormInput) -> Result<FormData, FieldErrors>;
}
