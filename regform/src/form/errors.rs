use std::collections::BTreeMap;
use std::fmt;

use super::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    // raised by the client-side schema
    Validation,
    // reported in the response body of a submission
    Server,
}

impl FieldErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::Validation => "validation",
            FieldErrorKind::Server => "server",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    kind: FieldErrorKind,
    message: String,
}

impl FieldError {
    pub fn new<S: Into<String>>(kind: FieldErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::new(FieldErrorKind::Validation, message)
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::new(FieldErrorKind::Server, message)
    }

    pub fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Field errors keyed by field, iterated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error recorded for a field.
    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    /// Overwrites any error already recorded for the field.
    pub fn replace(&mut self, field: FieldName, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<FieldName> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldError)> {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl IntoIterator for FieldErrors {
    type Item = (FieldName, FieldError);
    type IntoIter = std::collections::btree_map::IntoIter<FieldName, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field_is_kept() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::Password, FieldError::validation("first"));
        errors.insert(FieldName::Password, FieldError::validation("second"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Password).unwrap().message(), "first");
    }

    #[test]
    fn test_iterates_in_declaration_order() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::ConfirmPassword, FieldError::validation("c"));
        errors.insert(FieldName::Email, FieldError::validation("e"));
        errors.insert(FieldName::YearsOfExperience, FieldError::validation("y"));
        assert_eq!(
            errors.fields(),
            vec![
                FieldName::Email,
                FieldName::YearsOfExperience,
                FieldName::ConfirmPassword
            ]
        );
        assert_eq!(
            errors.to_string(),
            "email: e, yearsOfExperience: y, confirmPassword: c"
        );
    }
}
