use std::cell::RefCell;
use std::collections::BTreeSet;

use super::{FieldError, FieldErrors, FieldName};

/// Per-form field state: which inputs are registered and which error each
/// one currently displays.
///
/// Methods take `&self`; implementations hold their state behind interior
/// mutability so the registry can be shared with the submit continuation.
pub trait FieldRegistry {
    fn register(&self, field: FieldName);
    fn is_registered(&self, field: FieldName) -> bool;
    fn get_error(&self, field: FieldName) -> Option<FieldError>;
    fn set_error(&self, field: FieldName, error: FieldError);
    fn clear_errors(&self);

    fn register_all(&self) {
        for field in FieldName::ALL {
            self.register(field);
        }
    }

    fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FieldName::ALL {
            if let Some(error) = self.get_error(field) {
                errors.insert(field, error);
            }
        }
        errors
    }
}

#[derive(Debug, Default)]
pub struct MemoryFieldRegistry {
    registered: RefCell<BTreeSet<FieldName>>,
    errors: RefCell<FieldErrors>,
}

impl MemoryFieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every field of the form registered.
    pub fn with_all_fields() -> Self {
        let registry = Self::new();
        registry.register_all();
        registry
    }
}

impl FieldRegistry for MemoryFieldRegistry {
    fn register(&self, field: FieldName) {
        self.registered.borrow_mut().insert(field);
    }

    fn is_registered(&self, field: FieldName) -> bool {
        self.registered.borrow().contains(&field)
    }

    fn get_error(&self, field: FieldName) -> Option<FieldError> {
        self.errors.borrow().get(field).cloned()
    }

    fn set_error(&self, field: FieldName, error: FieldError) {
        if !self.is_registered(field) {
            log::warn!("Ignoring error for unregistered field: {}", field);
            return;
        }
        self.errors.borrow_mut().replace(field, error);
    }

    fn clear_errors(&self) {
        *self.errors.borrow_mut() = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldErrorKind;

    #[test]
    fn test_set_error_replaces_existing() {
        let registry = MemoryFieldRegistry::with_all_fields();
        registry.set_error(FieldName::Email, FieldError::validation("Invalid email"));
        registry.set_error(FieldName::Email, FieldError::server("taken"));

        let error = registry.get_error(FieldName::Email).unwrap();
        assert_eq!(error.kind(), FieldErrorKind::Server);
        assert_eq!(error.message(), "taken");
    }

    #[test]
    fn test_unregistered_field_is_ignored() {
        let registry = MemoryFieldRegistry::new();
        registry.register(FieldName::Email);
        registry.set_error(FieldName::Password, FieldError::server("too short"));
        assert!(registry.get_error(FieldName::Password).is_none());
        assert!(registry.errors().is_empty());
    }

    #[test]
    fn test_clear_errors() {
        let registry = MemoryFieldRegistry::with_all_fields();
        registry.set_error(FieldName::Password, FieldError::server("too short"));
        registry.set_error(FieldName::Email, FieldError::server("taken"));
        assert_eq!(registry.errors().len(), 2);

        registry.clear_errors();
        assert!(registry.errors().is_empty());
        assert!(registry.is_registered(FieldName::Email));
    }
}
