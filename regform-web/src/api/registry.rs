use leptos::*;
use regform::{FieldError, FieldName, FieldRegistry, FormInput};

/// Value and error signals backing one rendered input.
#[derive(Clone, Copy)]
pub struct FieldSignals {
    pub value: RwSignal<String>,
    pub error: RwSignal<Option<FieldError>>,
}

impl FieldSignals {
    fn new() -> Self {
        Self {
            value: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }
}

/// Field registry whose state lives in reactive signals, so error changes
/// made by the submit controller re-render the matching input.
#[derive(Clone, Copy)]
pub struct SignalFieldRegistry {
    fields: [FieldSignals; 5],
    registered: RwSignal<Vec<FieldName>>,
}

impl Default for SignalFieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalFieldRegistry {
    pub fn new() -> Self {
        Self {
            fields: std::array::from_fn(|_| FieldSignals::new()),
            registered: create_rw_signal(Vec::new()),
        }
    }

    pub fn signals(&self, field: FieldName) -> FieldSignals {
        self.fields[field.index()]
    }

    /// Snapshot of the current input values.
    pub fn input(&self) -> FormInput {
        let mut input = FormInput::new();
        for field in FieldName::ALL {
            input.set(field, self.signals(field).value.get_untracked());
        }
        input
    }
}

impl FieldRegistry for SignalFieldRegistry {
    fn register(&self, field: FieldName) {
        if !self.is_registered(field) {
            self.registered.update(|fields| fields.push(field));
        }
    }

    fn is_registered(&self, field: FieldName) -> bool {
        self.registered.with_untracked(|fields| fields.contains(&field))
    }

    fn get_error(&self, field: FieldName) -> Option<FieldError> {
        self.signals(field).error.get_untracked()
    }

    fn set_error(&self, field: FieldName, error: FieldError) {
        if !self.is_registered(field) {
            log::warn!("Ignoring error for unregistered field {}", field);
            return;
        }
        self.signals(field).error.set(Some(error));
    }

    fn clear_errors(&self) {
        for signals in self.fields {
            if signals.error.with_untracked(Option::is_some) {
                signals.error.set(None);
            }
        }
    }
}
