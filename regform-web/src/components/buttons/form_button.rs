use leptos::*;

use super::button_type::ButtonType;

#[derive(Clone)]
pub struct FormButton {
    button_type: ButtonType,
    enabled: bool,
    text: Option<String>,
}

impl FormButton {
    pub fn new(button_type: ButtonType, text: Option<&str>) -> Self {
        Self {
            button_type,
            enabled: true,
            text: text.map(|s| s.to_string()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| self.button_type.button_text().to_string())
    }

    pub fn button_class(&self) -> String {
        self.button_type.button_class(!self.is_enabled())
    }

    pub fn into_view(self) -> View {
        view! {
            <button
                type="submit"
                class=self.button_class()
                disabled={!self.is_enabled()}
            >
                {self.text()}
            </button>
        }
        .into_view()
    }
}
