#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    Submit,
}

impl ButtonType {
    fn color(&self) -> (&'static str, &'static str) {
        match self {
            // keep full class names, tailwind only emits what it finds
            ButtonType::Submit => ("bg-purple-600", "hover:bg-purple-700"),
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            ButtonType::Submit => "Submit",
        }
    }

    pub fn button_class(&self, is_disabled: bool) -> String {
        let (color_normal, color_hover) = self.color();
        if is_disabled {
            "inline-block px-3 bg-gray-300 text-white font-bold py-2 rounded \
             cursor-not-allowed"
                .to_string()
        } else {
            format!(
                "inline-block px-3 {} {} text-white font-bold py-2 rounded",
                color_normal, color_hover
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_disabled_class_drops_color() {
        let class = ButtonType::Submit.button_class(true);
        assert!(class.contains("cursor-not-allowed"));
        assert!(!class.contains("bg-purple-600"));
        assert!(ButtonType::Submit
            .button_class(false)
            .contains("hover:bg-purple-700"));
    }
}
