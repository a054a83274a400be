//! Text input value objects

/// A single-line text input with its label
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub label: String,
    pub value: String,
    /// Render the value as bullets (passwords)
    pub is_masked: bool,
}

impl InputField {
    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(label: &str, value: String) -> Self {
        Self {
            value,
            ..Self::text(label)
        }
    }

    /// Create a masked field
    pub fn masked(label: &str) -> Self {
        Self {
            is_masked: true,
            ..Self::text(label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
