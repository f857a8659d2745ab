//! Label widget: static, non-interactive text.

use crate::widget::WidgetId;

/// Creation options for a [`Label`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub text: String,
    /// Container to place the label in. `None` means the form's content container.
    pub parent: Option<WidgetId>,
}

impl LabelConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            text: text.into(),
            parent: None,
        }
    }

    /// Place the label inside another frame (builder).
    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::new("label", 0, 0, "Label")
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
