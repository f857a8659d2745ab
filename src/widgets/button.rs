//! Button widget: an activatable button with an optional callback.
//!
//! Activation goes through [`Form::activate`](crate::form::Form::activate),
//! which hands the callback mutable access to the whole form.

use std::fmt;

use crate::error::Result;
use crate::form::Form;
use crate::widget::WidgetId;

/// Callback run synchronously when a button is activated. An error aborts
/// the activation and is returned to whoever activated the button.
pub type Callback = Box<dyn FnMut(&mut Form) -> Result<()>>;

/// Creation options for a [`Button`].
pub struct ButtonConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub text: String,
    /// `None` is a legal no-op handler.
    pub on_activate: Option<Callback>,
    pub parent: Option<WidgetId>,
}

impl ButtonConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            text: text.into(),
            on_activate: None,
            parent: None,
        }
    }

    /// Attach an activation callback (builder).
    pub fn on_activate(mut self, callback: impl FnMut(&mut Form) -> Result<()> + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new("button", 0, 0, "Button")
    }
}

impl fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("name", &self.name)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("text", &self.text)
            .field("on_activate", &self.on_activate.is_some())
            .field("parent", &self.parent)
            .finish()
    }
}

/// A push button.
pub struct Button {
    text: String,
    on_activate: Option<Callback>,
}

impl Button {
    pub fn new(text: impl Into<String>, on_activate: Option<Callback>) -> Self {
        Self {
            text: text.into(),
            on_activate,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether an activation callback is attached.
    pub fn has_callback(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Replace the activation callback.
    pub fn set_on_activate(&mut self, callback: Option<Callback>) {
        self.on_activate = callback;
    }

    /// Detach the callback so it can run with mutable access to the form.
    pub(crate) fn take_callback(&mut self) -> Option<Callback> {
        self.on_activate.take()
    }

    /// Re-attach a callback taken with [`take_callback`](Self::take_callback),
    /// unless the callback installed a replacement while it ran.
    pub(crate) fn restore_callback(&mut self, callback: Callback) {
        if self.on_activate.is_none() {
            self.on_activate = Some(callback);
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}
