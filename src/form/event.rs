//! Button activation and the form's event queue.
//!
//! Activating a button runs its callback synchronously with mutable access to
//! the form, then queues a [`FormEvent`] for whoever owns the form (usually a
//! controller) to drain.

use std::collections::VecDeque;

use tracing::debug;

use super::Form;
use crate::error::{FormError, Result};
use crate::validate::{enforce_string, Value};

/// Something that happened on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A button was activated and its callback returned `Ok`.
    Activated { name: String },
}

/// FIFO queue of [`FormEvent`]s.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<FormEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: FormEvent) {
        self.queue.push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<FormEvent> {
        self.queue.drain(..).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Form {
    /// Activate the first button registered under `name`.
    ///
    /// The callback (if any) runs before the event is queued; if it fails, the
    /// error is returned and no event is queued.
    pub fn activate(&mut self, name: impl Into<Value>) -> Result<()> {
        let name = name.into();
        let label = enforce_string(&name, "name")?.to_owned();
        let id = self
            .registry
            .lookup(&name)?
            .ok_or_else(|| FormError::UnknownComponent(label.clone()))?;

        let widget = self
            .widgets
            .get_mut(id)
            .ok_or_else(|| FormError::UnknownComponent(label.clone()))?;
        let widget_type = widget.widget_type();
        let button = widget.as_button_mut().ok_or_else(|| FormError::UnsupportedWidgetType {
            name: label.clone(),
            widget_type,
            operation: "activation",
        })?;

        debug!(name = %label, "button activated");
        if let Some(mut callback) = button.take_callback() {
            let outcome = callback(self);
            if let Some(button) = self.widgets.get_mut(id).and_then(|w| w.as_button_mut()) {
                button.restore_callback(callback);
            }
            outcome?;
        }
        self.events.push(FormEvent::Activated { name: label });
        Ok(())
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<FormEvent> {
        self.events.drain()
    }

    pub fn pending_events(&self) -> usize {
        self.events.pending_count()
    }
}
