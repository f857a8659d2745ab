//! Component registry: ordered `(name, handle)` entries.
//!
//! Insertion order is the intended tab/z order. Names are unique by
//! convention only: duplicates are accepted and lookup returns the first.

use tracing::trace;

use crate::error::Result;
use crate::validate::{enforce_string, Value};
use crate::widget::WidgetId;

/// The ordered name → widget registry of one form.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: Vec<(String, WidgetId)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. No uniqueness check.
    pub fn register(&mut self, name: impl Into<String>, id: WidgetId) {
        let name = name.into();
        trace!(name = %name, position = self.entries.len(), "registered component");
        self.entries.push((name, id));
    }

    /// First widget registered under `name`, or `None`.
    ///
    /// Fails if `name` is not a non-blank string.
    pub fn lookup(&self, name: &Value) -> Result<Option<WidgetId>> {
        let name = enforce_string(name, "name")?;
        Ok(self.find(name))
    }

    /// Unvalidated first-match scan.
    pub(crate) fn find(&self, name: &str) -> Option<WidgetId> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, id)| *id)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WidgetId)> + '_ {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
