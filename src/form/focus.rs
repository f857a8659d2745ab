//! Tab order over a form's focusable components.
//!
//! [`FocusChain`] keeps the focusable widgets in registration order. Labels
//! and frames are never focusable.

use super::Form;
use crate::error::{FormError, Result};
use crate::registry::Registry;
use crate::validate::{enforce_string, Value};
use crate::widget::{WidgetId, WidgetTree};

/// Ordered list of focusable widgets with a cursor.
#[derive(Debug)]
pub struct FocusChain {
    nodes: Vec<WidgetId>,
    current: Option<usize>,
}

impl FocusChain {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            current: None,
        }
    }

    /// Rebuild from the registry, keeping focus on the same widget if it is
    /// still focusable.
    pub fn rebuild(&mut self, registry: &Registry, widgets: &WidgetTree) {
        let old_focused = self.current_node();

        self.nodes.clear();
        self.current = None;
        for (_, id) in registry.iter() {
            let focusable = widgets.get(id).is_some_and(|w| w.kind().is_focusable());
            if focusable && !self.nodes.contains(&id) {
                self.nodes.push(id);
            }
        }

        if let Some(old_id) = old_focused {
            self.current = self.nodes.iter().position(|&n| n == old_id);
        }
    }

    pub fn current_node(&self) -> Option<WidgetId> {
        self.current.and_then(|idx| self.nodes.get(idx).copied())
    }

    /// Move to the next widget, wrapping around.
    pub fn focus_next(&mut self) -> Option<WidgetId> {
        if self.nodes.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(idx) => (idx + 1) % self.nodes.len(),
            None => 0,
        };
        self.current = Some(next);
        self.nodes.get(next).copied()
    }

    /// Move to the previous widget, wrapping around.
    pub fn focus_previous(&mut self) -> Option<WidgetId> {
        if self.nodes.is_empty() {
            return None;
        }
        let prev = match self.current {
            Some(0) | None => self.nodes.len() - 1,
            Some(idx) => idx - 1,
        };
        self.current = Some(prev);
        self.nodes.get(prev).copied()
    }

    /// Focus `id` if it is in the chain.
    pub fn focus_node(&mut self, id: WidgetId) -> bool {
        match self.nodes.iter().position(|&n| n == id) {
            Some(pos) => {
                self.current = Some(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.current = None;
    }
}

impl Default for FocusChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Name of the focused component, if any.
    pub fn focused(&self) -> Option<&str> {
        let id = self.focus.current_node()?;
        self.widgets.get(id).map(|w| w.name())
    }

    pub fn focused_id(&self) -> Option<WidgetId> {
        self.focus.current_node()
    }

    /// Tab forward. Returns the newly focused component name.
    pub fn focus_next(&mut self) -> Option<&str> {
        let id = self.focus.focus_next()?;
        self.widgets.get(id).map(|w| w.name())
    }

    /// Tab backward. Returns the newly focused component name.
    pub fn focus_previous(&mut self) -> Option<&str> {
        let id = self.focus.focus_previous()?;
        self.widgets.get(id).map(|w| w.name())
    }

    /// Focus the first component registered under `name`.
    pub fn focus(&mut self, name: impl Into<Value>) -> Result<()> {
        let name = name.into();
        let label = enforce_string(&name, "name")?.to_owned();
        let id = self
            .registry
            .lookup(&name)?
            .ok_or_else(|| FormError::UnknownComponent(label.clone()))?;
        if !self.focus.focus_node(id) {
            let widget_type = self.widgets.get(id).map_or("Unknown", |w| w.widget_type());
            return Err(FormError::UnsupportedWidgetType {
                name: label,
                widget_type,
                operation: "focus",
            });
        }
        Ok(())
    }

    pub(super) fn rebuild_focus(&mut self) {
        self.focus.rebuild(&self.registry, &self.widgets);
    }
}
