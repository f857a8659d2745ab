//! Dropdown widget: a selection from a fixed list of values.

use crate::error::{FormError, Result};
use crate::validate::{enforce_string_list, Value};
use crate::widget::WidgetId;

/// Values used when a dropdown is created without any.
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Creation options for a [`Dropdown`].
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    /// Non-empty list of non-blank choices.
    pub values: Vec<String>,
    pub parent: Option<WidgetId>,
}

impl DropdownConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            values: DEFAULT_OPTIONS.iter().map(|v| (*v).to_owned()).collect(),
            parent: None,
        }
    }

    /// Replace the choices (builder).
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self::new("dropdown", 0, 0, 20)
    }
}

/// A read-only combo box.
///
/// Built by `Form::create_dropdown`; there is no public constructor that
/// could skip the value checks.
///
/// ```compile_fail
/// let empty = appgenie::widgets::Dropdown::new(Vec::new(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    values: Vec<String>,
    width: i32,
    selected: String,
}

impl Dropdown {
    /// `values` must already be a non-empty list of non-blank strings.
    pub(crate) fn new(values: Vec<String>, width: i32) -> Self {
        Self {
            values,
            width,
            selected: String::new(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// The current selection; empty until something is selected.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Select one of the dropdown's values.
    pub fn select(&mut self, value: &str) -> Result<()> {
        if !self.values.iter().any(|v| v == value) {
            return Err(FormError::out_of_range(
                "selected",
                format!("'{value}' is not one of {:?}", self.values),
            ));
        }
        self.selected = value.to_owned();
        Ok(())
    }

    /// Replace the choices. The selection is cleared if it is no longer offered.
    ///
    /// An empty list or a blank choice is rejected and nothing changes.
    pub fn set_values(&mut self, values: Vec<String>) -> Result<()> {
        self.values = enforce_string_list(&Value::from(values), "values")?;
        if !self.values.contains(&self.selected) {
            self.selected.clear();
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        Dropdown::new(DropdownConfig::default().values, 20)
    }

    #[test]
    fn defaults() {
        let d = dropdown();
        assert_eq!(d.values(), ["Option 1", "Option 2", "Option 3"]);
        assert_eq!(d.selected(), "");
    }

    #[test]
    fn select_known_value() {
        let mut d = dropdown();
        d.select("Option 2").unwrap();
        assert_eq!(d.selected(), "Option 2");
        d.clear();
        assert_eq!(d.selected(), "");
    }

    #[test]
    fn select_unknown_value_fails() {
        let mut d = dropdown();
        assert!(matches!(d.select("Option 9"), Err(FormError::ValueOutOfRange { .. })));
        assert_eq!(d.selected(), "");
    }

    #[test]
    fn set_values_drops_stale_selection() {
        let mut d = dropdown();
        d.select("Option 1").unwrap();
        d.set_values(vec!["Alice".into(), "Bob".into()]).unwrap();
        assert_eq!(d.selected(), "");
    }

    #[test]
    fn set_values_rejects_empty_and_blank_choices() {
        let mut d = dropdown();
        d.select("Option 3").unwrap();

        assert_eq!(d.set_values(vec![]), Err(FormError::EmptyCollection("values".into())));
        assert_eq!(d.set_values(vec![" ".into()]), Err(FormError::EmptyString("values".into())));
        assert!(d.set_values(vec!["Alice".into(), "".into()]).is_err());

        assert_eq!(d.values(), DEFAULT_OPTIONS);
        assert_eq!(d.selected(), "Option 3");
    }

    #[test]
    fn builder_values() {
        let config = DropdownConfig::default().with_values(["Alice", "Bob"]);
        assert_eq!(config.values, vec!["Alice".to_owned(), "Bob".to_owned()]);
    }
}
