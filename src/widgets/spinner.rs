//! Spinner widget: an integer stepped within inclusive bounds.

use crate::error::{FormError, Result};
use crate::widget::WidgetId;

/// Creation options for a [`Spinner`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub from: i32,
    pub to: i32,
    pub increment: i32,
    pub parent: Option<WidgetId>,
}

impl SpinnerConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            from: 0,
            to: 100,
            increment: 1,
            parent: None,
        }
    }

    /// Set the inclusive bounds and step (builder).
    pub fn with_range(mut self, from: i32, to: i32, increment: i32) -> Self {
        self.from = from;
        self.to = to;
        self.increment = increment;
        self
    }

    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self::new("spinner", 0, 0, 5)
    }
}

/// A numeric spin box.
///
/// Values outside `[from, to]` are rejected, never clamped. Spinners are only
/// built by `Form::create_spinner`, which checks the bounds first:
///
/// ```compile_fail
/// let inverted = appgenie::widgets::Spinner::new(10, 5, 0, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    from: i32,
    to: i32,
    increment: i32,
    width: i32,
    value: i32,
}

impl Spinner {
    /// Build a spinner from already-validated bounds (`from <= to`, `increment > 0`).
    pub(crate) fn new(from: i32, to: i32, increment: i32, width: i32) -> Self {
        Self {
            from,
            to,
            increment,
            width,
            value: Self::initial_value(from, to),
        }
    }

    /// Zero, or `from` when the range starts above zero, kept within `to`.
    pub fn initial_value(from: i32, to: i32) -> i32 {
        0.max(from).min(to)
    }

    pub fn from(&self) -> i32 {
        self.from
    }

    pub fn to(&self) -> i32 {
        self.to
    }

    pub fn increment(&self) -> i32 {
        self.increment
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value; anything outside `[from, to]` is rejected.
    pub fn set_value(&mut self, value: i32) -> Result<()> {
        if value < self.from || value > self.to {
            return Err(FormError::out_of_range(
                "value",
                format!("{value} is outside [{}, {}]", self.from, self.to),
            ));
        }
        self.value = value;
        Ok(())
    }

    /// Step up by `increment`, stopping at `to`.
    pub fn step_up(&mut self) {
        self.value = self.value.saturating_add(self.increment).min(self.to);
    }

    /// Step down by `increment`, stopping at `from`.
    pub fn step_down(&mut self) {
        self.value = self.value.saturating_sub(self.increment).max(self.from);
    }

    /// Return to the initial value.
    pub fn reset(&mut self) {
        self.value = Self::initial_value(self.from, self.to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_range() {
        let config = SpinnerConfig::default();
        assert_eq!((config.from, config.to, config.increment), (0, 100, 1));
    }

    #[test]
    fn initial_value_rules() {
        assert_eq!(Spinner::new(0, 23, 1, 3).value(), 0);
        assert_eq!(Spinner::new(5, 10, 1, 3).value(), 5);
        assert_eq!(Spinner::new(-10, 10, 1, 3).value(), 0);
        assert_eq!(Spinner::new(-10, -5, 1, 3).value(), -5);
    }

    #[test]
    fn set_value_rejects_out_of_range() {
        let mut hour = Spinner::new(0, 23, 1, 3);
        hour.set_value(23).unwrap();
        assert!(matches!(hour.set_value(24), Err(FormError::ValueOutOfRange { .. })));
        assert!(hour.set_value(-1).is_err());
        assert_eq!(hour.value(), 23);
    }

    #[test]
    fn stepping_stops_at_bounds() {
        let mut minute = Spinner::new(0, 59, 15, 3);
        minute.step_up();
        assert_eq!(minute.value(), 15);
        minute.step_up();
        minute.step_up();
        minute.step_up();
        assert_eq!(minute.value(), 59);
        minute.reset();
        minute.step_down();
        assert_eq!(minute.value(), 0);
    }
}
