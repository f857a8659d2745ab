//! Date picker widget: a calendar date with locale text input.

use chrono::NaiveDate;

use crate::error::{FormError, Result};
use crate::widget::WidgetId;

/// Text format accepted by [`DatePicker::set_date`]: day/month/2-digit-year.
pub const DATE_FORMAT: &str = "%d/%m/%y";

/// Creation options for a [`DatePicker`].
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub parent: Option<WidgetId>,
}

impl DatePickerConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            parent: None,
        }
    }

    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self::new("date_picker", 0, 0, 12)
    }
}

/// A date entry with a drop-down calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    width: i32,
    value: NaiveDate,
}

impl DatePicker {
    pub fn new(width: i32, today: NaiveDate) -> Self {
        Self { width, value: today }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn value(&self) -> NaiveDate {
        self.value
    }

    pub fn set_value(&mut self, date: NaiveDate) {
        self.value = date;
    }

    /// Parse `dd/mm/yy` text, e.g. `18/10/26`.
    pub fn set_date(&mut self, text: &str) -> Result<()> {
        let date = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map_err(|e| FormError::invalid_format("date", format!("'{text}': {e}")))?;
        self.value = date;
        Ok(())
    }

    /// The value rendered in the same format [`set_date`](Self::set_date) accepts.
    pub fn date_text(&self) -> String {
        self.value.format(DATE_FORMAT).to_string()
    }

    pub fn reset(&mut self, today: NaiveDate) {
        self.value = today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_at_today() {
        let picker = DatePicker::new(12, day(2026, 10, 18));
        assert_eq!(picker.value(), day(2026, 10, 18));
        assert_eq!(picker.date_text(), "18/10/26");
    }

    #[test]
    fn parses_locale_text() {
        let mut picker = DatePicker::new(12, day(2026, 10, 18));
        picker.set_date("03/11/26").unwrap();
        assert_eq!(picker.value(), day(2026, 11, 3));
    }

    #[test]
    fn rejects_unparsable_text() {
        let mut picker = DatePicker::new(12, day(2026, 10, 18));
        for bad in ["", "tomorrow", "2026-11-03", "31/02/26", "11/03"] {
            assert!(
                matches!(picker.set_date(bad), Err(FormError::InvalidFormat { .. })),
                "{bad}"
            );
        }
        assert_eq!(picker.value(), day(2026, 10, 18));
    }

    #[test]
    fn reset_returns_to_given_day() {
        let mut picker = DatePicker::new(12, day(2026, 10, 18));
        picker.set_value(day(2027, 1, 1));
        picker.reset(day(2026, 10, 19));
        assert_eq!(picker.value(), day(2026, 10, 19));
    }
}
