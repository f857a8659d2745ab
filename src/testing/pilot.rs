//! Pilot: drive a headless form the way a user would.
//!
//! The `Pilot` owns a [`Form`] on a [`HeadlessSurface`] with a fixed clock and
//! offers keyboard-level operations (tab, type, backspace, press) on the
//! focused component, plus direct selection helpers for pickers.

use chrono::NaiveDate;

use super::snapshot::form_to_string;
use crate::clock::FixedClock;
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::form::{Form, FormEvent};
use crate::surface::HeadlessSurface;
use crate::validate::Value;
use crate::widget::Widget;

/// Headless form driver for tests.
///
/// ```ignore
/// let mut pilot = Pilot::new(FormConfig::default())?;
/// pilot.form_mut().create_text_entry(TextEntryConfig::new("txt_name", 0, 0, 20))?;
/// pilot.tab();
/// pilot.type_text("Ada")?;
/// ```
pub struct Pilot {
    form: Form,
}

impl Pilot {
    /// A fresh headless form whose clock reads `2026-10-18`.
    pub fn new(config: FormConfig) -> Result<Self> {
        Ok(Self::with_form(headless_form(config)?))
    }

    /// Drive an already built form.
    pub fn with_form(form: Form) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn into_form(self) -> Form {
        self.form
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    /// Move focus forward. Returns the newly focused component name.
    pub fn tab(&mut self) -> Option<String> {
        self.form.focus_next().map(str::to_owned)
    }

    /// Move focus backward.
    pub fn back_tab(&mut self) -> Option<String> {
        self.form.focus_previous().map(str::to_owned)
    }

    /// Focus a component by name.
    pub fn focus(&mut self, name: &str) -> Result<()> {
        self.form.focus(name)
    }

    /// Type into the focused text entry at its cursor.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        let widget = self.focused_widget_mut("typing")?;
        unsupported_unless(widget, "typing", |w| w.as_entry_mut().map(|entry| entry.insert(text)))
    }

    /// Delete the character before the cursor of the focused text entry.
    pub fn backspace(&mut self) -> Result<()> {
        let widget = self.focused_widget_mut("editing")?;
        unsupported_unless(widget, "editing", |w| w.as_entry_mut().map(|entry| entry.backspace()))
    }

    /// Press Enter on the focused button.
    pub fn enter(&mut self) -> Result<()> {
        let name = self
            .form
            .focused()
            .map(str::to_owned)
            .ok_or_else(|| FormError::UnknownComponent("<focused>".to_owned()))?;
        self.form.activate(name)
    }

    // ── Direct manipulation ──────────────────────────────────────────

    /// Activate a button by name.
    pub fn press(&mut self, name: &str) -> Result<()> {
        self.form.activate(name)
    }

    /// Pick a dropdown value.
    pub fn select(&mut self, name: &str, value: &str) -> Result<()> {
        let widget = self.named_widget_mut(name)?;
        match widget.as_dropdown_mut() {
            Some(dropdown) => dropdown.select(value),
            None => Err(unsupported(widget, "selection")),
        }
    }

    /// Set a spinner's value.
    pub fn spin_to(&mut self, name: &str, value: i32) -> Result<()> {
        let widget = self.named_widget_mut(name)?;
        match widget.as_spinner_mut() {
            Some(spinner) => spinner.set_value(value),
            None => Err(unsupported(widget, "spinning")),
        }
    }

    /// Pick a date on a date picker.
    pub fn pick_date(&mut self, name: &str, date: NaiveDate) -> Result<()> {
        let widget = self.named_widget_mut(name)?;
        match widget.as_date_picker_mut() {
            Some(picker) => {
                picker.set_value(date);
                Ok(())
            }
            None => Err(unsupported(widget, "date picking")),
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Take every pending form event.
    pub fn events(&mut self) -> Vec<FormEvent> {
        self.form.drain_events()
    }

    /// The headless surface the form draws on.
    pub fn surface(&self) -> Option<&HeadlessSurface> {
        self.form.surface_as::<HeadlessSurface>()
    }

    /// Outline of the form, see [`form_to_string`].
    pub fn dump(&self) -> String {
        form_to_string(&self.form)
    }

    fn focused_widget_mut(&mut self, operation: &'static str) -> Result<&mut Widget> {
        let id = self
            .form
            .focused_id()
            .ok_or_else(|| FormError::UnknownComponent(format!("<focused> for {operation}")))?;
        self.form
            .widget_mut(id)
            .ok_or_else(|| FormError::UnknownComponent("<focused>".to_owned()))
    }

    fn named_widget_mut(&mut self, name: &str) -> Result<&mut Widget> {
        self.form
            .component_mut(Value::from(name))?
            .ok_or_else(|| FormError::UnknownComponent(name.to_owned()))
    }
}

/// A form on a [`HeadlessSurface`] whose clock reads `2026-10-18 09:00`.
pub fn headless_form(config: FormConfig) -> Result<Form> {
    Form::new(config, HeadlessSurface::new(), FixedClock(pilot_now()))
}

fn pilot_now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

fn unsupported(widget: &Widget, operation: &'static str) -> FormError {
    FormError::UnsupportedWidgetType {
        name: widget.name().to_owned(),
        widget_type: widget.widget_type(),
        operation,
    }
}

fn unsupported_unless(
    widget: &mut Widget,
    operation: &'static str,
    edit: impl FnOnce(&mut Widget) -> Option<()>,
) -> Result<()> {
    match edit(&mut *widget) {
        Some(()) => Ok(()),
        None => Err(unsupported(widget, operation)),
    }
}
