//! Concrete forms of the application.
//!
//! Each screen owns a [`Form`], lays out its components on construction and
//! exposes `submit`/`clear` to the controller. Buttons that only touch the
//! form itself (clearing) are wired to callbacks; submissions are picked up by
//! the controller from the form's event queue.

pub mod add_contact;
pub mod create_booking;
pub mod login;

use crate::error::Result;
use crate::form::Form;
use crate::validate::Value;
use crate::widget::WidgetKind;

pub use add_contact::AddContact;
pub use create_booking::CreateBooking;
pub use login::Login;

/// Heading font: Arial 18 bold.
pub(crate) const HEADING_STYLE: &[&str] = &["bold", "roman", "no_underline"];
/// Body font: Arial 14 plain.
pub(crate) const BODY_STYLE: &[&str] = &["normal", "roman", "no_underline"];

/// Access shared by every screen.
pub trait View {
    fn form(&self) -> &Form;

    fn form_mut(&mut self) -> &mut Form;

    /// Reset every input to its default.
    fn clear(&mut self) {
        clear_inputs(self.form_mut());
    }

    /// Activate a button on this screen.
    fn activate(&mut self, name: &str) -> Result<()> {
        self.form_mut().activate(name)
    }
}

/// Current value of every input component, in registration order.
///
/// Entries and dropdowns yield strings, spinners ints and date pickers dates.
pub fn collect_inputs(form: &Form) -> Vec<Value> {
    form.components()
        .filter_map(|(_, widget)| match widget.kind() {
            WidgetKind::TextEntry(entry) => Some(Value::from(entry.text())),
            WidgetKind::Dropdown(dropdown) => Some(Value::from(dropdown.selected())),
            WidgetKind::Spinner(spinner) => Some(Value::from(spinner.value())),
            WidgetKind::DatePicker(picker) => Some(Value::from(picker.value())),
            _ => None,
        })
        .collect()
}

/// Empty entries and dropdown selections, reset spinners, and move date
/// pickers back to today.
pub fn clear_inputs(form: &mut Form) {
    let today = form.today();
    for id in form.component_ids() {
        let Some(widget) = form.widget_mut(id) else { continue };
        match widget.kind_mut() {
            WidgetKind::TextEntry(entry) => entry.clear(),
            WidgetKind::Dropdown(dropdown) => dropdown.clear(),
            WidgetKind::Spinner(spinner) => spinner.reset(),
            WidgetKind::DatePicker(picker) => picker.reset(today),
            _ => {}
        }
    }
}
