//! The create-booking screen.

use super::{clear_inputs, collect_inputs, View, BODY_STYLE, HEADING_STYLE};
use crate::clock::Clock;
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::form::Form;
use crate::model::Contact;
use crate::surface::Surface;
use crate::validate::Value;
use crate::widgets::{ButtonConfig, DatePickerConfig, DropdownConfig, LabelConfig, SpinnerConfig};

pub const CREATE_BOOKING_TITLE: &str = "Create Booking";

/// Contact, time and date selection for a new booking.
pub struct CreateBooking {
    form: Form,
}

impl CreateBooking {
    /// Default window: `Create Booking`, 420x400.
    pub fn config() -> FormConfig {
        FormConfig::new().with_title(CREATE_BOOKING_TITLE).with_size(420, 400)
    }

    pub fn new(surface: impl Surface + 'static, clock: impl Clock + 'static) -> Result<Self> {
        Self::with_config(Self::config(), surface, clock)
    }

    pub fn with_config(config: FormConfig, surface: impl Surface + 'static, clock: impl Clock + 'static) -> Result<Self> {
        let mut form = Form::new(config, surface, clock)?;
        Self::setup(&mut form)?;
        Ok(Self { form })
    }

    fn setup(form: &mut Form) -> Result<()> {
        form.create_label(LabelConfig::new("lbl_create_booking", 150, 20, "Create Booking"))?;
        form.create_label(LabelConfig::new("lbl_contact", 20, 80, "Contact:"))?;
        form.create_label(LabelConfig::new("lbl_time", 20, 120, "Time:"))?;
        form.create_label(LabelConfig::new("lbl_date", 20, 160, "Date:"))?;
        form.create_dropdown(DropdownConfig::new("cmb_contact", 150, 80, 20))?;
        form.create_spinner(SpinnerConfig::new("spinbox_hour", 150, 120, 3).with_range(0, 23, 1))?;
        form.create_spinner(SpinnerConfig::new("spinbox_minute", 200, 120, 3).with_range(0, 59, 1))?;
        form.create_date_picker(DatePickerConfig::new("calendar", 150, 160, 20))?;
        form.create_button(ButtonConfig::new("btn_submit", 210, 230, "Submit"))?;
        form.create_button(ButtonConfig::new("btn_clear", 150, 230, "Clear").on_activate(|form: &mut Form| {
            clear_inputs(form);
            Ok(())
        }))?;

        form.apply_font("lbl_create_booking", "Arial", 18, HEADING_STYLE)?;
        for name in ["lbl_contact", "lbl_time", "lbl_date"] {
            form.apply_font(name, "Arial", 14, BODY_STYLE)?;
        }
        Ok(())
    }

    /// Offer `contacts` by name in `cmb_contact`. The selection is cleared.
    pub fn set_contacts(&mut self, contacts: &[Contact]) -> Result<()> {
        if contacts.is_empty() {
            return Err(FormError::EmptyCollection("contacts".to_owned()));
        }
        let dropdown = self
            .form
            .component_mut("cmb_contact")?
            .and_then(|w| w.as_dropdown_mut())
            .ok_or_else(|| FormError::UnknownComponent("cmb_contact".to_owned()))?;
        dropdown.set_values(contacts.iter().map(|c| c.name().to_owned()).collect())
    }

    /// `[contact, hour, minute, date]`, in registration order.
    pub fn submit(&self) -> Vec<Value> {
        collect_inputs(&self.form)
    }
}

impl View for CreateBooking {
    fn form(&self) -> &Form {
        &self.form
    }

    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }
}
