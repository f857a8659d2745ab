//! The login screen.

use super::{View, BODY_STYLE, HEADING_STYLE};
use crate::clock::Clock;
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::form::Form;
use crate::surface::Surface;
use crate::widgets::{ButtonConfig, LabelConfig, TextEntryConfig};

pub const LOGIN_TITLE: &str = "Login";

/// Username/password prompt. `btn_submit` has no callback; the controller
/// reacts to its activation event.
pub struct Login {
    form: Form,
}

impl Login {
    /// Default window: `Login`, 300x400.
    pub fn config() -> FormConfig {
        FormConfig::new().with_title(LOGIN_TITLE).with_size(300, 400)
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
        form.create_label(LabelConfig::new("lbl_login", 110, 80, "Login"))?;
        form.create_label(LabelConfig::new("lbl_username", 20, 130, "Username:"))?;
        form.create_label(LabelConfig::new("lbl_password", 20, 180, "Password:"))?;
        form.create_text_entry(TextEntryConfig::new("txt_username", 120, 130, 170))?;
        form.create_text_entry(TextEntryConfig::new("txt_password", 120, 180, 170).masked(true))?;
        form.create_button(ButtonConfig::new("btn_submit", 210, 230, "Submit"))?;

        form.apply_font("lbl_login", "Arial", 18, HEADING_STYLE)?;
        for name in ["lbl_username", "lbl_password", "btn_submit"] {
            form.apply_font(name, "Arial", 14, BODY_STYLE)?;
        }
        Ok(())
    }

    /// The entered `(username, password)`.
    pub fn submit(&self) -> Result<(String, String)> {
        Ok((self.entry_text("txt_username")?, self.entry_text("txt_password")?))
    }

    fn entry_text(&self, name: &str) -> Result<String> {
        self.form
            .component(name)?
            .and_then(|w| w.as_entry())
            .map(|entry| entry.text().to_owned())
            .ok_or_else(|| FormError::UnknownComponent(name.to_owned()))
    }
}

impl View for Login {
    fn form(&self) -> &Form {
        &self.form
    }

    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }
}
