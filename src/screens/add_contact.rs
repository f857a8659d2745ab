//! The add-contact screen.

use super::{clear_inputs, collect_inputs, View, BODY_STYLE, HEADING_STYLE};
use crate::clock::Clock;
use crate::config::FormConfig;
use crate::error::Result;
use crate::form::Form;
use crate::surface::Surface;
use crate::validate::Value;
use crate::widgets::{ButtonConfig, LabelConfig, TextEntryConfig};

pub const ADD_CONTACT_TITLE: &str = "Add Contact";

/// Name and email entry for a new contact. `btn_clear` empties both fields.
pub struct AddContact {
    form: Form,
}

impl AddContact {
    /// Default window: `Add Contact`, 420x400.
    pub fn config() -> FormConfig {
        FormConfig::new().with_title(ADD_CONTACT_TITLE).with_size(420, 400)
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
        form.create_label(LabelConfig::new("lbl_add_contact", 170, 20, "Add Contact"))?;
        form.create_label(LabelConfig::new("lbl_name", 20, 80, "Contact Name:"))?;
        form.create_label(LabelConfig::new("lbl_email", 20, 120, "Contact Email:"))?;
        form.create_text_entry(TextEntryConfig::new("txt_contact_name", 150, 80, 170))?;
        form.create_text_entry(TextEntryConfig::new("txt_contact_email", 150, 120, 170))?;
        form.create_button(ButtonConfig::new("btn_submit", 210, 230, "Submit"))?;
        form.create_button(ButtonConfig::new("btn_clear", 150, 230, "Clear").on_activate(|form: &mut Form| {
            clear_inputs(form);
            Ok(())
        }))?;

        form.apply_font("lbl_add_contact", "Arial", 18, HEADING_STYLE)?;
        for name in ["lbl_name", "lbl_email", "btn_submit", "btn_clear"] {
            form.apply_font(name, "Arial", 14, BODY_STYLE)?;
        }
        Ok(())
    }

    /// Text of every entry, in registration order: `[name, email]`.
    pub fn submit(&self) -> Vec<String> {
        collect_inputs(&self.form)
            .into_iter()
            .filter_map(|value| match value {
                Value::Str(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl View for AddContact {
    fn form(&self) -> &Form {
        &self.form
    }

    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::FixedClock;
    use crate::form::tests::today;
    use crate::surface::HeadlessSurface;
    use crate::testing::form_to_string;

    fn screen() -> AddContact {
        AddContact::new(HeadlessSurface::new(), FixedClock::on(today())).unwrap()
    }

    fn type_into(screen: &mut AddContact, name: &str, text: &str) {
        let widget = screen.form_mut().component_mut(name).unwrap().unwrap();
        widget.as_entry_mut().unwrap().set_text(text);
    }

    #[test]
    fn layout() {
        insta::assert_snapshot!(form_to_string(screen().form()), @r#"
        Form "Add Contact" 420x400
          Label lbl_add_contact @ (170, 20) "Add Contact" [Arial 18 bold roman no_underline]
          Label lbl_name @ (20, 80) "Contact Name:" [Arial 14 normal roman no_underline]
          Label lbl_email @ (20, 120) "Contact Email:" [Arial 14 normal roman no_underline]
          TextEntry txt_contact_name @ (150, 80) width=170 "" [Arial 9 normal roman no_underline]
          TextEntry txt_contact_email @ (150, 120) width=170 "" [Arial 9 normal roman no_underline]
          Button btn_submit @ (210, 230) "Submit" [Arial 14 normal roman no_underline]
          Button btn_clear @ (150, 230) "Clear" [Arial 14 normal roman no_underline]
        "#);
    }

    #[test]
    fn submit_collects_entries_in_order() {
        let mut screen = screen();
        type_into(&mut screen, "txt_contact_email", "grace@navy.mil");
        type_into(&mut screen, "txt_contact_name", "Grace Hopper");
        assert_eq!(screen.submit(), vec!["Grace Hopper".to_owned(), "grace@navy.mil".to_owned()]);
    }

    #[test]
    fn clear_button_empties_entries() {
        let mut screen = screen();
        type_into(&mut screen, "txt_contact_name", "Grace Hopper");
        screen.activate("btn_clear").unwrap();
        assert_eq!(screen.submit(), vec![String::new(), String::new()]);
    }
}
