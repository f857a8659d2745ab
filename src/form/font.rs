//! Font configuration for styleable components.

use tracing::debug;

use super::Form;
use crate::error::{FormError, Result};
use crate::style::{pad_style, FontDescriptor};
use crate::validate::{enforce_positive, enforce_string, enforce_text, Value};
use crate::widget::Widget;

impl Form {
    /// Resolve a font and apply it to the first component named `name`.
    ///
    /// `style` holds up to three positional flags (weight, slant, underline);
    /// missing trailing flags default to `normal`, `roman`, `no_underline`.
    /// The stored descriptor is replaced in full on every call. Only buttons,
    /// labels and text entries can be styled.
    pub fn apply_font(&mut self, name: impl Into<Value>, family: &str, size: i64, style: &[&str]) -> Result<&Widget> {
        let name = name.into();
        let label = enforce_string(&name, "component_name")?.to_owned();
        enforce_text(family, "family")?;
        enforce_positive(size, "size")?;
        pad_style(style)?;

        let id = self
            .registry
            .lookup(&name)?
            .ok_or_else(|| FormError::UnknownComponent(label.clone()))?;
        let font = FontDescriptor::resolve(family, size, style)?;

        let widget = self
            .widgets
            .get_mut(id)
            .ok_or_else(|| FormError::UnknownComponent(label.clone()))?;
        if !widget.kind().supports_font() {
            return Err(FormError::UnsupportedWidgetType {
                name: label,
                widget_type: widget.widget_type(),
                operation: "fonts",
            });
        }
        widget.font = Some(font);
        self.surface.configure_font(id, &font);
        debug!(name = %label, font = %font, "font applied");

        self.widgets
            .get(id)
            .ok_or(FormError::UnknownComponent(label))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::tests::{form, headless};
    use crate::error::{ErrorKind, FormError};
    use crate::form::Form;
    use crate::style::{FontDescriptor, FontFamily, Slant, Weight};
    use crate::widgets::{ButtonConfig, DropdownConfig, LabelConfig, TextEntryConfig};

    fn with_label() -> Form {
        let mut form = form();
        form.create_label(LabelConfig::new("lbl_login", 20, 20, "Login")).unwrap();
        form
    }

    #[test]
    fn applies_and_persists_descriptor() {
        let mut form = with_label();
        let widget = form.apply_font("lbl_login", "Arial", 18, &["bold"]).unwrap();
        let expected = FontDescriptor {
            family: FontFamily::Arial,
            size: 18,
            weight: Weight::Bold,
            slant: Slant::Roman,
            underlined: false,
        };
        assert_eq!(widget.font(), Some(&expected));
        let id = form.component_id("lbl_login").unwrap().unwrap();
        assert_eq!(headless(&form).font(id), Some(&expected));
    }

    #[test]
    fn idempotent() {
        let mut form = with_label();
        let first = *form.apply_font("lbl_login", "Times", 12, &["normal", "italic"]).unwrap().font().unwrap();
        let second = *form.apply_font("lbl_login", "Times", 12, &["normal", "italic"]).unwrap().font().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn padding_matches_explicit_defaults() {
        let mut form = with_label();
        let padded = *form.apply_font("lbl_login", "Verdana", 11, &["bold"]).unwrap().font().unwrap();
        let explicit = *form
            .apply_font("lbl_login", "Verdana", 11, &["bold", "roman", "no_underline"])
            .unwrap()
            .font()
            .unwrap();
        assert_eq!(padded, explicit);
    }

    #[test]
    fn every_call_respecifies_the_whole_font() {
        let mut form = with_label();
        form.apply_font("lbl_login", "Arial", 14, &["bold", "italic", "underline"]).unwrap();
        let font = *form.apply_font("lbl_login", "Arial", 16, &[]).unwrap().font().unwrap();
        assert_eq!(font.to_string(), "Arial 16 normal roman no_underline");
    }

    #[test]
    fn swapped_style_positions_fail() {
        let mut form = with_label();
        let err = form.apply_font("lbl_login", "Arial", 10, &["roman", "bold", "no_underline"]).unwrap_err();
        assert!(matches!(err, FormError::InvalidStyle { position: 0, .. }));
        let font = form.component("lbl_login").unwrap().unwrap().font().copied();
        assert_eq!(font, Some(FontDescriptor::DEFAULT));
    }

    #[test]
    fn missing_component() {
        let mut form = with_label();
        assert_eq!(
            form.apply_font("missing_name", "Arial", 10, &[]).unwrap_err(),
            FormError::UnknownComponent("missing_name".into())
        );
    }

    #[test]
    fn argument_validation() {
        let mut form = with_label();
        assert!(matches!(form.apply_font("lbl_login", "Comic Sans", 10, &[]), Err(FormError::UnknownFontFamily(_))));
        assert!(matches!(form.apply_font("lbl_login", "Arial", 0, &[]), Err(FormError::ValueOutOfRange { .. })));
        assert!(matches!(
            form.apply_font("lbl_login", "Arial", 10, &["bold", "italic", "underline", "normal"]),
            Err(FormError::InvalidLength { .. })
        ));
        assert_eq!(form.apply_font("", "Arial", 10, &[]).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(form.apply_font(7, "Arial", 10, &[]).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(form.apply_font("lbl_login", " ", 10, &[]).unwrap_err(), FormError::EmptyString("family".into()));
    }

    #[test]
    fn only_buttons_labels_and_entries_take_fonts() {
        let mut form = form();
        form.create_button(ButtonConfig::default()).unwrap();
        form.create_text_entry(TextEntryConfig::default()).unwrap();
        form.create_dropdown(DropdownConfig::default()).unwrap();
        assert!(form.apply_font("button", "Courier", 10, &[]).is_ok());
        assert!(form.apply_font("entry", "Helvetica", 10, &[]).is_ok());
        assert!(matches!(
            form.apply_font("dropdown", "Arial", 10, &[]),
            Err(FormError::UnsupportedWidgetType { widget_type: "Dropdown", .. })
        ));
    }
}
