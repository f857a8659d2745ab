//! Widget handles: the common attributes plus the variant payload.

use slotmap::new_key_type;

use crate::geometry::Offset;
use crate::style::FontDescriptor;
use crate::widgets::{Button, DatePicker, Dropdown, Frame, Label, Spinner, TextEntry};

new_key_type! {
    /// Unique identifier for a widget within one form. Copy, lightweight (u64).
    pub struct WidgetId;
}

/// The variant-specific part of a widget.
#[derive(Debug)]
pub enum WidgetKind {
    Frame(Frame),
    Label(Label),
    Button(Button),
    TextEntry(TextEntry),
    Dropdown(Dropdown),
    Spinner(Spinner),
    DatePicker(DatePicker),
}

impl WidgetKind {
    /// Variant name, e.g. `"Button"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            WidgetKind::Frame(_) => "Frame",
            WidgetKind::Label(_) => "Label",
            WidgetKind::Button(_) => "Button",
            WidgetKind::TextEntry(_) => "TextEntry",
            WidgetKind::Dropdown(_) => "Dropdown",
            WidgetKind::Spinner(_) => "Spinner",
            WidgetKind::DatePicker(_) => "DatePicker",
        }
    }

    /// Whether callers may restyle this variant with a font.
    pub fn supports_font(&self) -> bool {
        matches!(
            self,
            WidgetKind::Label(_) | WidgetKind::Button(_) | WidgetKind::TextEntry(_)
        )
    }

    /// Whether the variant takes part in the tab order.
    pub fn is_focusable(&self) -> bool {
        !matches!(self, WidgetKind::Frame(_) | WidgetKind::Label(_))
    }

    /// Whether the variant holds user input that a form may collect or clear.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            WidgetKind::TextEntry(_)
                | WidgetKind::Dropdown(_)
                | WidgetKind::Spinner(_)
                | WidgetKind::DatePicker(_)
        )
    }
}

/// A single component of a form.
#[derive(Debug)]
pub struct Widget {
    /// Registry name.
    pub(crate) name: String,
    /// Position relative to the parent container.
    pub(crate) position: Offset,
    /// Resolved font; `None` for frames.
    pub(crate) font: Option<FontDescriptor>,
    pub(crate) kind: WidgetKind,
}

macro_rules! variant_accessors {
    ($($variant:ident => $ty:ty, $get:ident, $get_mut:ident;)*) => {
        $(
            pub fn $get(&self) -> Option<&$ty> {
                match &self.kind {
                    WidgetKind::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            pub fn $get_mut(&mut self) -> Option<&mut $ty> {
                match &mut self.kind {
                    WidgetKind::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        )*
    };
}

impl Widget {
    pub fn new(name: impl Into<String>, position: Offset, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            position,
            font: None,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn font(&self) -> Option<&FontDescriptor> {
        self.font.as_ref()
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn widget_type(&self) -> &'static str {
        self.kind.type_name()
    }

    variant_accessors! {
        Frame => Frame, as_frame, as_frame_mut;
        Label => Label, as_label, as_label_mut;
        Button => Button, as_button, as_button_mut;
        TextEntry => TextEntry, as_entry, as_entry_mut;
        Dropdown => Dropdown, as_dropdown, as_dropdown_mut;
        Spinner => Spinner, as_spinner, as_spinner_mut;
        DatePicker => DatePicker, as_date_picker, as_date_picker_mut;
    }
}
