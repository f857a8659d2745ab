//! Widget factory: one `create_*` method per widget variant.
//!
//! Each method validates every parameter and resolves the parent container
//! before anything is inserted, so a failed creation never leaves a
//! half-registered widget behind. Successful creations are placed on the
//! surface and given the default font (Arial 9, plain), frames excepted.

use tracing::debug;

use super::Form;
use crate::error::{FormError, Result};
use crate::geometry::{Offset, Size};
use crate::style::FontDescriptor;
use crate::surface::Placement;
use crate::validate::{enforce_non_negative, enforce_positive, enforce_string_list, enforce_text, Value};
use crate::widget::{Widget, WidgetId, WidgetKind};
use crate::widgets::{
    Button, ButtonConfig, DatePicker, DatePickerConfig, Dropdown, DropdownConfig, Frame, FrameConfig, Label,
    LabelConfig, Spinner, SpinnerConfig, TextEntry, TextEntryConfig, MIN_ENTRY_WIDTH,
};

/// Checks shared by every variant: a usable name and a non-negative anchor.
fn check_anchor(name: &str, x: i32, y: i32) -> Result<()> {
    enforce_text(name, "name")?;
    enforce_non_negative(i64::from(x), "x")?;
    enforce_non_negative(i64::from(y), "y")
}

impl Form {
    /// Create a nested container other widgets can be parented to.
    pub fn create_frame(&mut self, config: FrameConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        enforce_non_negative(i64::from(config.width), "width")?;
        enforce_non_negative(i64::from(config.height), "height")?;
        let parent = self.resolve_parent(config.parent)?;

        let size = Size::new(config.width, config.height);
        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::Frame(Frame::new(size)));
        self.mount(parent, widget, Some(size))
    }

    pub fn create_label(&mut self, config: LabelConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        enforce_text(&config.text, "text")?;
        let parent = self.resolve_parent(config.parent)?;

        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::Label(Label::new(config.text)));
        self.mount(parent, widget, None)
    }

    pub fn create_button(&mut self, config: ButtonConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        enforce_text(&config.text, "text")?;
        let parent = self.resolve_parent(config.parent)?;

        let button = Button::new(config.text, config.on_activate);
        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::Button(button));
        self.mount(parent, widget, None)
    }

    /// Create a single-line entry at least [`MIN_ENTRY_WIDTH`] columns wide.
    /// Narrower entries are rejected, not widened.
    pub fn create_text_entry(&mut self, config: TextEntryConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        if config.width < MIN_ENTRY_WIDTH {
            return Err(FormError::out_of_range(
                "width",
                format!("must be >= {MIN_ENTRY_WIDTH}, got {}", config.width),
            ));
        }
        let parent = self.resolve_parent(config.parent)?;

        let entry = TextEntry::new(config.width, config.masked);
        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::TextEntry(entry));
        self.mount(parent, widget, None)
    }

    /// Create a dropdown with nothing selected.
    pub fn create_dropdown(&mut self, config: DropdownConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        enforce_non_negative(i64::from(config.width), "width")?;
        let values = enforce_string_list(&Value::from(config.values), "values")?;
        let parent = self.resolve_parent(config.parent)?;

        let dropdown = Dropdown::new(values, config.width);
        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::Dropdown(dropdown));
        self.mount(parent, widget, None)
    }

    /// Create a spinner over `[from, to]`.
    pub fn create_spinner(&mut self, config: SpinnerConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        enforce_non_negative(i64::from(config.width), "width")?;
        if config.from > config.to {
            return Err(FormError::out_of_range(
                "from",
                format!("must be <= to ({}), got {}", config.to, config.from),
            ));
        }
        enforce_positive(i64::from(config.increment), "increment")?;
        let parent = self.resolve_parent(config.parent)?;

        let spinner = Spinner::new(config.from, config.to, config.increment, config.width);
        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::Spinner(spinner));
        self.mount(parent, widget, None)
    }

    /// Create a date picker showing today's date.
    pub fn create_date_picker(&mut self, config: DatePickerConfig) -> Result<WidgetId> {
        check_anchor(&config.name, config.x, config.y)?;
        enforce_non_negative(i64::from(config.width), "width")?;
        let parent = self.resolve_parent(config.parent)?;

        let picker = DatePicker::new(config.width, self.today());
        let widget = Widget::new(config.name, Offset::new(config.x, config.y), WidgetKind::DatePicker(picker));
        self.mount(parent, widget, None)
    }

    /// Default to the content container; anything else must be a frame of
    /// this form.
    fn resolve_parent(&self, parent: Option<WidgetId>) -> Result<WidgetId> {
        let Some(id) = parent else {
            return Ok(self.widgets.root());
        };
        let widget = self
            .widgets
            .get(id)
            .ok_or_else(|| FormError::UnknownComponent(format!("{id:?}")))?;
        match widget.kind() {
            WidgetKind::Frame(_) => Ok(id),
            _ => Err(FormError::UnsupportedWidgetType {
                name: widget.name().to_owned(),
                widget_type: widget.widget_type(),
                operation: "children",
            }),
        }
    }

    /// Insert, register, place and style an already validated widget.
    fn mount(&mut self, parent: WidgetId, mut widget: Widget, size: Option<Size>) -> Result<WidgetId> {
        let name = widget.name().to_owned();
        let at = widget.position();
        let styled = !matches!(widget.kind(), WidgetKind::Frame(_));
        if styled {
            widget.font = Some(FontDescriptor::DEFAULT);
        }
        let widget_type = widget.widget_type();

        let id = self
            .widgets
            .insert_child(parent, widget)
            .ok_or_else(|| FormError::UnknownComponent(name.clone()))?;
        self.registry.register(name.as_str(), id);
        self.surface.place(id, Placement { parent: Some(parent), at, size });
        if styled {
            self.surface.configure_font(id, &FontDescriptor::DEFAULT);
        }
        self.rebuild_focus();

        debug!(name = %name, widget_type, x = at.x, y = at.y, "component created");
        Ok(id)
    }
}
