//! The form: a window, its content container, and its registered components.
//!
//! [`Form`] is the base every screen is built from. It owns the window
//! geometry, the widget arena, the component registry, the tab order and the
//! activation event queue, and it pushes every change to its [`Surface`]
//! before returning. Every public mutator validates all of its input first
//! and only then touches state, so a failed call leaves the form unchanged.

mod factory;
mod focus;
mod font;
mod geometry;

pub mod event;

use chrono::NaiveDate;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::error::Result;
use crate::geometry::Offset;
use crate::registry::Registry;
use crate::surface::{HeadlessSurface, Surface};
use crate::validate::{enforce_positive, enforce_text, Value};
use crate::widget::{Widget, WidgetId, WidgetKind, WidgetTree};
use crate::widgets::Frame;

pub use event::{EventQueue, FormEvent};
pub use focus::FocusChain;

/// Name of the full-bleed content container. It is not registered.
pub const CONTENT_NAME: &str = "content";

/// A window and the components placed in it.
pub struct Form {
    title: String,
    size: crate::geometry::Size,
    widgets: WidgetTree,
    registry: Registry,
    focus: FocusChain,
    events: EventQueue,
    surface: Box<dyn Surface>,
    clock: Box<dyn Clock>,
}

impl Form {
    /// Create a form and show its (empty) window on `surface`.
    pub fn new(
        config: FormConfig,
        surface: impl Surface + 'static,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        enforce_text(&config.title, "title")?;
        enforce_positive(config.size.width as i64, "width")?;
        enforce_positive(config.size.height as i64, "height")?;

        let content = Widget::new(CONTENT_NAME, Offset::default(), WidgetKind::Frame(Frame::new(config.size)));
        let mut form = Self {
            title: config.title,
            size: config.size,
            widgets: WidgetTree::new(content),
            registry: Registry::new(),
            focus: FocusChain::new(),
            events: EventQueue::new(),
            surface: Box::new(surface),
            clock: Box::new(clock),
        };
        form.surface.set_title(&form.title);
        form.apply_geometry();
        debug!(title = %form.title, size = %form.size, "form created");
        Ok(form)
    }

    /// A form on a [`HeadlessSurface`] using the system clock.
    pub fn headless(config: FormConfig) -> Result<Self> {
        Self::new(config, HeadlessSurface::new(), SystemClock)
    }

    /// The full-bleed content container every widget is placed in by default.
    pub fn content(&self) -> WidgetId {
        self.widgets.root()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// The widget arena, rooted at the content container.
    pub fn widgets(&self) -> &WidgetTree {
        &self.widgets
    }

    /// First component registered under `name`.
    ///
    /// Returns `Ok(None)` for unregistered names and fails if `name` is not a
    /// non-blank string.
    pub fn component(&self, name: impl Into<Value>) -> Result<Option<&Widget>> {
        let id = self.registry.lookup(&name.into())?;
        Ok(id.and_then(|id| self.widgets.get(id)))
    }

    /// Mutable variant of [`component`](Self::component).
    pub fn component_mut(&mut self, name: impl Into<Value>) -> Result<Option<&mut Widget>> {
        let id = self.registry.lookup(&name.into())?;
        Ok(id.and_then(|id| self.widgets.get_mut(id)))
    }

    /// Handle of the first component registered under `name`.
    pub fn component_id(&self, name: impl Into<Value>) -> Result<Option<WidgetId>> {
        self.registry.lookup(&name.into())
    }

    /// Registered components in registration order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &Widget)> + '_ {
        self.registry
            .iter()
            .filter_map(|(name, id)| self.widgets.get(id).map(|w| (name, w)))
    }

    /// Handles of registered components in registration order.
    pub fn component_ids(&self) -> Vec<WidgetId> {
        self.registry.iter().map(|(_, id)| id).collect()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    /// Downcast the surface, e.g. to inspect a [`HeadlessSurface`].
    pub fn surface_as<T: 'static>(&self) -> Option<&T> {
        self.surface.as_any().downcast_ref::<T>()
    }

    /// Today's date according to the form's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Tear down every component, keeping only the empty content container.
    pub fn dispose(&mut self) {
        for id in self.widgets.clear() {
            self.surface.destroy(id);
        }
        self.registry.clear();
        self.focus.clear();
        debug!(title = %self.title, "form disposed");
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("title", &self.title)
            .field("size", &self.size)
            .field("components", &self.registry.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::{ErrorKind, FormError};
    use crate::geometry::Size;
    use crate::widgets::{ButtonConfig, LabelConfig};

    pub(crate) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    pub(crate) fn form() -> Form {
        Form::new(FormConfig::default(), HeadlessSurface::new(), FixedClock::on(today())).unwrap()
    }

    pub(crate) fn headless(form: &Form) -> &HeadlessSurface {
        form.surface_as::<HeadlessSurface>().unwrap()
    }

    #[test]
    fn new_form_defaults() {
        let form = form();
        assert_eq!(form.title(), "new_view");
        assert_eq!(form.size(), Size::new(300, 400));
        assert_eq!(form.width(), 300);
        assert_eq!(form.height(), 400);
        assert!(form.registry().is_empty());
        assert_eq!(headless(&form).title(), "new_view");
        assert_eq!(headless(&form).geometry_string(), "300x400");
    }

    #[test]
    fn new_form_custom_config() {
        let config = FormConfig::new().with_title("Test View").with_size(800, 600);
        let form = Form::new(config, HeadlessSurface::new(), FixedClock::on(today())).unwrap();
        assert_eq!(form.title(), "Test View");
        assert_eq!(form.size().as_tuple(), (800, 600));
    }

    #[test]
    fn new_form_rejects_bad_config() {
        let blank = FormConfig::new().with_title(" ");
        assert_eq!(
            Form::new(blank, HeadlessSurface::new(), FixedClock::on(today())).unwrap_err(),
            FormError::EmptyString("title".into())
        );
        let empty = FormConfig::new().with_size(0, 400);
        assert!(Form::new(empty, HeadlessSurface::new(), FixedClock::on(today())).is_err());
    }

    #[test]
    fn content_container_is_full_bleed() {
        let form = form();
        let region = headless(&form).region(form.content()).unwrap();
        assert_eq!(region.size(), form.size());
        assert_eq!(form.widget(form.content()).unwrap().name(), CONTENT_NAME);
        assert!(form.component(CONTENT_NAME).unwrap().is_none());
    }

    #[test]
    fn component_lookup() {
        let mut form = form();
        let first = form.create_label(LabelConfig::new("dup", 0, 0, "first")).unwrap();
        form.create_label(LabelConfig::new("dup", 0, 20, "second")).unwrap();

        assert_eq!(form.component_id("dup").unwrap(), Some(first));
        assert_eq!(form.component("dup").unwrap().unwrap().as_label().unwrap().text(), "first");
        assert!(form.component("missing").unwrap().is_none());
        assert_eq!(form.component(" ").unwrap_err(), FormError::EmptyString("name".into()));
        assert_eq!(form.component(42).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(form.component(Value::Null).unwrap_err(), FormError::NullValue("name".into()));
    }

    #[test]
    fn components_iterate_in_order() {
        let mut form = form();
        form.create_label(LabelConfig::new("a", 0, 0, "A")).unwrap();
        form.create_button(ButtonConfig::new("b", 0, 0, "B")).unwrap();
        let names: Vec<&str> = form.components().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn dispose_tears_everything_down() {
        let mut form = form();
        form.create_label(LabelConfig::new("a", 0, 0, "A")).unwrap();
        form.create_button(ButtonConfig::new("b", 0, 0, "B")).unwrap();
        form.dispose();
        assert!(form.registry().is_empty());
        assert!(form.component("a").unwrap().is_none());
        assert_eq!(headless(&form).placed_count(), 1);
        assert!(form.focused().is_none());
    }

    #[test]
    fn debug_is_compact() {
        let form = form();
        let dbg = format!("{form:?}");
        assert!(dbg.contains("new_view"));
        assert!(dbg.contains("components: 0"));
    }
}
