//! In-memory surface for tests and headless use.
//!
//! Records everything the form pushes to it and runs the placement layout,
//! so tests can assert on exactly what a real window would show.

use std::any::Any;
use std::collections::HashMap;

use super::layout::PlacementLayout;
use super::{Placement, Surface};
use crate::geometry::{Region, Size};
use crate::style::FontDescriptor;
use crate::widget::WidgetId;

/// A surface with no display attached.
#[derive(Default)]
pub struct HeadlessSurface {
    title: String,
    geometry: Size,
    placements: HashMap<WidgetId, Placement>,
    fonts: HashMap<WidgetId, FontDescriptor>,
    layout: PlacementLayout,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The title last set on the window.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The geometry last set on the window.
    pub fn geometry(&self) -> Size {
        self.geometry
    }

    /// Window-manager geometry string, e.g. `300x400`.
    pub fn geometry_string(&self) -> String {
        self.geometry.to_string()
    }

    pub fn placement(&self, id: WidgetId) -> Option<&Placement> {
        self.placements.get(&id)
    }

    /// Window-relative region of a widget, as laid out.
    pub fn region(&self, id: WidgetId) -> Option<Region> {
        self.layout.region(id)
    }

    /// The font last configured on a widget.
    pub fn font(&self, id: WidgetId) -> Option<&FontDescriptor> {
        self.fonts.get(&id)
    }

    /// Number of widgets currently placed, content container included.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }
}

impl Surface for HeadlessSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_geometry(&mut self, size: Size) {
        self.geometry = size;
    }

    fn place(&mut self, id: WidgetId, placement: Placement) {
        self.placements.insert(id, placement);
        self.layout.place(id, placement);
    }

    fn configure_font(&mut self, id: WidgetId, font: &FontDescriptor) {
        self.fonts.insert(id, *font);
    }

    fn destroy(&mut self, id: WidgetId) {
        self.placements.remove(&id);
        self.fonts.remove(&id);
        self.layout.remove(id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
