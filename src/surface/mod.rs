//! The windowing surface a form draws onto.
//!
//! A [`Surface`] is whatever actually shows the window: it receives the title,
//! the window geometry, absolute widget placements and resolved fonts. The
//! form calls it synchronously after every successful mutation, so a surface
//! is never behind the form's own state.

pub mod headless;
pub mod layout;

use std::any::Any;

use crate::geometry::{Offset, Size};
use crate::style::FontDescriptor;
use crate::widget::WidgetId;

pub use headless::HeadlessSurface;
pub use layout::PlacementLayout;

/// Where a widget sits inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Containing widget; `None` only for the content container itself.
    pub parent: Option<WidgetId>,
    /// Top-left corner relative to `parent`.
    pub at: Offset,
    /// Explicit size; `None` lets the surface choose.
    pub size: Option<Size>,
}

/// Backend operations the form framework needs from a window.
pub trait Surface {
    /// Set the window title.
    fn set_title(&mut self, title: &str);

    /// Set the window geometry (`width x height`).
    fn set_geometry(&mut self, size: Size);

    /// Place (or re-place) a widget at an absolute position in its parent.
    fn place(&mut self, id: WidgetId, placement: Placement);

    /// Apply a resolved font to a placed widget.
    fn configure_font(&mut self, id: WidgetId, font: &FontDescriptor);

    /// Destroy a widget's on-screen counterpart.
    fn destroy(&mut self, id: WidgetId);

    /// Upcast to `&dyn Any` for downcasting to a concrete surface.
    fn as_any(&self) -> &dyn Any;
}
