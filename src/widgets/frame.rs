//! Frame widget: a container other widgets are placed into.
//!
//! Every form owns one full-bleed frame (the content container). Additional
//! frames can be nested inside it to group widgets.

use crate::geometry::Size;
use crate::widget::WidgetId;

/// Creation options for a nested [`Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub parent: Option<WidgetId>,
}

impl FrameConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            parent: None,
        }
    }

    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new("frame", 0, 0, 0, 0)
    }
}

/// A container with an explicit size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    size: Size,
}

impl Frame {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the frame. Only the form resizes its own content container.
    pub(crate) fn resize(&mut self, size: Size) {
        self.size = size;
    }
}
