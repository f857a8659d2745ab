//! Window title and size.
//!
//! `width` and `height` are the only stored dimensions; `size` is always
//! derived from them. Every setter re-applies the geometry to the surface and
//! resizes the content container before returning.

use tracing::debug;

use super::Form;
use crate::error::{FormError, Result};
use crate::geometry::{Offset, Size};
use crate::surface::Placement;
use crate::validate::{
    enforce_int_tuple, enforce_positive, enforce_positive_int, enforce_string, enforce_text, to_i32, Value,
};

impl Form {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Set the window title. Blank titles are rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        enforce_text(&title, "title")?;
        debug!(from = %self.title, to = %title, "title changed");
        self.title = title;
        self.surface.set_title(&self.title);
        Ok(())
    }

    /// Set both dimensions at once.
    pub fn set_size(&mut self, size: impl Into<Size>) -> Result<()> {
        let size = size.into();
        enforce_positive(i64::from(size.width), "width")?;
        enforce_positive(i64::from(size.height), "height")?;
        self.resize(size);
        Ok(())
    }

    pub fn set_width(&mut self, width: i32) -> Result<()> {
        enforce_positive(i64::from(width), "width")?;
        self.resize(Size::new(width, self.size.height));
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> Result<()> {
        enforce_positive(i64::from(height), "height")?;
        self.resize(Size::new(self.size.width, height));
        Ok(())
    }

    /// Set a geometry property from a dynamic value.
    ///
    /// Recognises `title`, `size`, `width` and `height`. A `size` must be a
    /// tuple of exactly two ints.
    pub fn set_property(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match name {
            "title" => {
                let title = enforce_string(&value, "title")?.to_owned();
                self.set_title(title)
            }
            "size" => {
                let dims = enforce_int_tuple(&value, "size")?;
                let [w, h] = dims[..] else {
                    return Err(FormError::InvalidLength {
                        property: "size".to_owned(),
                        expected: "2",
                        actual: dims.len(),
                    });
                };
                enforce_positive(w, "width")?;
                enforce_positive(h, "height")?;
                self.set_size((to_i32(w, "width")?, to_i32(h, "height")?))
            }
            "width" => {
                let w = enforce_positive_int(&value, "width")?;
                self.set_width(to_i32(w, "width")?)
            }
            "height" => {
                let h = enforce_positive_int(&value, "height")?;
                self.set_height(to_i32(h, "height")?)
            }
            other => Err(FormError::invalid_format("property", format!("unknown property '{other}'"))),
        }
    }

    fn resize(&mut self, size: Size) {
        debug!(from = %self.size, to = %size, "geometry changed");
        self.size = size;
        self.apply_geometry();
    }

    /// Push the current geometry to the surface and stretch the content
    /// container over the whole window.
    pub(super) fn apply_geometry(&mut self) {
        let content = self.widgets.root();
        if let Some(frame) = self.widgets.get_mut(content).and_then(|w| w.as_frame_mut()) {
            frame.resize(self.size);
        }
        self.surface.set_geometry(self.size);
        self.surface.place(
            content,
            Placement {
                parent: None,
                at: Offset::default(),
                size: Some(self.size),
            },
        );
    }
}
