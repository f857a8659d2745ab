//! Text entry widget: a single-line editable field.
//!
//! Supports cursor editing and masked (password) display. The cursor is a
//! byte offset into the text and always sits on a char boundary.

use crate::widget::WidgetId;

/// Narrowest entry the factory accepts, in character columns.
pub const MIN_ENTRY_WIDTH: i32 = 11;

/// Echo character shown in place of each character of a masked entry.
pub const MASK_CHAR: char = '*';

/// Creation options for a [`TextEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntryConfig {
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Width in character columns, at least [`MIN_ENTRY_WIDTH`].
    pub width: i32,
    /// Suppress the echo of typed characters.
    pub masked: bool,
    pub parent: Option<WidgetId>,
}

impl TextEntryConfig {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            masked: false,
            parent: None,
        }
    }

    /// Mask the entry's contents (builder).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn in_frame(mut self, parent: WidgetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for TextEntryConfig {
    fn default() -> Self {
        Self::new("entry", 0, 0, 20)
    }
}

/// An editable single-line text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    width: i32,
    masked: bool,
    text: String,
    cursor: usize,
}

impl TextEntry {
    pub(crate) fn new(width: i32, masked: bool) -> Self {
        Self {
            width,
            masked,
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// The entered text, unmasked.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Insert `s` at the cursor.
    pub fn insert(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// What the field shows: the text, or one [`MASK_CHAR`] per character.
    pub fn display_text(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR).take(self.text.chars().count()).collect()
        } else {
            self.text.clone()
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}
