//! Font descriptors, style flags, and the family whitelist.

pub mod font;

pub use font::{pad_style, FontDescriptor, FontFamily, Slant, Weight, DEFAULT_FONT_SIZE, STYLE_DEFAULTS};
