//! Font descriptors and the positional style contract.
//!
//! A style request is up to three positional flags: weight, slant, underline.
//! Missing trailing flags are filled from [`STYLE_DEFAULTS`]; each position
//! only accepts its own vocabulary, so `("roman", "bold")` is rejected rather
//! than reordered.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormError, Result};
use crate::validate::{enforce_positive, enforce_text, to_i32};

/// Defaults for the three style positions, in order.
pub const STYLE_DEFAULTS: [&str; 3] = ["normal", "roman", "no_underline"];

const WEIGHTS: &[&str] = &["normal", "bold"];
const SLANTS: &[&str] = &["roman", "italic"];
const UNDERLINES: &[&str] = &["no_underline", "underline"];

/// Size used when a caller does not specify one.
pub const DEFAULT_FONT_SIZE: i32 = 10;

// ---------------------------------------------------------------------------
// FontFamily
// ---------------------------------------------------------------------------

/// The closed set of supported font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Arial,
    Courier,
    Helvetica,
    Times,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::Courier,
        FontFamily::Helvetica,
        FontFamily::Times,
        FontFamily::Verdana,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Courier => "Courier",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Times => "Times",
            FontFamily::Verdana => "Verdana",
        }
    }
}

impl FromStr for FontFamily {
    type Err = FormError;

    /// Family names are matched exactly; `"arial"` is not `"Arial"`.
    fn from_str(s: &str) -> Result<Self> {
        FontFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| FormError::UnknownFontFamily(s.to_owned()))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Weight / Slant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

impl Weight {
    pub fn as_str(self) -> &'static str {
        match self {
            Weight::Normal => "normal",
            Weight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slant {
    #[default]
    Roman,
    Italic,
}

impl Slant {
    pub fn as_str(self) -> &'static str {
        match self {
            Slant::Roman => "roman",
            Slant::Italic => "italic",
        }
    }
}

// ---------------------------------------------------------------------------
// FontDescriptor
// ---------------------------------------------------------------------------

/// A fully resolved font: no field is ever left unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    pub family: FontFamily,
    pub size: i32,
    pub weight: Weight,
    pub slant: Slant,
    pub underlined: bool,
}

impl FontDescriptor {
    /// The style every factory-created widget starts with: Arial 9, plain.
    pub const DEFAULT: FontDescriptor = FontDescriptor {
        family: FontFamily::Arial,
        size: 9,
        weight: Weight::Normal,
        slant: Slant::Roman,
        underlined: false,
    };

    /// Validate and resolve a font request.
    ///
    /// Checks run in a fixed order: style arity and blankness, then the
    /// positional vocabularies, then the family whitelist.
    pub fn resolve(family: &str, size: i64, style: &[&str]) -> Result<Self> {
        enforce_text(family, "family")?;
        enforce_positive(size, "size")?;
        let size = to_i32(size, "size")?;
        let [weight, slant, underline] = pad_style(style)?;

        let weight = match position_index(0, weight, WEIGHTS)? {
            0 => Weight::Normal,
            _ => Weight::Bold,
        };
        let slant = match position_index(1, slant, SLANTS)? {
            0 => Slant::Roman,
            _ => Slant::Italic,
        };
        let underlined = position_index(2, underline, UNDERLINES)? == 1;
        let family = family.parse()?;

        Ok(FontDescriptor { family, size, weight, slant, underlined })
    }

    /// The three positional style flags, as they would be passed in.
    pub fn style_flags(&self) -> [&'static str; 3] {
        [
            self.weight.as_str(),
            self.slant.as_str(),
            if self.underlined { UNDERLINES[1] } else { UNDERLINES[0] },
        ]
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `Arial 9 normal roman no_underline`
impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [weight, slant, underline] = self.style_flags();
        write!(f, "{} {} {weight} {slant} {underline}", self.family, self.size)
    }
}

/// Right-pad a style request to exactly three flags.
///
/// Padding only appends defaults for the missing tail; it never inspects
/// what the supplied flags are.
pub fn pad_style<'a>(style: &[&'a str]) -> Result<[&'a str; 3]> {
    if style.len() > STYLE_DEFAULTS.len() {
        return Err(FormError::InvalidLength {
            property: "style".to_owned(),
            expected: "at most 3",
            actual: style.len(),
        });
    }
    for flag in style {
        enforce_text(flag, "style")?;
    }
    let mut padded: [&'a str; 3] = STYLE_DEFAULTS;
    padded[..style.len()].copy_from_slice(style);
    Ok(padded)
}

fn position_index(position: usize, value: &str, allowed: &'static [&'static str]) -> Result<usize> {
    allowed
        .iter()
        .position(|candidate| *candidate == value)
        .ok_or_else(|| FormError::InvalidStyle {
            position,
            value: value.to_owned(),
            allowed,
        })
}
