//! Color parsing and formatting
//!
//! Colors enter the editor as user-facing specifications (`"#ff0000"`,
//! `"rgb(255, 0, 0)"`, or an already-normalized `[255, 0, 0]` triple) and are
//! normalized once into an [`Rgb`] triple. Everything downstream compares
//! triples, so `#ffffff` and `rgb(255, 255, 255)` are the same color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from its text form.
    ///
    /// A leading `#` selects hex (`#RRGGBB`, exactly six digits, no alpha,
    /// no shorthand). Anything else is read as a functional form: every
    /// character except digits and commas is dropped and the first three
    /// comma-separated numbers become the channels.
    pub fn parse(input: &str) -> Result<Self> {
        match input.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex).ok_or_else(|| invalid(input)),
            None => Self::parse_functional(input).ok_or_else(|| invalid(input)),
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        Some(Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        })
    }

    fn parse_functional(input: &str) -> Option<Self> {
        let digits: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',')
            .collect();

        let mut channels = digits.split(',').map(|part| part.parse::<u8>().ok());
        let r = channels.next()??;
        let g = channels.next()??;
        let b = channels.next()??;
        Some(Self { r, g, b })
    }

    /// Channels as an array, the shape used in serialized cell maps
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn invalid(input: &str) -> CoreError {
    CoreError::InvalidColorFormat(input.to_string())
}

/// Renders as the CSS functional form, e.g. `rgb(255, 0, 0)`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

/// A color as written in configuration: either text or a parsed triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Already-normalized `[r, g, b]` triple
    Rgb(Rgb),
    /// Hex or functional text form
    Text(String),
}

impl ColorSpec {
    /// Normalize into a triple. Triples are returned unchanged.
    pub fn parse(&self) -> Result<Rgb> {
        match self {
            ColorSpec::Rgb(color) => Ok(*color),
            ColorSpec::Text(text) => Rgb::parse(text),
        }
    }
}

impl From<Rgb> for ColorSpec {
    fn from(color: Rgb) -> Self {
        ColorSpec::Rgb(color)
    }
}

impl From<&str> for ColorSpec {
    fn from(text: &str) -> Self {
        ColorSpec::Text(text.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(text: String) -> Self {
        ColorSpec::Text(text)
    }
}
