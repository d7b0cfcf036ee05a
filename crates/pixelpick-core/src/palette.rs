//! Color palette and cycling
//!
//! The cycling sequence is the ordered list of colors a cell steps through on
//! each click. When an explicit eraser color is configured it is prepended as
//! index 0, so cycling past the last color lands on the eraser before wrapping
//! around to the first configured color.

use crate::color::{ColorSpec, Rgb};
use crate::error::{CoreError, Result};

/// Default palette: white, black, red, blue, yellow, green
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#ffffff", "#000000", "#ff0000", "#0000ff", "#ffff00", "#008000",
];

/// Ordered, eraser-augmented color sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    eraser: Rgb,
    initial: Rgb,
}

impl Palette {
    /// Build a palette from configuration specs.
    ///
    /// Without an eraser the first entry doubles as the eraser and the
    /// sequence is exactly `specs`. With one, it is parsed and prepended.
    pub fn new(specs: &[ColorSpec], eraser: Option<&ColorSpec>) -> Result<Self> {
        let mut colors = specs
            .iter()
            .map(ColorSpec::parse)
            .collect::<Result<Vec<_>>>()?;

        let first = colors.first().copied();
        let eraser = match eraser {
            Some(spec) => {
                let color = spec.parse()?;
                colors.insert(0, color);
                color
            }
            None => first.ok_or(CoreError::EmptyPalette)?,
        };

        Ok(Self {
            colors,
            eraser,
            initial: first.unwrap_or(eraser),
        })
    }

    /// Build a palette directly from triples
    pub fn from_colors(colors: Vec<Rgb>, eraser: Option<Rgb>) -> Result<Self> {
        let specs: Vec<ColorSpec> = colors.into_iter().map(ColorSpec::from).collect();
        Self::new(&specs, eraser.map(ColorSpec::from).as_ref())
    }

    /// The cycling sequence, eraser included when configured
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn eraser(&self) -> Rgb {
        self.eraser
    }

    /// The first configured color, which new cells start with
    pub fn initial(&self) -> Rgb {
        self.initial
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Position of `color` in the sequence. Duplicates resolve to the last match.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().rposition(|c| *c == color)
    }

    /// The color that follows `current` in the sequence.
    ///
    /// While erasing, the eraser wins regardless of direction. A color that
    /// is not in the palette wraps to the start going forward and to the end
    /// going backward.
    pub fn step(&self, current: Rgb, reverse: bool, erasing: bool) -> Rgb {
        if erasing {
            return self.eraser;
        }

        let len = self.colors.len();
        let next = match (self.index_of(current), reverse) {
            (Some(0), true) | (None, true) => len - 1,
            (Some(index), true) => index - 1,
            (Some(index), false) if index + 1 < len => index + 1,
            (_, false) => 0,
        };
        self.colors[next]
    }

    pub fn next(&self, current: Rgb) -> Rgb {
        self.step(current, false, false)
    }

    pub fn previous(&self, current: Rgb) -> Rgb {
        self.step(current, true, false)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_PALETTE
            .iter()
            .filter_map(|hex| Rgb::parse(hex).ok())
            .collect::<Vec<_>>();
        let first = colors[0];
        Self {
            colors,
            eraser: first,
            initial: first,
        }
    }
}
