//! Grid cell representation
//!
//! A cell is the fundamental unit of the pixel grid: a square with a fixed
//! position and a mutable color.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::geometry::{Point, Rect};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Left edge in surface pixels
    pub x: f64,
    /// Top edge in surface pixels
    pub y: f64,
    pub width: u32,
    pub height: u32,
    /// Current fill color
    pub color: Rgb,
}

impl Cell {
    /// Create a square cell of side `size` at the given position
    pub fn new(x: f64, y: f64, size: u32, color: Rgb) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
            color,
        }
    }

    /// Outline of the cell, as stroked for the grid border
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width as f64, self.height as f64)
    }

    /// Interior of the cell, as filled when painted
    pub fn fill_bounds(&self) -> Rect {
        self.bounds().inset()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
