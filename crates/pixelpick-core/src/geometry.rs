//! Surface-local geometry
//!
//! Coordinates are pixels relative to the top-left corner of the drawing
//! surface. They are floating point because cells sit on half-pixel offsets.

use serde::{Deserialize, Serialize};

/// A point on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive on all four edges, so shared borders belong to both neighbors
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x && point.x <= self.right() && self.y <= point.y && point.y <= self.bottom()
    }

    /// Shrink towards the interior, leaving the 1px border stroke untouched
    pub fn inset(&self) -> Rect {
        Rect {
            x: self.x + 0.5,
            y: self.y + 0.5,
            width: self.width - 1.0,
            height: self.height - 1.0,
        }
    }
}

/// Dimensions of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grow a canvas by one pixel on each axis so the last border strokes
    /// on the right and bottom edges stay visible.
    pub fn padded(width: u32, height: u32) -> Self {
        Self {
            width: width.saturating_add(1),
            height: height.saturating_add(1),
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::padded(400, 400)
    }
}
