//! Drawing requests
//!
//! The editor does not rasterize anything itself. It emits stroke and fill
//! requests to a [`Canvas`]: one border stroke per cell when the grid is
//! built, and one fill per committed paint.

use serde::Serialize;

use crate::cell::Cell;
use crate::color::Rgb;
use crate::geometry::Rect;

/// Border stroke color used for the grid outline
pub const DEFAULT_BORDER_COLOR: Rgb = Rgb::new(0x87, 0x87, 0x87);

/// A single drawing request. Styles are CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Outline a rectangle
    StrokeRect { rect: Rect, style: String },
    /// Fill a rectangle
    FillRect { rect: Rect, style: String },
}

impl DrawCommand {
    /// Border for a freshly laid out cell
    pub fn border(cell: &Cell, color: Rgb) -> Self {
        DrawCommand::StrokeRect {
            rect: cell.bounds(),
            style: color.to_string(),
        }
    }

    /// Interior fill for a painted cell
    pub fn fill(cell: &Cell) -> Self {
        DrawCommand::FillRect {
            rect: cell.fill_bounds(),
            style: cell.color.to_string(),
        }
    }
}

/// Drawing collaborator
pub trait Canvas {
    fn draw(&mut self, command: DrawCommand);
}

/// Discards every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw(&mut self, _command: DrawCommand) {}
}

/// Records requests in order
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of fill requests recorded so far
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw(&mut self, command: DrawCommand) {
        (**self).draw(command);
    }
}
