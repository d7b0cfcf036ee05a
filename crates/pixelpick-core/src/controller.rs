//! Pointer-driven painting
//!
//! [`PaintController`] owns the grid, the palette and the transient
//! [`EditorState`]. Input adapters translate raw events into the
//! `on_pointer_*` and `on_modifier_*` calls; every other mutation of the
//! grid goes through here.
//!
//! A press cycles the clicked cell to the next (or, with the alternate
//! button, previous) palette color and makes that the current color. Moving
//! with the button held stamps the current color without cycling again.

use crate::cell::Cell;
use crate::color::{ColorSpec, Rgb};
use crate::error::Result;
use crate::geometry::{Point, Surface};
use crate::grid::{Grid, DEFAULT_PITCH};
use crate::palette::{Palette, DEFAULT_PALETTE};
use crate::render::{Canvas, DrawCommand, NullCanvas, DEFAULT_BORDER_COLOR};
use crate::sink::ChangeSink;

/// Which pointer button started an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Cycles forward through the palette
    #[default]
    Primary,
    /// Cycles backward through the palette
    Alternate,
}

impl PointerButton {
    pub fn is_reverse(self) -> bool {
        self == PointerButton::Alternate
    }
}

/// Transient interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    /// Color stamped while dragging
    pub current_color: Rgb,
    /// Erase modifier held
    pub erasing: bool,
    /// Pointer button held
    pub dragging: bool,
}

impl EditorState {
    pub fn new(current_color: Rgb) -> Self {
        Self {
            current_color,
            erasing: false,
            dragging: false,
        }
    }
}

/// A committed cell mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub index: usize,
    pub color: Rgb,
}

/// Settings the editor is built from
#[derive(Debug)]
pub struct EditorOptions {
    /// Cell pitch in pixels
    pub size: u32,
    /// Colors to cycle through, in order
    pub palette: Vec<ColorSpec>,
    /// Color applied while erasing; defaults to the first palette entry
    pub eraser_color: Option<ColorSpec>,
    /// Grid outline color
    pub border_color: ColorSpec,
    /// Drawing surface the grid covers
    pub surface: Surface,
    /// Receiver of map updates
    pub update: Option<ChangeSink>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_PITCH,
            palette: DEFAULT_PALETTE.iter().map(|c| ColorSpec::from(*c)).collect(),
            eraser_color: None,
            border_color: ColorSpec::Rgb(DEFAULT_BORDER_COLOR),
            surface: Surface::default(),
            update: None,
        }
    }
}

/// Grid editor driven by pointer and modifier input
pub struct PaintController<C: Canvas = NullCanvas> {
    grid: Grid,
    palette: Palette,
    state: EditorState,
    sink: Option<ChangeSink>,
    canvas: C,
}

impl PaintController<NullCanvas> {
    /// Create an editor that does not draw
    pub fn new(options: EditorOptions) -> Result<Self> {
        Self::with_canvas(options, NullCanvas)
    }
}

impl<C: Canvas> PaintController<C> {
    /// Create an editor and stroke the grid outline onto `canvas`.
    ///
    /// Colors are parsed before the grid is laid out, so a malformed palette
    /// fails without building anything.
    pub fn with_canvas(options: EditorOptions, mut canvas: C) -> Result<Self> {
        let palette = Palette::new(&options.palette, options.eraser_color.as_ref())?;
        let border = options.border_color.parse()?;
        let grid = Grid::new(options.surface, options.size, palette.initial())?;

        for cell in grid.cells() {
            canvas.draw(DrawCommand::border(cell, border));
        }

        tracing::info!(
            cells = grid.len(),
            colors = palette.len(),
            "Editor initialized"
        );

        Ok(Self {
            state: EditorState::new(palette.initial()),
            grid,
            palette,
            sink: options.update,
            canvas,
        })
    }

    /// Press at `(x, y)`: cycle the cell under the pointer and start a drag
    pub fn on_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        button: PointerButton,
    ) -> Result<Option<CellChange>> {
        self.state.dragging = true;

        let Some(index) = self.grid.find_index(Point::new(x, y)) else {
            tracing::trace!(x, y, "Press outside grid");
            return Ok(None);
        };
        let Some(cell) = self.grid.cell(index) else {
            return Ok(None);
        };

        let next = self
            .palette
            .step(cell.color, button.is_reverse(), self.state.erasing);
        self.state.current_color = next;

        self.paint(index, next).map(Some)
    }

    /// Move to `(x, y)`: while dragging, stamp the current color
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<Option<CellChange>> {
        if !self.state.dragging {
            return Ok(None);
        }

        match self.grid.find_index(Point::new(x, y)) {
            Some(index) => self.paint(index, self.state.current_color).map(Some),
            None => Ok(None),
        }
    }

    /// Release: end the drag
    pub fn on_pointer_up(&mut self) {
        self.state.dragging = false;
    }

    /// Erase modifier pressed
    pub fn on_modifier_down(&mut self) {
        self.set_erasing(true);
    }

    /// Erase modifier released
    pub fn on_modifier_up(&mut self) {
        self.set_erasing(false);
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        if self.state.erasing != erasing {
            tracing::debug!(erasing, "Eraser toggled");
        }
        self.state.erasing = erasing;
    }

    fn paint(&mut self, index: usize, color: Rgb) -> Result<CellChange> {
        self.grid.set_color(index, color)?;

        if let Some(sink) = self.sink.as_mut() {
            sink.notify(self.grid.cells())?;
        }
        if let Some(cell) = self.grid.cell(index) {
            self.canvas.draw(DrawCommand::fill(cell));
        }

        tracing::debug!(index, %color, "Cell painted");
        Ok(CellChange { index, color })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn current_color(&self) -> Rgb {
        self.state.current_color
    }

    pub fn is_erasing(&self) -> bool {
        self.state.erasing
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Give back the drawing collaborator
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}
