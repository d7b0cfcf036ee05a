//! Pixel grid - the fixed layout of cells over the drawing surface
//!
//! Cells are laid out column by column on a uniform pitch. The layout is
//! inclusive on both axes (`width / pitch + 1` columns), so the last column
//! and row straddle the surface edge. Each cell sits half a pixel in from its
//! nominal position, which keeps 1px border strokes crisp.
//!
//! Only cell colors change after construction.

use crate::cell::Cell;
use crate::color::Rgb;
use crate::error::{CoreError, Result};
use crate::geometry::{Point, Surface};

/// Half-pixel offset applied to every cell position
pub const CELL_OFFSET: f64 = 0.5;

/// Default cell pitch in pixels
pub const DEFAULT_PITCH: u32 = 20;

/// The pixel grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Cells in column-major order
    cells: Vec<Cell>,
    /// Side length of every cell
    pitch: u32,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
    surface: Surface,
}

impl Grid {
    /// Lay out cells over `surface`, all starting with `color`
    pub fn new(surface: Surface, pitch: u32, color: Rgb) -> Result<Self> {
        if pitch == 0 {
            return Err(CoreError::InvalidPitch(pitch));
        }

        let cols = (surface.width / pitch) as usize + 1;
        let rows = (surface.height / pitch) as usize + 1;
        let size = pitch as f64;

        let mut cells = Vec::with_capacity(cols * rows);
        for col in 0..cols {
            let x = col as f64 * size + CELL_OFFSET;
            for row in 0..rows {
                let y = row as f64 * size + CELL_OFFSET;
                cells.push(Cell::new(x, y, pitch, color));
            }
        }

        tracing::debug!(cols, rows, pitch, "Grid laid out");

        Ok(Self {
            cells,
            pitch,
            cols,
            rows,
            surface,
        })
    }

    /// Index of the first cell (in layout order) containing the point.
    ///
    /// Points on a shared border resolve to the earlier cell. Returns `None`
    /// for points outside every cell.
    pub fn find_index(&self, point: Point) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(point))
    }

    /// Recolor the cell at `index`
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;
        cell.color = color;
        Ok(())
    }

    /// Get cell by index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get cell by column and row
    pub fn cell_at(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(col * self.rows + row)
    }

    /// All cells in layout order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_40() -> Grid {
        Grid::new(Surface::new(40, 40), 20, Rgb::WHITE).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = grid_40();
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.len(), 9);
        assert!(grid.cells().iter().all(|c| c.color == Rgb::WHITE));
    }

    #[test]
    fn test_layout_is_column_major() {
        let grid = grid_40();
        let first = grid.cell(0).unwrap();
        let second = grid.cell(1).unwrap();
        let fourth = grid.cell(3).unwrap();
        assert_eq!((first.x, first.y), (0.5, 0.5));
        assert_eq!((second.x, second.y), (0.5, 20.5));
        assert_eq!((fourth.x, fourth.y), (20.5, 0.5));
        assert_eq!(grid.cell_at(1, 0), Some(fourth));
        assert_eq!(grid.cell_at(3, 0), None);
    }

    #[test]
    fn test_inclusive_layout_for_uneven_surface() {
        let grid = Grid::new(Surface::new(401, 301), 20, Rgb::WHITE).unwrap();
        assert_eq!(grid.col_count(), 21);
        assert_eq!(grid.row_count(), 16);
    }

    #[test]
    fn test_zero_pitch_rejected() {
        assert!(matches!(
            Grid::new(Surface::new(40, 40), 0, Rgb::WHITE),
            Err(CoreError::InvalidPitch(0))
        ));
    }

    #[test]
    fn test_find_index_interior() {
        let grid = grid_40();
        assert_eq!(grid.find_index(Point::new(25.0, 25.0)), Some(4));
        assert_eq!(grid.find_index(Point::new(10.0, 30.0)), Some(1));
        assert_eq!(grid.find_index(Point::new(60.0, 60.0)), Some(8));
    }

    #[test]
    fn test_find_index_shared_corner_is_first_match() {
        let grid = grid_40();
        let point = Point::new(20.5, 20.5);
        assert_eq!(grid.find_index(point), Some(0));
        assert_eq!(grid.find_index(point), grid.find_index(point));
    }

    #[test]
    fn test_find_index_outside() {
        let grid = grid_40();
        assert_eq!(grid.find_index(Point::new(0.0, 0.0)), None);
        assert_eq!(grid.find_index(Point::new(61.0, 10.0)), None);
        assert_eq!(grid.find_index(Point::new(-5.0, 10.0)), None);
    }

    #[test]
    fn test_set_color() {
        let mut grid = grid_40();
        let red = Rgb::new(255, 0, 0);
        grid.set_color(4, red).unwrap();
        assert_eq!(grid.cell(4).map(|c| c.color), Some(red));
        assert_eq!(grid.cell(3).map(|c| c.color), Some(Rgb::WHITE));
    }

    #[test]
    fn test_set_color_out_of_range() {
        let mut grid = grid_40();
        assert!(matches!(
            grid.set_color(9, Rgb::BLACK),
            Err(CoreError::IndexOutOfRange { index: 9, len: 9 })
        ));
    }
}
