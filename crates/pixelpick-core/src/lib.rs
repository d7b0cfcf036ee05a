//! # PixelPick Core
//!
//! The cell grid and palette-cycling engine behind the PixelPick editor.
//!
//! ## Architecture
//!
//! - **Color**: parsing of hex / functional color strings into RGB triples
//! - **Palette**: ordered color sequence with eraser handling and cycling
//! - **Grid**: fixed layout of square cells with point-to-cell resolution
//! - **Controller**: pointer and modifier handling over the grid
//! - **Sink**: change notification to callbacks or mirrored JSON state
//! - **Render**: stroke and fill requests for an external canvas
//!
//! The engine is single-threaded and has no dependency on any windowing or
//! input-event API. Hosts translate their own events into
//! [`PaintController`] calls.

pub mod cell;
pub mod color;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod palette;
pub mod render;
pub mod sink;

pub use cell::Cell;
pub use color::{ColorSpec, Rgb};
pub use controller::{CellChange, EditorOptions, EditorState, PaintController, PointerButton};
pub use error::{CoreError, Result};
pub use geometry::{Point, Rect, Surface};
pub use grid::{Grid, CELL_OFFSET, DEFAULT_PITCH};
pub use palette::{Palette, DEFAULT_PALETTE};
pub use render::{Canvas, DrawCommand, DrawList, NullCanvas, DEFAULT_BORDER_COLOR};
pub use sink::{ChangeSink, MirrorTarget};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
