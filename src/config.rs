//! Fixed session parameters.
//!
//! The canvas is not resizable, so everything here is a compile-time
//! constant. Cells are rendered two terminal columns wide so they come out
//! roughly square.

/// Number of cell rows on the canvas.
pub const ROWS: usize = 32;
/// Number of cell columns on the canvas.
pub const COLS: usize = 32;

/// Title printed above the grid, centered over the canvas width.
pub const TITLE: &str = "termsketch";

/// Glyph for an ordinary cell. Two full blocks so foreground and background
/// render identically.
pub const FULL_PIXEL: &str = "\u{2588}\u{2588}";

/// Glyph for the cell under the cursor. The medium shade lets the selected
/// color (foreground) show through over the cell color (background).
pub const CURSOR_PIXEL: &str = "\u{2592}\u{2592}";
