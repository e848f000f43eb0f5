//! Rendering pipeline: canvas state in, styled terminal text out.
//!
//! **Sub-modules:**
//!
//! *   [`ansi`](crate::rendering::ansi): 24-bit color and style escape
//!     sequences, and the self-terminating styled [run](crate::rendering::ansi::render_run).
//! *   [`frame`](crate::rendering::frame): builds the full frame (title,
//!     grid, status line, control hints, export log) as one string.
//!
//! Frame construction is a pure function of the canvas state; the actual
//! terminal writes happen in the app loop.

pub mod ansi;
pub mod frame;
