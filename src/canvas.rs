//! The mutable session state: grid, cursor, tool, color.

use std::ops::{Index, IndexMut};

use crate::config::{COLS, ROWS};
use crate::palette::{Color, Tool};

/// A cursor movement by one cell. Movement wraps: the canvas is a torus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

/// A jump target setting one cursor axis to its extreme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Bottom,
    Top,
    Right,
}

/// The canvas session state. Created once at startup and owned by the app
/// loop for the lifetime of the process; every component that needs it gets
/// a reference.
#[derive(Debug)]
pub struct Canvas {
    cells: Vec<Color>,
    /// (col, row), each always in `[0, COLS)` / `[0, ROWS)`.
    cursor: (usize, usize),
    cursor_hidden: bool,
    tool: Tool,
    color: Color,
    export_log: Option<String>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates a fresh session: all cells white, cursor at the top-left,
    /// pencil selected, black paint.
    pub fn new() -> Self {
        Self {
            cells: vec![Color::White; COLS * ROWS],
            cursor: (0, 0),
            cursor_hidden: false,
            tool: Tool::Pencil,
            color: Color::Black,
            export_log: None,
        }
    }

    /// Cursor position as (col, row).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn export_log(&self) -> Option<&str> {
        self.export_log.as_deref()
    }

    /// Moves the cursor one cell, wrapping modulo the axis dimension.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (col, row) = self.cursor;
        self.cursor = match direction {
            Direction::Left => (decrement_wrap(col, COLS - 1), row),
            Direction::Right => ((col + 1) % COLS, row),
            Direction::Up => (col, decrement_wrap(row, ROWS - 1)),
            Direction::Down => (col, (row + 1) % ROWS),
        };
    }

    /// Sets one cursor axis directly to 0 or to the last valid index.
    pub fn jump_to_edge(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.cursor.0 = 0,
            Edge::Right => self.cursor.0 = COLS - 1,
            Edge::Top => self.cursor.1 = 0,
            Edge::Bottom => self.cursor.1 = ROWS - 1,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn next_color(&mut self) {
        self.color = self.color.next();
    }

    pub fn prev_color(&mut self) {
        self.color = self.color.prev();
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn cycle_tool(&mut self) {
        self.tool = self.tool.next();
    }

    pub fn toggle_cursor_visibility(&mut self) {
        self.cursor_hidden = !self.cursor_hidden;
    }

    /// Applies the active tool with the active color: the pencil paints the
    /// cell under the cursor, the bucket floods the entire canvas.
    pub fn apply_tool(&mut self) {
        match self.tool {
            Tool::Pencil => {
                let (cursor, color) = (self.cursor, self.color);
                self[cursor] = color;
            }
            Tool::Bucket => {
                self.cells.fill(self.color);
            }
        }
    }

    /// Replaces the last-export status message.
    pub fn set_export_log(&mut self, message: String) {
        self.export_log = Some(message);
    }

    #[inline]
    fn get_index(&self, col: usize, row: usize) -> usize {
        row * COLS + col
    }
}

impl Index<(usize, usize)> for Canvas {
    type Output = Color;

    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self.cells[self.get_index(col, row)]
    }
}

impl IndexMut<(usize, usize)> for Canvas {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
        let idx = self.get_index(col, row);
        &mut self.cells[idx]
    }
}

fn decrement_wrap(val: usize, max_val: usize) -> usize {
    if val == 0 { max_val } else { val - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walk_is_a_torus() {
        let mut canvas = Canvas::new();

        for _ in 0..COLS {
            canvas.move_cursor(Direction::Right);
        }
        assert_eq!(canvas.cursor(), (0, 0));

        canvas.move_cursor(Direction::Left);
        assert_eq!(canvas.cursor(), (COLS - 1, 0));

        canvas.move_cursor(Direction::Up);
        assert_eq!(canvas.cursor(), (COLS - 1, ROWS - 1));

        for _ in 0..ROWS {
            canvas.move_cursor(Direction::Down);
        }
        assert_eq!(canvas.cursor(), (COLS - 1, ROWS - 1));
    }

    #[test]
    fn jump_to_edges() {
        let mut canvas = Canvas::new();
        canvas.jump_to_edge(Edge::Right);
        assert_eq!(canvas.cursor(), (COLS - 1, 0));
        canvas.jump_to_edge(Edge::Bottom);
        assert_eq!(canvas.cursor(), (COLS - 1, ROWS - 1));
        canvas.jump_to_edge(Edge::Left);
        assert_eq!(canvas.cursor(), (0, ROWS - 1));
        canvas.jump_to_edge(Edge::Top);
        assert_eq!(canvas.cursor(), (0, 0));
    }

    #[test]
    fn pencil_paints_exactly_one_cell() {
        let mut canvas = Canvas::new();
        canvas.move_cursor(Direction::Right);
        canvas.move_cursor(Direction::Down);
        canvas.set_color(Color::Red);
        canvas.apply_tool();

        for row in 0..ROWS {
            for col in 0..COLS {
                let expected = if (col, row) == (1, 1) {
                    Color::Red
                } else {
                    Color::White
                };
                assert_eq!(canvas[(col, row)], expected);
            }
        }
    }

    #[test]
    fn bucket_floods_everything() {
        let mut canvas = Canvas::new();
        canvas.set_color(Color::Cyan);
        canvas.set_tool(Tool::Bucket);
        canvas.apply_tool();

        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(canvas[(col, row)], Color::Cyan);
            }
        }
    }

    #[test]
    fn export_log_is_replaced_not_appended() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.export_log(), None);
        canvas.set_export_log("first".to_string());
        canvas.set_export_log("second".to_string());
        assert_eq!(canvas.export_log(), Some("second"));
    }
}
