//! Full-frame construction.
//!
//! [`render`] is a pure function of the canvas state. The app loop writes
//! the returned string to the terminal after every keystroke; nothing here
//! performs I/O or mutates anything.

use std::fmt::Write;

use crate::canvas::Canvas;
use crate::config::{COLS, CURSOR_PIXEL, FULL_PIXEL, ROWS, TITLE};
use crate::palette::PALETTE;
use crate::rendering::ansi::{Style, render_run};

const CONTROLS: &str = "\
`e` export     `c` cancel       `u` use tool     `p` pencil    `b` bucket
`n` next color `N` prev color   `1-9` pick color `;` next tool `i` hide cursor
`hjkl` l/d/u/r `m,./` go to l/d/u/r edge";

/// Builds the complete frame: centered title, the grid, the status line with
/// the swatch legend, the control hints, and the last export log if any.
pub fn render(canvas: &Canvas) -> String {
    let mut out = String::new();

    render_title(&mut out);
    render_grid(canvas, &mut out);
    render_status_line(canvas, &mut out);

    out.push('\n');
    out.push_str(CONTROLS);
    out.push('\n');

    if let Some(log) = canvas.export_log() {
        let _ = write!(out, "\nLast Export Log: {log}\n");
    }

    out
}

fn render_title(out: &mut String) {
    // Each cell is two characters wide, so the canvas spans 2*COLS columns.
    let width = COLS * 2;
    let pad = if TITLE.len() >= width {
        0
    } else {
        (width - TITLE.len()) / 2
    };
    for _ in 0..pad {
        out.push(' ');
    }
    out.push_str(TITLE);
    out.push('\n');
}

fn render_grid(canvas: &Canvas, out: &mut String) {
    let cursor = canvas.cursor();
    // The bucket affects the whole canvas, so its cursor stays visible even
    // when hidden; otherwise the hidden flag wins.
    let show_cursor = canvas.tool() == crate::palette::Tool::Bucket || !canvas.cursor_hidden();

    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = canvas[(col, row)].rgb();
            if (col, row) == cursor && show_cursor {
                // Selected color as foreground over the cell color, so the
                // cursor shows what painting here would do.
                out.push_str(&render_run(
                    Some(cell),
                    canvas.color().rgb(),
                    Style::None,
                    CURSOR_PIXEL,
                ));
            } else {
                out.push_str(&render_run(Some(cell), cell, Style::None, FULL_PIXEL));
            }
        }
        out.push('\n');
    }
}

fn render_status_line(canvas: &Canvas, out: &mut String) {
    let (col, row) = canvas.cursor();
    let _ = write!(
        out,
        "({:02}, {:02}) | Tool: {} | Color: {:<7} (",
        col + 1,
        row + 1,
        canvas.tool().name(),
        canvas.color().name(),
    );

    for color in PALETTE {
        let letter = &color.name()[..1];
        if color == canvas.color() {
            out.push_str(crate::rendering::ansi::encode_style(Style::Bold));
            out.push_str(&render_run(None, color.rgb(), Style::Underline, letter));
        } else {
            out.push_str(&render_run(None, color.rgb(), Style::None, letter));
        }
    }
    out.push_str(")\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Direction;
    use crate::palette::{Color, Tool};

    #[test]
    fn title_is_centered_over_canvas_width() {
        let frame = render(&Canvas::new());
        let title_line = frame.lines().next().unwrap();
        let pad = (COLS * 2 - TITLE.len()) / 2;
        assert_eq!(title_line, format!("{}{}", " ".repeat(pad), TITLE));
    }

    #[test]
    fn grid_has_one_line_per_row() {
        let frame = render(&Canvas::new());
        // title + grid rows at least
        assert!(frame.lines().count() > ROWS);
    }

    #[test]
    fn cursor_cell_uses_selected_color_as_foreground() {
        let canvas = Canvas::new();
        let frame = render(&canvas);
        // cursor at (0,0): white background, black (selected) foreground
        let expected = render_run(
            Some(Color::White.rgb()),
            Color::Black.rgb(),
            Style::None,
            CURSOR_PIXEL,
        );
        assert!(frame.contains(&expected));
    }

    #[test]
    fn hidden_cursor_draws_no_cursor_glyph() {
        let mut canvas = Canvas::new();
        canvas.toggle_cursor_visibility();
        let frame = render(&canvas);
        assert!(!frame.contains(CURSOR_PIXEL));
    }

    #[test]
    fn bucket_overrides_hidden_cursor() {
        let mut canvas = Canvas::new();
        canvas.toggle_cursor_visibility();
        canvas.set_tool(Tool::Bucket);
        let frame = render(&canvas);
        assert!(frame.contains(CURSOR_PIXEL));
    }

    #[test]
    fn status_line_reports_one_indexed_cursor() {
        let mut canvas = Canvas::new();
        canvas.move_cursor(Direction::Right);
        canvas.move_cursor(Direction::Down);
        let frame = render(&canvas);
        assert!(frame.contains("(02, 02) | Tool: Pencil | Color: Black"));
    }

    #[test]
    fn export_log_line_appears_once_set() {
        let mut canvas = Canvas::new();
        assert!(!render(&canvas).contains("Last Export Log:"));
        canvas.set_export_log("File a.png successfully exported.".to_string());
        assert!(
            render(&canvas).contains("Last Export Log: File a.png successfully exported.")
        );
    }
}
