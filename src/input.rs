//! Keystroke dispatch and the top-level mode state machine.
//!
//! One keystroke goes in, one canvas mutation or mode transition comes out.
//! Modes: [`Mode::Editing`] (the default), the quit-confirmation sub-dialog,
//! and the nested export sub-flow.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::canvas::{Canvas, Direction, Edge};
use crate::export::convert::Converter;
use crate::export::{ExportEvent, ExportFlow, run_export};
use crate::palette::{Color, Tool};

/// A raw keystroke, reduced to the three shapes the editor cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
}

impl Key {
    /// Maps a crossterm event to a `Key`. Only key presses count; some
    /// terminals also deliver releases.
    pub fn from_event(event: &Event) -> Option<Self> {
        let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            code,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Char(c) => Some(Key::Char(*c)),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        }
    }
}

/// Actions that break out of the input loop.
pub enum BreakingAction {
    Quit,
}

/// The top-level input state. Editing is the resting state; the other two
/// are entered by a single key and always return to editing.
#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    Editing,
    /// Blocking y/n dialog before quitting.
    ConfirmQuit,
    /// The nested three-stage export sub-flow.
    Exporting(ExportFlow),
}

impl Mode {
    /// Dispatches one keystroke against the current mode, mutating the
    /// canvas or advancing the mode. Unrecognized keys are no-ops in every
    /// state.
    pub fn on_key(
        &mut self,
        canvas: &mut Canvas,
        key: Key,
        converter: &dyn Converter,
    ) -> Option<BreakingAction> {
        match self {
            Mode::Editing => {
                if let Some(next) = dispatch_editing(canvas, key) {
                    *self = next;
                }
                None
            }
            Mode::ConfirmQuit => match key {
                Key::Char('y') => Some(BreakingAction::Quit),
                Key::Char('n') => {
                    *self = Mode::Editing;
                    None
                }
                _ => None,
            },
            Mode::Exporting(flow) => {
                match flow.on_key(key) {
                    ExportEvent::Pending => {}
                    ExportEvent::Cancelled => *self = Mode::Editing,
                    ExportEvent::Finished(request) => {
                        run_export(canvas, request, converter);
                        *self = Mode::Editing;
                    }
                }
                None
            }
        }
    }

    /// Extra prompt text shown below the frame, if the mode has any.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Mode::Editing => None,
            Mode::ConfirmQuit => {
                Some("Do you want to exit (program cannot save)? y/n > ".to_string())
            }
            Mode::Exporting(flow) => Some(flow.prompt()),
        }
    }
}

/// The edit-mode control table. Returns the next mode when the key leaves
/// edit mode.
fn dispatch_editing(canvas: &mut Canvas, key: Key) -> Option<Mode> {
    let Key::Char(c) = key else {
        return None;
    };

    // Direct palette selection: '1'-'9' pick entries 1 through 9 of the
    // palette (so '1' is White), '0' picks the tenth, Brown.
    if let Some(d) = c.to_digit(10) {
        let index = if d == 0 { Color::COUNT - 1 } else { d as usize - 1 };
        if let Some(color) = Color::from_index(index) {
            canvas.set_color(color);
        }
        return None;
    }

    match c {
        'e' => return Some(Mode::Exporting(ExportFlow::new())),
        'c' => return Some(Mode::ConfirmQuit),

        'i' => canvas.toggle_cursor_visibility(),

        'h' | 'a' => canvas.move_cursor(Direction::Left),
        'j' | 's' => canvas.move_cursor(Direction::Down),
        'k' | 'w' => canvas.move_cursor(Direction::Up),
        'l' | 'd' => canvas.move_cursor(Direction::Right),
        'm' => canvas.jump_to_edge(Edge::Left),
        ',' => canvas.jump_to_edge(Edge::Bottom),
        '.' => canvas.jump_to_edge(Edge::Top),
        '/' => canvas.jump_to_edge(Edge::Right),

        'u' => canvas.apply_tool(),
        'p' => canvas.set_tool(Tool::Pencil),
        'b' => canvas.set_tool(Tool::Bucket),
        ';' => canvas.cycle_tool(),

        'n' => canvas.next_color(),
        'N' => canvas.prev_color(),

        _ => {}
    }
    None
}
