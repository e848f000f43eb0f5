//! termsketch: a pixel-art canvas editor for the terminal.
//!
//! The editor is a single blocking read-evaluate-render loop: read one
//! keystroke, dispatch it through the current [`Mode`](input::Mode), redraw
//! the full frame from the [`Canvas`](canvas::Canvas) state. There is no
//! background work and no timers; the one canvas is owned by [`App`] and
//! passed by reference to whoever needs it.

use std::io::{self, Write, stdout};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute, queue};

pub mod canvas;
pub mod config;
pub mod export;
pub mod input;
pub mod palette;
pub mod rendering;

use crate::canvas::Canvas;
use crate::export::convert::{Converter, FfmpegConverter};
use crate::input::{BreakingAction, Key, Mode};

/// The editor session: canvas, input mode, and the converter seam.
pub struct App {
    canvas: Canvas,
    mode: Mode,
    converter: Box<dyn Converter>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a fresh session exporting through `ffmpeg`.
    pub fn new() -> Self {
        Self::with_converter(Box::new(FfmpegConverter))
    }

    /// Creates a session with a custom converter, mainly for tests.
    pub fn with_converter(converter: Box<dyn Converter>) -> Self {
        Self {
            canvas: Canvas::new(),
            mode: Mode::Editing,
            converter,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Feeds one keystroke through the mode state machine.
    pub fn handle_key(&mut self, key: Key) -> Option<BreakingAction> {
        self.mode
            .on_key(&mut self.canvas, key, self.converter.as_ref())
    }

    /// The full frame for the current state, including any mode prompt.
    pub fn frame(&self) -> String {
        let mut frame = rendering::frame::render(&self.canvas);
        if let Some(prompt) = self.mode.prompt() {
            frame.push('\n');
            frame.push_str(&prompt);
        }
        frame
    }

    /// Runs the blocking input loop until the user confirms quitting.
    pub fn run(&mut self, sink: &mut impl Write) -> io::Result<()> {
        loop {
            self.draw(sink)?;
            let key = read_key()?;
            if let Some(BreakingAction::Quit) = self.handle_key(key) {
                break;
            }
        }
        Ok(())
    }

    fn draw(&self, sink: &mut impl Write) -> io::Result<()> {
        queue!(
            sink,
            cursor::MoveTo(0, 0),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        )?;
        // In raw mode '\n' does not return the carriage, so emit the frame
        // line by line.
        for line in self.frame().lines() {
            queue!(
                sink,
                crossterm::style::Print(line),
                cursor::MoveToNextLine(1)
            )?;
        }
        sink.flush()
    }
}

/// Blocks until the next keystroke the editor understands.
///
/// Resize and other non-key events are skipped; the next draw repaints the
/// whole frame anyway.
fn read_key() -> io::Result<Key> {
    loop {
        let event = crossterm::event::read()?;
        if let Some(key) = Key::from_event(&event) {
            return Ok(key);
        }
    }
}

/// Puts the terminal into the mode the editor needs: raw (unbuffered,
/// unechoed) input, alternate screen, hardware cursor hidden.
///
/// Call [`terminal_cleanup`] on exit, and [`install_panic_handler`] right
/// after this so a panic restores the terminal too.
pub fn terminal_setup() -> io::Result<()> {
    let mut stdout = stdout();

    execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    enable_raw_mode()?;
    execute!(stdout, cursor::Hide)?;

    Ok(())
}

/// Restores everything [`terminal_setup`] changed.
pub fn terminal_cleanup() -> io::Result<()> {
    let mut stdout = stdout();
    execute!(stdout, cursor::Show)?;
    execute!(
        stdout,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
    )?;
    disable_raw_mode()?;
    execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;

    Ok(())
}

/// Installs a panic handler that cleans up the terminal before panicking.
///
/// Without this the panic message would be lost in the alternate screen and
/// the shell left in raw mode.
pub fn install_panic_handler() {
    let old_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |pinfo| {
        let _ = terminal_cleanup();
        eprintln!("{pinfo}");
        old_hook(pinfo);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;

    #[test]
    fn frame_includes_mode_prompt() {
        let mut app = App::new();
        assert!(!app.frame().contains("y/n >"));

        app.handle_key(Key::Char('c'));
        assert!(app.frame().contains("Do you want to exit"));

        app.handle_key(Key::Char('n'));
        app.handle_key(Key::Char('e'));
        assert!(app.frame().contains("Select format"));
    }

    #[test]
    fn fresh_session_defaults() {
        let app = App::new();
        assert_eq!(app.canvas().cursor(), (0, 0));
        assert_eq!(app.canvas().color(), Color::Black);
        assert_eq!(app.canvas()[(0, 0)], Color::White);
    }
}
