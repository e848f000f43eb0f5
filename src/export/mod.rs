//! The export sub-flow: format selection, filename entry, scale entry,
//! then rasterization and hand-off to the external converter.
//!
//! The sub-flow is a strictly forward three-stage state machine. Cancelling
//! discards all partial state; nothing touches the canvas until the final
//! log message is recorded.

pub mod convert;
pub mod raster;

use std::fmt::Write;
use std::path::Path;

use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::config::{COLS, ROWS};
use crate::export::convert::Converter;
use crate::export::raster::Raster;
use crate::input::Key;

/// Output image format, chosen in the first stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Png,
    Jpg,
    Ico,
    Ppm,
}

impl Format {
    /// File extension including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Png => ".png",
            Format::Jpg => ".jpg",
            Format::Ico => ".ico",
            Format::Ppm => ".ppm",
        }
    }

    fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Format::Png),
            '2' => Some(Format::Jpg),
            '3' => Some(Format::Ico),
            '4' => Some(Format::Ppm),
            _ => None,
        }
    }
}

/// A fully specified export, produced only by a completed flow.
#[derive(Debug, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: Format,
    pub filename: String,
    pub scale: u32,
}

const MAX_SCALE_DIGITS: usize = 4;

#[derive(Debug)]
enum Stage {
    SelectingFormat,
    NamingFile {
        format: Format,
        filename: String,
    },
    SpecifyingScale {
        format: Format,
        filename: String,
        digits: SmallVec<[u8; MAX_SCALE_DIGITS]>,
    },
}

/// Result of feeding one keystroke to the flow.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportEvent {
    /// Still collecting input.
    Pending,
    /// The flow was cancelled; nothing happened.
    Cancelled,
    /// All three stages completed.
    Finished(ExportRequest),
}

/// The three-stage export state machine. Lives only while the app is in
/// export mode.
#[derive(Debug)]
pub struct ExportFlow {
    stage: Stage,
}

impl Default for ExportFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportFlow {
    pub fn new() -> Self {
        Self {
            stage: Stage::SelectingFormat,
        }
    }

    /// Advances the flow by one keystroke. Stages only move forward; keys
    /// that don't fit the current stage are ignored.
    pub fn on_key(&mut self, key: Key) -> ExportEvent {
        let stage = std::mem::replace(&mut self.stage, Stage::SelectingFormat);
        let (stage, event) = dispatch_stage(stage, key);
        self.stage = stage;
        event
    }

    /// The scale the flow would finalize with right now.
    pub fn scale(&self) -> u32 {
        match &self.stage {
            Stage::SpecifyingScale { digits, .. } => effective_scale(digits),
            _ => 1,
        }
    }

    /// Prompt text appended below the frame while the flow is active.
    pub fn prompt(&self) -> String {
        let mut out = String::from(
            "Exporting file (Press `c` to cancel):\n\
             Select format:\n\
             1. PNG\n\
             2. JPG\n\
             3. ICO\n\
             4. PPM\n\
             1/2/3/4 > ",
        );
        match &self.stage {
            Stage::SelectingFormat => {}
            Stage::NamingFile { format, filename } => {
                let _ = write!(out, "{}\nFile name: {}", format.extension(), filename);
            }
            Stage::SpecifyingScale {
                format,
                filename,
                digits,
            } => {
                let scale = effective_scale(digits);
                let _ = write!(out, "{}\nFile name: {}\n", format.extension(), filename);
                let _ = write!(
                    out,
                    "By what factor should your image be scaled by? (Max: 9999)\n\
                     Width : {COLS} * {scale} = {}\n\
                     Height: {ROWS} * {scale} = {}\n\
                     > {}",
                    COLS * scale as usize,
                    ROWS * scale as usize,
                    std::str::from_utf8(digits).unwrap_or(""),
                );
            }
        }
        out
    }
}

/// One step of the stage machine: consumes the current stage and the
/// keystroke, returns the next stage and what happened.
fn dispatch_stage(stage: Stage, key: Key) -> (Stage, ExportEvent) {
    match stage {
        Stage::SelectingFormat => {
            // The only stage that honors cancel.
            if key == Key::Char('c') {
                return (Stage::SelectingFormat, ExportEvent::Cancelled);
            }
            if let Key::Char(c) = key {
                if let Some(format) = Format::from_digit(c) {
                    return (
                        Stage::NamingFile {
                            format,
                            filename: String::new(),
                        },
                        ExportEvent::Pending,
                    );
                }
            }
            (Stage::SelectingFormat, ExportEvent::Pending)
        }
        Stage::NamingFile {
            format,
            mut filename,
        } => {
            match key {
                Key::Backspace => {
                    filename.pop();
                }
                Key::Enter => {
                    // an empty name does not advance
                    if !filename.is_empty() {
                        return (
                            Stage::SpecifyingScale {
                                format,
                                filename,
                                digits: SmallVec::new(),
                            },
                            ExportEvent::Pending,
                        );
                    }
                }
                // '/' doubles as the edit-mode "jump to right edge" key;
                // swallow it here instead of taking it literally.
                Key::Char('/') => {}
                Key::Char(c) => filename.push(c),
            }
            (Stage::NamingFile { format, filename }, ExportEvent::Pending)
        }
        Stage::SpecifyingScale {
            format,
            filename,
            mut digits,
        } => match key {
            Key::Enter => {
                let scale = effective_scale(&digits);
                (
                    Stage::SelectingFormat,
                    ExportEvent::Finished(ExportRequest {
                        format,
                        filename,
                        scale,
                    }),
                )
            }
            Key::Backspace => {
                digits.pop();
                (
                    Stage::SpecifyingScale {
                        format,
                        filename,
                        digits,
                    },
                    ExportEvent::Pending,
                )
            }
            Key::Char(c) if c.is_ascii_digit() => {
                if digits.len() < MAX_SCALE_DIGITS {
                    digits.push(c as u8);
                }
                (
                    Stage::SpecifyingScale {
                        format,
                        filename,
                        digits,
                    },
                    ExportEvent::Pending,
                )
            }
            _ => (
                Stage::SpecifyingScale {
                    format,
                    filename,
                    digits,
                },
                ExportEvent::Pending,
            ),
        },
    }
}

/// Parses the entered digits; an empty or zero entry falls back to 1.
fn effective_scale(digits: &[u8]) -> u32 {
    let parsed = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0);
    if parsed == 0 { 1 } else { parsed }
}

/// Runs a completed export: rasterizes the canvas, writes the intermediate
/// PPM, hands it to the converter, removes the intermediate file, and
/// records the outcome in the canvas export log.
///
/// Success is gated only on the raster write. The converter's exit is
/// trusted, not verified.
pub fn run_export(canvas: &mut Canvas, request: ExportRequest, converter: &dyn Converter) {
    let output_name = format!("{}{}", request.filename, request.format.extension());
    let raster_path = Path::new(&request.filename);

    let raster = Raster::from_canvas(canvas, request.scale);
    let message = match raster.write_ppm(raster_path) {
        Ok(()) => {
            if let Err(err) = converter.convert(raster_path, Path::new(&output_name)) {
                log::warn!("converter invocation failed for {output_name}: {err}");
            }
            // best-effort cleanup of the intermediate raster
            if let Err(err) = std::fs::remove_file(raster_path) {
                log::warn!("could not remove intermediate raster {}: {err}", request.filename);
            }
            format!("File {output_name} successfully exported.")
        }
        Err(err) => {
            log::warn!("raster write failed for {}: {err}", request.filename);
            format!("File {output_name} was not exported successfully.")
        }
    };
    canvas.set_export_log(message);
}
