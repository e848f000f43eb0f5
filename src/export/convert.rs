//! Seam to the external image converter.

use std::io;
use std::path::Path;
use std::process::Command;

/// Converts an intermediate raster file into the requested output format.
///
/// Implementations are trusted: the pipeline only checks that the converter
/// ran, not that the output file is valid.
pub trait Converter {
    fn convert(&self, raster: &Path, output: &Path) -> io::Result<()>;
}

/// Shells out to `ffmpeg`, which picks the output format from the
/// destination extension.
pub struct FfmpegConverter;

impl Converter for FfmpegConverter {
    fn convert(&self, raster: &Path, output: &Path) -> io::Result<()> {
        let status = Command::new("ffmpeg")
            .arg("-i")
            .arg(raster)
            .arg(output)
            .status()?;
        log::debug!("ffmpeg exited with {status}");
        Ok(())
    }
}
