//! Canvas-to-raster serialization.
//!
//! The intermediate format is binary PPM (P6): a text header with magic
//! token, dimensions and maximum sample value, followed by raw RGB triples,
//! row-major, no padding.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::canvas::Canvas;
use crate::config::{COLS, ROWS};

/// A 24-bit RGB pixel buffer.
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Rasterizes the canvas at an integer scale: each cell becomes a
    /// `scale`×`scale` block of its palette RGB triple (nearest neighbor).
    pub fn from_canvas(canvas: &Canvas, scale: u32) -> Self {
        let scale = scale as usize;
        let width = COLS * scale;
        let height = ROWS * scale;
        let mut pixels = Vec::with_capacity(width * height * 3);

        for y in 0..height {
            for x in 0..width {
                let rgb = canvas[(x / scale, y / scale)].rgb();
                pixels.extend_from_slice(&rgb);
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGB triples, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes the buffer as a binary PPM file at `path`.
    pub fn write_ppm(&self, path: &Path) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        write!(file, "P6\n{} {}\n255\n", self.width, self.height)?;
        file.write_all(&self.pixels)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Color, Tool};

    fn uniform_canvas(color: Color) -> Canvas {
        let mut canvas = Canvas::new();
        canvas.set_color(color);
        canvas.set_tool(Tool::Bucket);
        canvas.apply_tool();
        canvas
    }

    #[test]
    fn uniform_canvas_at_scale_two() {
        let raster = Raster::from_canvas(&uniform_canvas(Color::Blue), 2);
        assert_eq!(raster.width(), COLS * 2);
        assert_eq!(raster.height(), ROWS * 2);
        assert_eq!(raster.pixels().len(), COLS * 2 * ROWS * 2 * 3);
        for rgb in raster.pixels().chunks(3) {
            assert_eq!(rgb, Color::Blue.rgb());
        }
    }

    #[test]
    fn scaling_replicates_cells_into_blocks() {
        let mut canvas = Canvas::new();
        canvas.set_color(Color::Red);
        canvas.apply_tool(); // pencil paints (0, 0)
        let raster = Raster::from_canvas(&canvas, 3);

        let pixel_at = |x: usize, y: usize| {
            let idx = (y * raster.width() + x) * 3;
            &raster.pixels()[idx..idx + 3]
        };
        // the 3x3 block from cell (0,0) is red, its right neighbor white
        assert_eq!(pixel_at(2, 2), Color::Red.rgb());
        assert_eq!(pixel_at(3, 2), Color::White.rgb());
        assert_eq!(pixel_at(2, 3), Color::White.rgb());
    }

    #[test]
    fn ppm_has_header_and_raw_triples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out");
        let raster = Raster::from_canvas(&uniform_canvas(Color::Green), 1);
        raster.write_ppm(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = format!("P6\n{} {}\n255\n", COLS, ROWS);
        assert!(bytes.starts_with(header.as_bytes()));
        assert_eq!(bytes.len(), header.len() + COLS * ROWS * 3);
    }
}
