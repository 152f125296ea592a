//! Pixel output.
//!
//! The camera hands every averaged pixel, in row-major order from the top
//! row down, to a [`PixelWriter`]. Two writers exist:
//!
//! - [`PpmWriter`]: plain-text PPM (`P3`) streamed straight to any `io::Write`
//! - [`PngWriter`]: buffers the image and saves a PNG when finished
//!
//! Both share the same gamma-2 conversion in [`color_to_rgb8`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use lumen_math::{Color, Interval};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel written before the image size was known")]
    NotStarted,

    #[error("More pixels written than fit in a {width}x{height} image")]
    TooManyPixels { width: u32, height: u32 },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Channel range after gamma correction. The upper bound keeps `* 256`
/// from ever producing 256.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let to_byte = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Destination for rendered pixels.
pub trait PixelWriter {
    /// Called once before any pixel with the final image size.
    fn begin(&mut self, width: u32, height: u32) -> OutputResult<()>;

    /// Receive the next pixel in row-major order.
    fn write_pixel(&mut self, color: Color) -> OutputResult<()>;

    /// Called once after the last pixel.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Streams a plain-text PPM image.
///
/// Header lines are `P3`, `<width> <height>` and `255`; then one
/// `r g b` line per pixel.
pub struct PpmWriter<W: Write> {
    out: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PpmWriter<BufWriter<File>> {
    /// Create (or truncate) a PPM file.
    pub fn create<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> PixelWriter for PpmWriter<W> {
    fn begin(&mut self, width: u32, height: u32) -> OutputResult<()> {
        write!(self.out, "P3\n{width} {height}\n255\n")?;
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> OutputResult<()> {
        let [r, g, b] = color_to_rgb8(color);
        writeln!(self.out, "{r} {g} {b}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects pixels into an RGB buffer and saves it as PNG on `finish`.
pub struct PngWriter {
    path: PathBuf,
    image: Option<RgbImage>,
    next: u64,
}

impl PngWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            image: None,
            next: 0,
        }
    }
}

impl PixelWriter for PngWriter {
    fn begin(&mut self, width: u32, height: u32) -> OutputResult<()> {
        self.image = Some(RgbImage::new(width, height));
        self.next = 0;
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> OutputResult<()> {
        let image = self.image.as_mut().ok_or(OutputError::NotStarted)?;
        let (width, height) = image.dimensions();
        if self.next >= u64::from(width) * u64::from(height) {
            return Err(OutputError::TooManyPixels { width, height });
        }

        let x = (self.next % u64::from(width)) as u32;
        let y = (self.next / u64::from(width)) as u32;
        image.put_pixel(x, y, Rgb(color_to_rgb8(color)));
        self.next += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        let image = self.image.as_ref().ok_or(OutputError::NotStarted)?;
        image.save(&self.path)?;
        log::info!("Saved {}", self.path.display());
        Ok(())
    }
}

/// Pick a writer from the file extension: `.png` gives PNG, anything else PPM.
pub fn writer_for_path(path: &Path) -> OutputResult<Box<dyn PixelWriter>> {
    let is_png = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        Ok(Box::new(PngWriter::new(path)))
    } else {
        Ok(Box::new(PpmWriter::create(path)?))
    }
}
