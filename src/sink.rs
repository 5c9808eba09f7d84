use std::path::{Path, PathBuf};

use image::{ImageResult, Rgba, RgbaImage};

/// Destination for a finished frame.
///
/// The renderer writes every pixel once and then calls [`present`] exactly
/// once, after the last pixel of the frame.
///
/// [`present`]: FramebufferSink::present
pub trait FramebufferSink {
    type Error;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Stores one pixel. Coordinates outside the sink are ignored.
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>);

    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Framebuffer backed by an [`RgbaImage`], optionally written to disk on present.
pub struct ImageSink {
    image: RgbaImage,
    output: Option<PathBuf>,
}

impl ImageSink {
    /// In-memory sink; [`FramebufferSink::present`] does nothing.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            output: None,
        }
    }

    /// Sink that saves the frame to `path` on present. The format follows
    /// the file extension.
    pub fn with_output(width: u32, height: u32, path: impl AsRef<Path>) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            output: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl FramebufferSink for ImageSink {
    type Error = image::ImageError;

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    fn present(&mut self) -> ImageResult<()> {
        let Some(path) = self.output.as_ref() else {
            return Ok(());
        };
        self.image.save(path)?;
        tracing::info!(path = %path.display(), "frame saved");
        Ok(())
    }
}
