use std::str::FromStr;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{PixPackError, Result};

/// Pixel layouts supported for page buffers and input images.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    Alpha,
    LuminanceAlpha,
    Rgb565,
    Rgba4444,
    Rgb888,
    Rgba8888,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::Alpha => 1,
            PixelFormat::LuminanceAlpha | PixelFormat::Rgb565 | PixelFormat::Rgba4444 => 2,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Rgba8888 => 4,
        }
    }
}

impl FromStr for PixelFormat {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alpha" => Ok(Self::Alpha),
            "luminancealpha" | "la" => Ok(Self::LuminanceAlpha),
            "rgb565" => Ok(Self::Rgb565),
            "rgba4444" => Ok(Self::Rgba4444),
            "rgb888" => Ok(Self::Rgb888),
            "rgba8888" => Ok(Self::Rgba8888),
            _ => Err(()),
        }
    }
}

/// Owned row-major pixel buffer with explicit dimensions and format.
///
/// Rows are tightly packed: the stride is `width * bytes_per_pixel`.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a zero-filled (fully transparent) pixmap.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PixPackError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize * format.bytes_per_pixel() as usize;
        Ok(Self {
            width,
            height,
            format,
            data: vec![0; len],
        })
    }

    /// Wraps an existing byte buffer; its length must match the dimensions.
    pub fn from_bytes(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PixPackError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel() as usize;
        if data.len() != expected {
            return Err(PixPackError::InvalidInput(format!(
                "buffer length {} does not match {}x{} {:?} ({} bytes)",
                data.len(),
                width,
                height,
                format,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_bytes(width, height, PixelFormat::Rgba8888, image.as_raw().clone())
    }

    /// Copies the buffer into an `RgbaImage`; only defined for `Rgba8888`.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        if self.format != PixelFormat::Rgba8888 {
            return Err(PixPackError::InvalidInput(format!(
                "cannot view a {:?} pixmap as RGBA",
                self.format
            )));
        }
        RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            PixPackError::InvalidInput("pixmap buffer too short for an image".into())
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel() as usize
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
