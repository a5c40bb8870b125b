use serde::{Deserialize, Serialize};

use crate::error::{PixPackError, Result};
use crate::pixmap::PixelFormat;

/// Packing configuration, fixed for a packer's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Pixel format of page buffers; input pixmaps must match.
    pub format: PixelFormat,
    /// Page width in pixels.
    pub page_width: u32,
    /// Page height in pixels.
    pub page_height: u32,
    /// Pixels reserved to the right of and below each packed image.
    #[serde(default)]
    pub padding: u32,
    /// Maximum number of pages; 0 means unlimited.
    #[serde(default)]
    pub max_pages: u32,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::Rgba8888,
            page_width: 1024,
            page_height: 1024,
            padding: 0,
            max_pages: 0,
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.page_width == 0 || self.page_height == 0 {
            return Err(PixPackError::InvalidDimensions {
                width: self.page_width,
                height: self.page_height,
            });
        }
        if self.padding >= self.page_width || self.padding >= self.page_height {
            return Err(PixPackError::InvalidInput(format!(
                "padding ({}) leaves no usable space on a {}x{} page",
                self.padding, self.page_width, self.page_height
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn format(mut self, v: PixelFormat) -> Self {
        self.cfg.format = v;
        self
    }
    pub fn page_size(mut self, w: u32, h: u32) -> Self {
        self.cfg.page_width = w;
        self.cfg.page_height = h;
        self
    }
    pub fn padding(mut self, v: u32) -> Self {
        self.cfg.padding = v;
        self
    }
    pub fn max_pages(mut self, v: u32) -> Self {
        self.cfg.max_pages = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
