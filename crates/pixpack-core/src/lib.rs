//! Core library for packing pixmaps into multi-page texture atlases.
//!
//! - `RectPacker`: skyline bin-packing surface for one fixed-size page
//! - `PixmapPacker`: multi-page orchestrator that blits pixmaps into page
//!   buffers and records placement metadata per entry
//! - `compute_trim`: word-at-a-time bounding-box scan of RGBA content,
//!   used to shrink images before packing
//!
//! Quick example:
//! ```
//! use pixpack_core::prelude::*;
//!
//! # fn main() -> pixpack_core::Result<()> {
//! let cfg = PackerConfig::builder().page_size(256, 256).padding(2).build();
//! let mut packer: PixmapPacker<String> = PixmapPacker::new(cfg)?;
//! let sprite = Pixmap::new(32, 32, PixelFormat::Rgba8888)?;
//! let (page, entry) = packer.pack(Some("hero".into()), &sprite, None)?;
//! assert_eq!((page, entry.slot.w, entry.slot.h), (0, 32, 32));
//! # Ok(())
//! # }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod model;
pub mod packer;
pub mod pixmap;
pub mod rect_packer;
pub mod trim;

pub use compositing::*;
pub use config::*;
pub use error::*;
pub use model::*;
pub use packer::*;
pub use pixmap::*;
pub use rect_packer::*;
pub use trim::*;

/// Convenience prelude for common types and functions.
/// Importing `pixpack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::compositing::blit_region;
    pub use crate::config::{PackerConfig, PackerConfigBuilder};
    pub use crate::error::{PixPackError, Result};
    pub use crate::model::{PackStats, PackedEntry, Rect, Trim};
    pub use crate::packer::{AtlasPage, PixmapPacker};
    pub use crate::pixmap::{Pixmap, PixelFormat};
    pub use crate::rect_packer::RectPacker;
    pub use crate::trim::compute_trim;
}
