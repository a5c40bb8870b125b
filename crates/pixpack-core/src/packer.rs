use tracing::{debug, instrument, trace};

use crate::compositing::blit_region;
use crate::config::PackerConfig;
use crate::error::{PixPackError, Result};
use crate::model::{PackStats, PackedEntry, Rect, Trim};
use crate::pixmap::Pixmap;
use crate::rect_packer::RectPacker;

/// One fixed-size page: a pixel buffer, its packing surface, and the
/// entries placed on it in pack order.
pub struct AtlasPage<K> {
    pixels: Pixmap,
    surface: RectPacker,
    entries: Vec<PackedEntry<K>>,
}

impl<K> AtlasPage<K> {
    fn new(config: &PackerConfig) -> Result<Self> {
        Ok(Self {
            pixels: Pixmap::new(config.page_width, config.page_height, config.format)?,
            surface: RectPacker::new(config.page_width, config.page_height)?,
            entries: Vec::new(),
        })
    }

    pub fn pixels(&self) -> &Pixmap {
        &self.pixels
    }

    pub fn entries(&self) -> &[PackedEntry<K>] {
        &self.entries
    }
}

/// Multi-page packer: copies pixmaps (or their trimmed regions) into
/// fixed-size page buffers, growing the page list when the current page
/// runs out of space.
///
/// Single-threaded by construction; callers must serialize access to one
/// packer per packing session.
pub struct PixmapPacker<K = String> {
    config: PackerConfig,
    pages: Vec<AtlasPage<K>>,
    disposed: bool,
}

impl<K> PixmapPacker<K> {
    pub fn new(config: PackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pages: Vec::new(),
            disposed: false,
        })
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    pub fn pages(&self) -> &[AtlasPage<K>] {
        &self.pages
    }

    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Packs `image` onto a page and records an entry for it.
    ///
    /// With a `trim`, only the trimmed region is placed and copied; the
    /// trim must lie within the source and span at least one pixel.
    /// Padding is added to the space reserved on the page but stripped
    /// from the returned slot, so the slot always has the effective size.
    /// A request that cannot fit the current page overflows to a freshly
    /// allocated page, unless `max_pages` is reached. Failed calls leave
    /// every page untouched.
    #[instrument(skip_all)]
    pub fn pack(
        &mut self,
        key: Option<K>,
        image: &Pixmap,
        trim: Option<Trim>,
    ) -> Result<(usize, &PackedEntry<K>)> {
        self.ensure_live()?;
        if image.format() != self.config.format {
            return Err(PixPackError::InvalidInput(format!(
                "image format {:?} does not match page format {:?}",
                image.format(),
                self.config.format
            )));
        }
        let (src_x, src_y, ew, eh) = match &trim {
            Some(t) => {
                if t.left > t.right
                    || t.top > t.bottom
                    || t.right > image.width()
                    || t.bottom > image.height()
                {
                    return Err(PixPackError::InvalidInput(format!(
                        "trim region {},{}..{},{} outside the {}x{} source",
                        t.left,
                        t.top,
                        t.right,
                        t.bottom,
                        image.width(),
                        image.height()
                    )));
                }
                (t.left, t.top, t.width(), t.height())
            }
            None => (0, 0, image.width(), image.height()),
        };
        if ew == 0 || eh == 0 {
            return Err(PixPackError::InvalidInput(
                "cannot pack an empty region".into(),
            ));
        }
        let padded_w = ew + self.config.padding;
        let padded_h = eh + self.config.padding;
        if padded_w > self.config.page_width || padded_h > self.config.page_height {
            return Err(PixPackError::InvalidInput(format!(
                "{ew}x{eh} plus padding {} can never fit a {}x{} page",
                self.config.padding, self.config.page_width, self.config.page_height
            )));
        }

        let mut placed: Option<(usize, Rect)> = None;
        let page_count = self.pages.len();
        if page_count > 0 {
            if let Some(rect) = self.pages[page_count - 1].surface.pack(padded_w, padded_h)? {
                placed = Some((page_count - 1, rect));
            }
        }
        let (page_index, rect) = match placed {
            Some(p) => p,
            None => {
                if self.config.max_pages > 0 && page_count >= self.config.max_pages as usize {
                    return Err(PixPackError::PageLimit {
                        max_pages: self.config.max_pages,
                    });
                }
                let mut page = AtlasPage::new(&self.config)?;
                let rect = page.surface.pack(padded_w, padded_h)?.ok_or_else(|| {
                    PixPackError::InvalidInput(format!(
                        "{padded_w}x{padded_h} does not fit an empty page"
                    ))
                })?;
                debug!(
                    page = page_count,
                    width = self.config.page_width,
                    height = self.config.page_height,
                    "allocated atlas page"
                );
                self.pages.push(page);
                (page_count, rect)
            }
        };

        let slot = Rect::new(rect.x, rect.y, ew, eh);
        let page = &mut self.pages[page_index];
        blit_region(image, src_x, src_y, &mut page.pixels, slot.x, slot.y, ew, eh)?;
        trace!(
            page = page_index,
            x = slot.x,
            y = slot.y,
            w = slot.w,
            h = slot.h,
            "placed entry"
        );
        page.entries.push(PackedEntry { key, slot, trim });
        Ok((page_index, &page.entries[page.entries.len() - 1]))
    }

    /// Packing statistics across all pages.
    pub fn stats(&self) -> PackStats {
        let page_area = self.config.page_width as u64 * self.config.page_height as u64;
        let num_pages = self.pages.len();
        let mut num_entries = 0;
        let mut used_area = 0u64;
        for page in &self.pages {
            num_entries += page.entries.len();
            for entry in &page.entries {
                used_area += entry.slot.area();
            }
        }
        let total_page_area = page_area * num_pages as u64;
        let occupancy = if total_page_area > 0 {
            used_area as f64 / total_page_area as f64
        } else {
            0.0
        };
        PackStats {
            num_pages,
            num_entries,
            total_page_area,
            used_area,
            occupancy,
        }
    }

    /// Releases every page's pixel buffer and packing surface. The packer
    /// is unusable afterwards; a second call fails.
    pub fn dispose(&mut self) -> Result<()> {
        self.ensure_live()?;
        for page in &mut self.pages {
            page.surface.dispose()?;
        }
        self.pages.clear();
        self.disposed = true;
        Ok(())
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            Err(PixPackError::Disposed("pixmap packer"))
        } else {
            Ok(())
        }
    }
}
