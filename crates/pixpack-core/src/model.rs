use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }

    /// Returns true if the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x + self.w <= other.x
            || other.x + other.w <= self.x
            || self.y + self.h <= other.y
            || other.y + other.h <= self.y)
    }
}

/// Tight bounding box of non-transparent content within a source image.
///
/// `top`/`left` are the first non-empty row/column; `bottom`/`right` are
/// exclusive ends of the non-empty region, so a fully opaque image keeps
/// `top = 0, left = 0, bottom = original_height, right = original_width`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trim {
    pub original_width: u32,
    pub original_height: u32,
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Trim {
    /// Width of the retained region (`right - left`).
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the retained region (`bottom - top`).
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when no non-transparent content was found.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// One packed image: caller-supplied key, placement within its page, and
/// the trim metadata it was packed with (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedEntry<K = String> {
    pub key: Option<K>,
    pub slot: Rect,
    pub trim: Option<Trim>,
}

/// Statistics about atlas packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    pub num_pages: usize,
    pub num_entries: usize,
    /// Sum of page width * height over all pages.
    pub total_page_area: u64,
    /// Sum of slot width * height over all entries.
    pub used_area: u64,
    /// used_area / total_page_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl PackStats {
    pub fn wasted_area(&self) -> u64 {
        self.total_page_area.saturating_sub(self.used_area)
    }
}
