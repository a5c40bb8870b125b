//! Tight content-bounds scan over RGBA pixel data.
//!
//! Rows are tested two pixels (one 64-bit word) at a time, with both alpha
//! bytes masked in a single compare; columns are walked in pairs with a
//! full vertical scan per pair, since column neighbors are not adjacent in
//! memory. The masks depend on the host byte order because words are read
//! native-endian.

use crate::error::{PixPackError, Result};
use crate::model::Trim;
use crate::pixmap::Pixmap;

/// Alpha bytes of both pixels in an 8-byte pair read.
const PAIR_ALPHA: u64 = if cfg!(target_endian = "little") {
    0xFF00_0000_FF00_0000
} else {
    0x0000_00FF_0000_00FF
};

/// Alpha byte of the lower-address pixel within a pair.
const NEAR_ALPHA: u64 = if cfg!(target_endian = "little") {
    0x0000_0000_FF00_0000
} else {
    0x0000_00FF_0000_0000
};

/// Alpha byte of the higher-address pixel within a pair.
const FAR_ALPHA: u64 = if cfg!(target_endian = "little") {
    0xFF00_0000_0000_0000
} else {
    0x0000_0000_0000_00FF
};

/// Alpha byte of a single 4-byte pixel read.
const PIXEL_ALPHA: u32 = if cfg!(target_endian = "little") {
    0xFF00_0000
} else {
    0x0000_00FF
};

#[inline]
fn word_at(data: &[u8], index: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[index..index + 8]);
    u64::from_ne_bytes(bytes)
}

#[inline]
fn pixel_at(data: &[u8], index: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[index..index + 4]);
    u32::from_ne_bytes(bytes)
}

/// Computes the tight bounding box of non-transparent content.
///
/// Only 4-byte-per-pixel pixmaps of at least 2x2 are accepted; smaller
/// inputs cannot use the paired reads safely. A fully transparent pixmap
/// yields the empty region `top == bottom == left == right == 0`; packing
/// such a trim is rejected by
/// [`PixmapPacker::pack`](crate::packer::PixmapPacker::pack).
pub fn compute_trim(pixmap: &Pixmap) -> Result<Trim> {
    if pixmap.format().bytes_per_pixel() != 4 {
        return Err(PixPackError::InvalidInput(format!(
            "trim requires a 4-byte-per-pixel format, got {:?}",
            pixmap.format()
        )));
    }
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    if width < 2 || height < 2 {
        return Err(PixPackError::InvalidInput(format!(
            "pixmap too small to trim: {}x{}",
            pixmap.width(),
            pixmap.height()
        )));
    }
    let data = pixmap.data();

    let row_empty = |y: usize| -> bool {
        let row = y * width * 4;
        let mut x = 0;
        while x + 1 < width {
            if word_at(data, row + x * 4) & PAIR_ALPHA != 0 {
                return false;
            }
            x += 2;
        }
        if width & 1 == 1 && pixel_at(data, row + (width - 1) * 4) & PIXEL_ALPHA != 0 {
            return false;
        }
        true
    };

    let mut top = 0;
    while top < height && row_empty(top) {
        top += 1;
    }
    if top == height {
        // No content at all.
        return Ok(Trim {
            original_width: pixmap.width(),
            original_height: pixmap.height(),
            top: 0,
            bottom: 0,
            left: 0,
            right: 0,
        });
    }
    let mut bottom = height;
    while bottom > top + 1 && row_empty(bottom - 1) {
        bottom -= 1;
    }

    let col_empty_from = |x: usize, from_row: usize| -> bool {
        for y in from_row..height {
            if pixel_at(data, (y * width + x) * 4) & PIXEL_ALPHA != 0 {
                return false;
            }
        }
        true
    };

    let last_row = height - 1;

    let mut left = 0;
    let mut found_left = false;
    'left: while left + 1 < width {
        for y in 0..height {
            let pair = word_at(data, (y * width + left) * 4);
            if pair & PAIR_ALPHA != 0 {
                // The near column owns the edge unless it is empty from
                // this row down; a hit on the bottom row never advances.
                if pair & NEAR_ALPHA == 0 && y != last_row && col_empty_from(left, y) {
                    left += 1;
                }
                found_left = true;
                break 'left;
            }
        }
        left += 2;
    }
    if !found_left && left + 1 == width && col_empty_from(left, 0) {
        // Odd width: the pair walk never saw the final column.
        left = width;
    }

    let mut right = width;
    let mut found_right = false;
    'right: while right >= 2 {
        let pair_x = right - 2;
        for y in 0..height {
            let pair = word_at(data, (y * width + pair_x) * 4);
            if pair & PAIR_ALPHA != 0 {
                if pair & FAR_ALPHA == 0 && y != last_row && col_empty_from(pair_x + 1, y) {
                    right -= 1;
                }
                found_right = true;
                break 'right;
            }
        }
        right -= 2;
    }
    if !found_right && right == 1 && col_empty_from(0, 0) {
        // Odd width: the pair walk never saw the first column.
        right = 0;
    }

    Ok(Trim {
        original_width: pixmap.width(),
        original_height: pixmap.height(),
        top: top as u32,
        bottom: bottom as u32,
        left: left as u32,
        right: right as u32,
    })
}
