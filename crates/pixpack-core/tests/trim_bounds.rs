use image::{Rgba, RgbaImage};
use pixpack_core::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pixmap_from(image: &RgbaImage) -> Pixmap {
    Pixmap::from_rgba_image(image).expect("pixmap")
}

fn opaque_rect(w: u32, h: u32, x0: u32, y0: u32, rw: u32, rh: u32) -> Pixmap {
    let mut img = RgbaImage::new(w, h);
    for y in y0..y0 + rh {
        for x in x0..x0 + rw {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    pixmap_from(&img)
}

/// Per-pixel reference scan: (left, top, right, bottom), exclusive ends.
fn reference_bounds(img: &RgbaImage) -> (u32, u32, u32, u32) {
    let (w, h) = img.dimensions();
    let (mut left, mut top, mut right, mut bottom) = (w, h, 0, 0);
    for y in 0..h {
        for x in 0..w {
            if img.get_pixel(x, y)[3] != 0 {
                left = left.min(x);
                top = top.min(y);
                right = right.max(x + 1);
                bottom = bottom.max(y + 1);
            }
        }
    }
    (left, top, right, bottom)
}

#[test]
fn finds_tight_bounds_of_inner_rect() {
    let trim = compute_trim(&opaque_rect(8, 8, 2, 3, 3, 3)).expect("trim");
    assert_eq!((trim.left, trim.top, trim.right, trim.bottom), (2, 3, 5, 6));
    assert_eq!((trim.width(), trim.height()), (3, 3));
    assert_eq!((trim.original_width, trim.original_height), (8, 8));
}

#[test]
fn fully_opaque_image_is_not_trimmed() {
    let trim = compute_trim(&opaque_rect(6, 4, 0, 0, 6, 4)).expect("trim");
    assert_eq!((trim.left, trim.top, trim.right, trim.bottom), (0, 0, 6, 4));
    assert!(!trim.is_empty());
}

#[test]
fn fully_transparent_image_yields_empty_region() {
    let img = Pixmap::new(4, 4, PixelFormat::Rgba8888).expect("pixmap");
    let trim = compute_trim(&img).expect("trim");
    assert_eq!(trim.top, trim.bottom);
    assert_eq!(trim.left, trim.right);
    assert!(trim.is_empty());
}

#[test]
fn rejects_non_rgba_and_tiny_inputs() {
    let rgb = Pixmap::new(8, 8, PixelFormat::Rgb888).expect("pixmap");
    assert!(matches!(compute_trim(&rgb), Err(PixPackError::InvalidInput(_))));
    let narrow = Pixmap::new(1, 8, PixelFormat::Rgba8888).expect("pixmap");
    assert!(matches!(compute_trim(&narrow), Err(PixPackError::InvalidInput(_))));
    let flat = Pixmap::new(8, 1, PixelFormat::Rgba8888).expect("pixmap");
    assert!(matches!(compute_trim(&flat), Err(PixPackError::InvalidInput(_))));
}

#[test]
fn odd_width_last_column_content() {
    let trim = compute_trim(&opaque_rect(7, 5, 6, 1, 1, 2)).expect("trim");
    assert_eq!((trim.left, trim.right), (6, 7));
    assert_eq!((trim.top, trim.bottom), (1, 3));
}

#[test]
fn odd_width_first_column_content() {
    let trim = compute_trim(&opaque_rect(7, 5, 0, 2, 1, 1)).expect("trim");
    assert_eq!((trim.left, trim.right), (0, 1));
    assert_eq!((trim.top, trim.bottom), (2, 3));
}

#[test]
fn single_pixel_in_pair_far_column() {
    // Content only at (1,1): the near column of the pair is empty, so the
    // edge advances to the far column.
    let trim = compute_trim(&opaque_rect(4, 4, 1, 1, 1, 1)).expect("trim");
    assert_eq!((trim.left, trim.right), (1, 2));
    assert_eq!((trim.top, trim.bottom), (1, 2));
}

#[test]
fn bottom_row_hit_keeps_pair_start_on_left() {
    // Content only at (1,3), the bottom row: the left edge stays at the
    // pair start even though column 0 is empty.
    let trim = compute_trim(&opaque_rect(4, 4, 1, 3, 1, 1)).expect("trim");
    assert_eq!(trim.left, 0);
    assert_eq!(trim.right, 2);
    assert_eq!((trim.top, trim.bottom), (3, 4));
}

#[test]
fn bottom_row_hit_keeps_pair_end_on_right() {
    // Mirrored case: content only at (2,3) keeps the right edge at the
    // pair end even though column 3 is empty.
    let trim = compute_trim(&opaque_rect(4, 4, 2, 3, 1, 1)).expect("trim");
    assert_eq!(trim.left, 2);
    assert_eq!(trim.right, 4);
}

#[test]
fn matches_reference_scan_away_from_bottom_row() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let w = rng.gen_range(2..24u32);
        let h = rng.gen_range(2..24u32);
        let rw = rng.gen_range(1..=w);
        let rh = rng.gen_range(1..=h - 1);
        let x0 = rng.gen_range(0..=w - rw);
        let y0 = rng.gen_range(0..=h - 1 - rh);
        let mut img = RgbaImage::new(w, h);
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                img.put_pixel(x, y, Rgba([0, 0, 0, rng.gen_range(1..=255u8)]));
            }
        }
        let trim = compute_trim(&pixmap_from(&img)).expect("trim");
        let (l, t, r, b) = reference_bounds(&img);
        assert_eq!(
            (trim.left, trim.top, trim.right, trim.bottom),
            (l, t, r, b),
            "{w}x{h} rect at {x0},{y0} size {rw}x{rh}"
        );
    }
}
