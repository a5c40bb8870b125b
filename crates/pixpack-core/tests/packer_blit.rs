use image::{Rgba, RgbaImage};
use pixpack_core::prelude::*;

fn gradient(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.put_pixel(x, y, Rgba([x as u8, y as u8, 7, 255]));
        }
    }
    img
}

#[test]
fn blit_copies_trimmed_region_to_slot() {
    let src_img = gradient(8, 8);
    let trim = Trim {
        original_width: 8,
        original_height: 8,
        top: 1,
        bottom: 5,
        left: 2,
        right: 6,
    };
    let cfg = PackerConfig::builder().page_size(32, 32).build();
    let mut packer: PixmapPacker<&str> = PixmapPacker::new(cfg).expect("packer");
    let src = Pixmap::from_rgba_image(&src_img).expect("pixmap");
    let (page, slot) = {
        let (p, e) = packer.pack(Some("g"), &src, Some(trim)).expect("pack");
        (p, e.slot)
    };
    assert_eq!((slot.w, slot.h), (4, 4));
    let out = packer.pages()[page].pixels().to_rgba_image().expect("image");
    for dy in 0..4 {
        for dx in 0..4 {
            assert_eq!(
                out.get_pixel(slot.x + dx, slot.y + dy),
                src_img.get_pixel(2 + dx, 1 + dy)
            );
        }
    }
}

#[test]
fn trim_then_pack_stores_only_the_core() {
    let mut img = RgbaImage::new(10, 10);
    for y in 3..7 {
        for x in 2..9 {
            img.put_pixel(x, y, Rgba([x as u8, y as u8, 0, 255]));
        }
    }
    let src = Pixmap::from_rgba_image(&img).expect("pixmap");
    let trim = compute_trim(&src).expect("trim");
    assert_eq!((trim.left, trim.top, trim.right, trim.bottom), (2, 3, 9, 7));

    let cfg = PackerConfig::builder().page_size(16, 16).build();
    let mut packer: PixmapPacker<&str> = PixmapPacker::new(cfg).expect("packer");
    let (page, slot, stored_trim) = {
        let (p, e) = packer.pack(Some("core"), &src, Some(trim)).expect("pack");
        (p, e.slot, e.trim)
    };
    assert_eq!((slot.w, slot.h), (7, 4));
    assert_eq!(stored_trim, Some(trim));
    let out = packer.pages()[page].pixels().to_rgba_image().expect("image");
    for dy in 0..4 {
        for dx in 0..7 {
            assert_eq!(
                out.get_pixel(slot.x + dx, slot.y + dy),
                img.get_pixel(2 + dx, 3 + dy)
            );
        }
    }
    // Pixels outside the slot stay transparent.
    assert_eq!(out.get_pixel(slot.x + 7, slot.y)[3], 0);
}

#[test]
fn untrimmed_pack_copies_the_whole_image() {
    let src_img = gradient(6, 5);
    let src = Pixmap::from_rgba_image(&src_img).expect("pixmap");
    let cfg = PackerConfig::builder().page_size(16, 16).build();
    let mut packer: PixmapPacker<&str> = PixmapPacker::new(cfg).expect("packer");
    let (page, slot) = {
        let (p, e) = packer.pack(Some("full"), &src, None).expect("pack");
        (p, e.slot)
    };
    assert_eq!((slot.w, slot.h), (6, 5));
    let out = packer.pages()[page].pixels().to_rgba_image().expect("image");
    for dy in 0..5 {
        for dx in 0..6 {
            assert_eq!(
                out.get_pixel(slot.x + dx, slot.y + dy),
                src_img.get_pixel(dx, dy)
            );
        }
    }
}

#[test]
fn blit_region_respects_strides() {
    let src = Pixmap::from_rgba_image(&gradient(5, 3)).expect("src");
    let mut dst = Pixmap::new(9, 7, PixelFormat::Rgba8888).expect("dst");
    blit_region(&src, 1, 0, &mut dst, 3, 2, 4, 3).expect("blit");
    let out = dst.to_rgba_image().expect("image");
    for dy in 0..3 {
        for dx in 0..4 {
            assert_eq!(out.get_pixel(3 + dx, 2 + dy)[0], (1 + dx) as u8);
        }
    }
    // Out-of-bounds source regions are rejected.
    assert!(blit_region(&src, 3, 0, &mut dst, 0, 0, 4, 3).is_err());
    // Mismatched formats are rejected.
    let mut rgb = Pixmap::new(9, 7, PixelFormat::Rgb888).expect("dst");
    assert!(blit_region(&src, 0, 0, &mut rgb, 0, 0, 2, 2).is_err());
}
