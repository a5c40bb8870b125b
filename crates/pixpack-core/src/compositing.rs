use crate::error::{PixPackError, Result};
use crate::pixmap::Pixmap;

/// Copies a `width x height` region from `src` at `(src_x, src_y)` into
/// `dst` at `(dst_x, dst_y)`, row by row. Source and destination keep
/// their own row strides; formats must match.
pub fn blit_region(
    src: &Pixmap,
    src_x: u32,
    src_y: u32,
    dst: &mut Pixmap,
    dst_x: u32,
    dst_y: u32,
    width: u32,
    height: u32,
) -> Result<()> {
    if src.format() != dst.format() {
        return Err(PixPackError::InvalidInput(format!(
            "cannot blit {:?} into {:?}",
            src.format(),
            dst.format()
        )));
    }
    if src_x as u64 + width as u64 > src.width() as u64
        || src_y as u64 + height as u64 > src.height() as u64
    {
        return Err(PixPackError::InvalidInput(format!(
            "source region {src_x},{src_y} {width}x{height} exceeds {}x{}",
            src.width(),
            src.height()
        )));
    }
    if dst_x as u64 + width as u64 > dst.width() as u64
        || dst_y as u64 + height as u64 > dst.height() as u64
    {
        return Err(PixPackError::InvalidInput(format!(
            "destination region {dst_x},{dst_y} {width}x{height} exceeds {}x{}",
            dst.width(),
            dst.height()
        )));
    }
    if width == 0 || height == 0 {
        return Ok(());
    }
    let bpp = src.format().bytes_per_pixel() as usize;
    let src_stride = src.stride();
    let dst_stride = dst.stride();
    let row_len = width as usize * bpp;
    let src_data = src.data();
    let dst_data = dst.data_mut();
    for row in 0..height as usize {
        let s = (src_y as usize + row) * src_stride + src_x as usize * bpp;
        let d = (dst_y as usize + row) * dst_stride + dst_x as usize * bpp;
        dst_data[d..d + row_len].copy_from_slice(&src_data[s..s + row_len]);
    }
    Ok(())
}
