use crate::error::{PixPackError, Result};
use crate::model::Rect;

#[derive(Clone, Copy, Debug)]
struct SkylineNode {
    x: u32,
    y: u32,
    w: u32,
}

/// Fixed-size packing surface backed by a bottom-left skyline.
///
/// Placement is greedy and online: requests are placed in the order they
/// arrive and never moved afterwards, so callers wanting a tight fill
/// should pre-sort their inputs, typically by descending height.
pub struct RectPacker {
    width: u32,
    height: u32,
    skyline: Vec<SkylineNode>,
    disposed: bool,
}

impl RectPacker {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PixPackError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            skyline: vec![SkylineNode {
                x: 0,
                y: 0,
                w: width,
            }],
            disposed: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Attempts to place a `w x h` rectangle in unused space.
    ///
    /// Returns `Ok(None)` when no remaining region can hold it; the
    /// surface is left unchanged in that case.
    pub fn pack(&mut self, w: u32, h: u32) -> Result<Option<Rect>> {
        self.ensure_live()?;
        if w == 0 || h == 0 {
            return Err(PixPackError::InvalidInput(format!(
                "cannot pack a degenerate {w}x{h} rectangle"
            )));
        }
        let Some((index, rect)) = self.find_bottom_left(w, h) else {
            return Ok(None);
        };
        self.split(index, &rect);
        self.merge();
        Ok(Some(rect))
    }

    /// Releases the skyline storage. Every later operation fails.
    pub fn dispose(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.skyline = Vec::new();
        self.disposed = true;
        Ok(())
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            Err(PixPackError::Disposed("packing surface"))
        } else {
            Ok(())
        }
    }

    /// Lowest y at which a `w x h` rectangle fits when left-aligned with
    /// node `i`, spanning as many following nodes as its width needs.
    fn fit_at(&self, mut i: usize, w: u32, h: u32) -> Option<Rect> {
        let mut rect = Rect::new(self.skyline[i].x, 0, w, h);
        if rect.x.saturating_add(w) > self.width {
            return None;
        }
        let mut width_left = w;
        loop {
            rect.y = rect.y.max(self.skyline[i].y);
            if rect.y.saturating_add(h) > self.height {
                return None;
            }
            if self.skyline[i].w >= width_left {
                return Some(rect);
            }
            width_left -= self.skyline[i].w;
            i += 1;
            if i >= self.skyline.len() {
                return None;
            }
        }
    }

    fn find_bottom_left(&self, w: u32, h: u32) -> Option<(usize, Rect)> {
        let mut best_bottom = u32::MAX;
        let mut best_width = u32::MAX;
        let mut best: Option<(usize, Rect)> = None;
        for i in 0..self.skyline.len() {
            if let Some(r) = self.fit_at(i, w, h) {
                let bottom = r.y + r.h;
                if bottom < best_bottom || (bottom == best_bottom && self.skyline[i].w < best_width)
                {
                    best_bottom = bottom;
                    best_width = self.skyline[i].w;
                    best = Some((i, r));
                }
            }
        }
        best
    }

    fn split(&mut self, index: usize, rect: &Rect) {
        self.skyline.insert(
            index,
            SkylineNode {
                x: rect.x,
                y: rect.y + rect.h,
                w: rect.w,
            },
        );
        // Nodes shadowed by the new one shrink or disappear.
        let i = index + 1;
        while i < self.skyline.len() {
            let covered = self.skyline[i - 1].x + self.skyline[i - 1].w;
            if self.skyline[i].x >= covered {
                break;
            }
            let shrink = covered - self.skyline[i].x;
            if self.skyline[i].w <= shrink {
                self.skyline.remove(i);
            } else {
                self.skyline[i].x += shrink;
                self.skyline[i].w -= shrink;
                break;
            }
        }
    }

    fn merge(&mut self) {
        let mut i = 1;
        while i < self.skyline.len() {
            if self.skyline[i - 1].y == self.skyline[i].y {
                let w = self.skyline[i].w;
                self.skyline[i - 1].w += w;
                self.skyline.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
