//! Bounds-checked, offset-translated output view.
//!
//! Wraps a pixel format with a clip rectangle expressed in selection space
//! and an origin that maps selection space onto buffer space, so the tracer
//! can write by selection coordinates directly. Writes outside the bounds are
//! dropped, never reported as errors.

use crate::basics::{PointI, RectI};
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// OutputRegion
// ============================================================================

/// Output view that clips every write to `bounds` before delegating to the
/// underlying pixel format at `(x - origin.x, y - origin.y)`.
pub struct OutputRegion<PF: PixelFormat> {
    ren: PF,
    origin: PointI,
    clip_box: RectI,
}

impl<PF: PixelFormat> OutputRegion<PF> {
    /// View whose buffer pixel (0, 0) sits at `bounds.x1, bounds.y1` in
    /// selection space. The bounds are intersected with the buffer extent;
    /// if nothing is left, every write is dropped.
    pub fn new(ren: PF, bounds: RectI) -> Self {
        let origin = PointI::new(bounds.x1, bounds.y1);
        Self::with_bounds(ren, origin, bounds)
    }

    /// View over the whole buffer with buffer pixel (0, 0) at `origin`.
    pub fn with_origin(ren: PF, origin: PointI) -> Self {
        let bounds = RectI::from_xywh(origin.x, origin.y, ren.width(), ren.height());
        Self::with_bounds(ren, origin, bounds)
    }

    /// View with buffer pixel (0, 0) at `origin`, writable only inside
    /// `bounds` (further intersected with the buffer extent).
    pub fn with_bounds(ren: PF, origin: PointI, bounds: RectI) -> Self {
        let mut region = Self {
            ren,
            origin,
            clip_box: bounds,
        };
        region.clip_to_buffer();
        region
    }

    fn clip_to_buffer(&mut self) {
        let mut cb = self.clip_box;
        cb.normalize();
        let extent = RectI::from_xywh(
            self.origin.x,
            self.origin.y,
            self.ren.width(),
            self.ren.height(),
        );
        if cb.clip(&extent) {
            self.clip_box = cb;
        } else {
            self.clip_box = RectI::new(1, 1, 0, 0);
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }

    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    /// Writable rectangle in selection space.
    pub fn bounds(&self) -> &RectI {
        &self.clip_box
    }

    pub fn origin(&self) -> PointI {
        self.origin
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.hit_test(x, y)
    }

    /// Get a reference to the underlying pixel format.
    pub fn ren(&self) -> &PF {
        &self.ren
    }

    /// Get a mutable reference to the underlying pixel format.
    pub fn ren_mut(&mut self) -> &mut PF {
        &mut self.ren
    }

    /// Copy a single pixel. Returns `false` (and writes nothing) when (x, y)
    /// is outside the bounds.
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: &PF::ColorType) -> bool {
        if !self.inbox(x, y) {
            return false;
        }
        self.ren.copy_pixel(x - self.origin.x, y - self.origin.y, c);
        true
    }

    /// Get the pixel at (x, y), or `None` if outside the bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<PF::ColorType> {
        if self.inbox(x, y) {
            Some(self.ren.pixel(x - self.origin.x, y - self.origin.y))
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::pixfmt_rgba::PixfmtRgba32;
    use crate::rendering_buffer::RowAccessor;

    const RED: Rgba8 = Rgba8::new_opaque(255, 0, 0);

    fn make_buffer(w: u32, h: u32) -> Vec<u8> {
        vec![0u8; (w * h * 4) as usize]
    }

    #[test]
    fn test_offset_translation() {
        let mut buf = make_buffer(4, 4);
        {
            let ra = RowAccessor::new(&mut buf, 4, 4, 16, 4).unwrap();
            let pf = PixfmtRgba32::new(ra).unwrap();
            let mut out = OutputRegion::new(pf, RectI::new(10, 20, 13, 23));
            assert_eq!(out.origin(), PointI::new(10, 20));
            assert!(out.copy_pixel(11, 22, &RED));
            assert_eq!(out.pixel(11, 22), Some(RED));
            assert_eq!(out.ren().pixel(1, 2), RED);
        }
        let off = (2 * 4 + 1) * 4;
        assert_eq!(&buf[off..off + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut buf = make_buffer(4, 4);
        {
            let ra = RowAccessor::new(&mut buf, 4, 4, 16, 4).unwrap();
            let mut out = OutputRegion::new(PixfmtRgba32::new(ra).unwrap(), RectI::new(0, 0, 3, 3));
            assert!(!out.copy_pixel(-1, 0, &RED));
            assert!(!out.copy_pixel(4, 0, &RED));
            assert!(!out.copy_pixel(0, 4, &RED));
            assert_eq!(out.pixel(4, 4), None);
        }
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bounds_clipped_to_buffer() {
        let mut buf = make_buffer(4, 4);
        let ra = RowAccessor::new(&mut buf, 4, 4, 16, 4).unwrap();
        let out = OutputRegion::new(PixfmtRgba32::new(ra).unwrap(), RectI::new(5, 5, 100, 100));
        assert_eq!(*out.bounds(), RectI::new(5, 5, 8, 8));
        assert!(out.inbox(8, 8));
        assert!(!out.inbox(9, 8));
    }

    #[test]
    fn test_with_origin_covers_whole_buffer() {
        let mut buf = make_buffer(3, 2);
        let ra = RowAccessor::new(&mut buf, 3, 2, 12, 4).unwrap();
        let out = OutputRegion::with_origin(PixfmtRgba32::new(ra).unwrap(), PointI::new(-1, -1));
        assert_eq!(*out.bounds(), RectI::new(-1, -1, 1, 0));
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn test_with_origin_near_coordinate_limit() {
        let mut buf = make_buffer(4, 2);
        let ra = RowAccessor::new(&mut buf, 4, 2, 16, 4).unwrap();
        let pf = PixfmtRgba32::new(ra).unwrap();
        let mut out = OutputRegion::with_origin(pf, PointI::new(i32::MAX - 1, 0));
        assert_eq!(*out.bounds(), RectI::new(i32::MAX - 1, 0, i32::MAX, 1));
        assert!(out.copy_pixel(i32::MAX, 1, &RED));
        assert_eq!(out.ren().pixel(1, 1), RED);
        assert_eq!(out.ren().pixel(2, 1), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_with_bounds_restricts_writes() {
        let mut buf = make_buffer(4, 4);
        let ra = RowAccessor::new(&mut buf, 4, 4, 16, 4).unwrap();
        let pf = PixfmtRgba32::new(ra).unwrap();
        let mut out = OutputRegion::with_bounds(pf, PointI::new(0, 0), RectI::new(1, 1, 2, 2));
        assert!(!out.copy_pixel(0, 0, &RED));
        assert!(out.copy_pixel(2, 2, &RED));
        assert_eq!(out.ren().pixel(2, 2), RED);

        // The wrapped format itself is not clipped.
        out.ren_mut().clear(&Rgba8::TRANSPARENT);
        assert_eq!(out.ren().pixel(2, 2), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_empty_bounds_drop_everything() {
        let mut buf = make_buffer(0, 0);
        let ra = RowAccessor::new(&mut buf, 0, 0, 0, 4).unwrap();
        let mut out = OutputRegion::new(PixfmtRgba32::new(ra).unwrap(), RectI::new(0, 0, 3, 3));
        assert!(!out.bounds().is_valid());
        assert!(!out.copy_pixel(0, 0, &RED));
    }
}
