//! Single-pixel outline renderer with diagonal corner-fill.
//!
//! Every traced pixel is written as the outline color when it is filled and
//! as transparent black when it falls in a dash gap. When the contour takes a
//! diagonal step between two pixels of the same state, one of the two
//! orthogonal corner pixels between them is written too, so the line stays
//! 4-connected on screen.

use crate::basics::PointI;
use crate::color::Rgba8;
use crate::dash::DashPattern;
use crate::output_region::OutputRegion;
use crate::pixfmt_rgba::PixelFormat;
use crate::selection::Selection;
use crate::tracer::TracePixel;

// ============================================================================
// PixelRenderer
// ============================================================================

/// Writes trace pixels into an [`OutputRegion`].
pub struct PixelRenderer<'a, PF: PixelFormat<ColorType = Rgba8>> {
    output: &'a mut OutputRegion<PF>,
    selection: &'a Selection,
    color: Rgba8,
    bridge_corners: bool,
}

impl<'a, PF: PixelFormat<ColorType = Rgba8>> PixelRenderer<'a, PF> {
    pub fn new(
        output: &'a mut OutputRegion<PF>,
        selection: &'a Selection,
        color: Rgba8,
        dash: &DashPattern,
    ) -> Self {
        Self {
            output,
            selection,
            color,
            bridge_corners: dash.bridges_corners(),
        }
    }

    #[inline]
    fn color_for(&self, filled: bool) -> Rgba8 {
        if filled {
            self.color
        } else {
            Rgba8::TRANSPARENT
        }
    }

    /// Render `pixel`, reached from `prev`.
    ///
    /// Returns `false` when `pixel` lies outside the output bounds; nothing
    /// is written then, not even a corner pixel.
    pub fn render(&mut self, pixel: &TracePixel, prev: Option<&TracePixel>) -> bool {
        let p = pixel.point;
        let c = self.color_for(pixel.filled);
        if !self.output.copy_pixel(p.x, p.y, &c) {
            return false;
        }

        let Some(prev) = prev else {
            return true;
        };
        if prev.filled != pixel.filled || !self.bridge_corners {
            return true;
        }

        // Diagonal step.
        if p.x != prev.point.x && p.y != prev.point.y {
            let corners = [
                PointI::new(prev.point.x, p.y),
                PointI::new(p.x, prev.point.y),
            ];
            let c = self.color_for(prev.filled);
            if let Some(corner) = corners.into_iter().find(|&q| self.can_fill(q)) {
                self.output.copy_pixel(corner.x, corner.y, &c);
            }
        }
        true
    }

    #[inline]
    fn can_fill(&self, q: PointI) -> bool {
        self.output.inbox(q.x, q.y) && self.selection.contains_point(q)
    }
}

// ============================================================================
// Tests
// ============================================================================
