//! Render pass driver.
//!
//! Alternates between the start-pixel scanner and the boundary tracer until
//! the selection is exhausted or cancellation is requested. One pass owns one
//! [`VisitedSet`]; nothing carries over between passes.

use log::{debug, trace};

use crate::basics::PointI;
use crate::cancel::CancelToken;
use crate::color::Rgba8;
use crate::config::OutlineConfig;
use crate::dash::DashPattern;
use crate::output_region::OutputRegion;
use crate::pixel_renderer::PixelRenderer;
use crate::pixfmt_rgba::PixelFormat;
use crate::scanner::StartingPixelScanner;
use crate::selection::Selection;
use crate::tracer::{BoundaryTracer, TraceStatus, VisitedSet};

/// How a render pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Completed,
    Stopped,
}

/// Summary of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    pub status: RenderStatus,
    /// Contours started, including one cut short by cancellation.
    pub contours: usize,
    /// Pixels emitted by the tracer, corner pixels not included.
    pub traced_pixels: usize,
}

/// One outline render pass, steppable contour by contour.
pub struct OutlinePass<'a, PF, C>
where
    PF: PixelFormat<ColorType = Rgba8>,
    C: CancelToken + ?Sized,
{
    selection: &'a Selection,
    dash: DashPattern,
    renderer: PixelRenderer<'a, PF>,
    cancel: &'a C,
    scanner: StartingPixelScanner,
    tracer: BoundaryTracer,
    visited: VisitedSet,
    contours: usize,
    traced_pixels: usize,
    stopped: bool,
}

impl<'a, PF, C> OutlinePass<'a, PF, C>
where
    PF: PixelFormat<ColorType = Rgba8>,
    C: CancelToken + ?Sized,
{
    pub fn new(
        selection: &'a Selection,
        config: &OutlineConfig,
        output: &'a mut OutputRegion<PF>,
        cancel: &'a C,
    ) -> Self {
        let dash = *config.dash();
        Self {
            selection,
            dash,
            renderer: PixelRenderer::new(output, selection, config.color(), &dash),
            cancel,
            scanner: StartingPixelScanner::new(),
            tracer: BoundaryTracer::new(),
            visited: VisitedSet::new(),
            contours: 0,
            traced_pixels: 0,
            stopped: false,
        }
    }

    /// Find the next start pixel and trace its contour.
    ///
    /// Returns `None` once the selection is exhausted or the pass has been
    /// stopped; a cancellation seen while scanning also ends up here.
    pub fn trace_next(&mut self) -> Option<TraceStatus> {
        if self.stopped {
            return None;
        }
        let Some(start) = self
            .scanner
            .next_start(self.selection, &mut self.visited, self.cancel)
        else {
            if self.scanner.is_stopped() {
                self.stop();
            }
            return None;
        };

        let status = self.tracer.trace(
            start,
            self.selection,
            &self.dash,
            &mut self.visited,
            &mut self.renderer,
            self.cancel,
        );
        let len = self.tracer.contour().len();
        self.contours += 1;
        self.traced_pixels += len;
        trace!(
            "contour {} from ({}, {}): {} pixels",
            self.contours,
            start.x,
            start.y,
            len
        );

        if status == TraceStatus::Stopped {
            self.stop();
        }
        Some(status)
    }

    fn stop(&mut self) {
        self.stopped = true;
        debug!(
            "outline pass cancelled after {} contours, {} pixels",
            self.contours, self.traced_pixels
        );
    }

    /// Pixels of the most recent contour, in traversal order.
    pub fn last_contour(&self) -> &[PointI] {
        self.tracer.contour()
    }

    /// Pixels consumed so far by tracing or scanning.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Outcome of the pass so far.
    pub fn outcome(&self) -> RenderOutcome {
        RenderOutcome {
            status: if self.stopped {
                RenderStatus::Stopped
            } else {
                RenderStatus::Completed
            },
            contours: self.contours,
            traced_pixels: self.traced_pixels,
        }
    }

    /// Trace every remaining contour.
    pub fn run(mut self) -> RenderOutcome {
        while self.trace_next().is_some() {}
        let outcome = self.outcome();
        debug!(
            "outline pass {:?}: {} contours, {} pixels over {} regions ({} selected)",
            outcome.status,
            outcome.contours,
            outcome.traced_pixels,
            self.selection.rois().len(),
            self.selection.area()
        );
        outcome
    }
}

/// Draw the outline of `selection` into `output`.
///
/// The pass stops early when `cancel` asks it to; pixels already written
/// stay written and the outcome reports [`RenderStatus::Stopped`].
pub fn render_outline<PF, C>(
    selection: &Selection,
    config: &OutlineConfig,
    output: &mut OutputRegion<PF>,
    cancel: &C,
) -> RenderOutcome
where
    PF: PixelFormat<ColorType = Rgba8>,
    C: CancelToken + ?Sized,
{
    OutlinePass::new(selection, config, output, cancel).run()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::RectI;
    use crate::cancel::NeverCancel;
    use crate::pixfmt_rgba::PixfmtBgra32;
    use crate::rendering_buffer::RowAccessor;
    use core::sync::atomic::AtomicBool;

    fn region(buf: &mut [u8], w: u32, h: u32) -> OutputRegion<PixfmtBgra32<'_>> {
        let ra = RowAccessor::new(buf, w, h, (w * 4) as i32, 4).unwrap();
        let pf = PixfmtBgra32::new(ra).unwrap();
        OutputRegion::new(pf, RectI::new(0, 0, w as i32 - 1, h as i32 - 1))
    }

    #[test]
    fn test_rectangle_outline() {
        let sel = Selection::new([RectI::new(1, 1, 4, 3)]);
        let mut buf = vec![0u8; 6 * 5 * 4];
        let mut out = region(&mut buf, 6, 5);
        let config = OutlineConfig::solid(Rgba8::new_opaque(10, 20, 30));
        let outcome = render_outline(&sel, &config, &mut out, &NeverCancel);
        assert_eq!(
            outcome,
            RenderOutcome {
                status: RenderStatus::Completed,
                contours: 1,
                traced_pixels: 10,
            }
        );
        assert_eq!(out.pixel(1, 1), Some(Rgba8::new_opaque(10, 20, 30)));
        assert_eq!(out.pixel(4, 3), Some(Rgba8::new_opaque(10, 20, 30)));
        // Interior and outside untouched.
        assert_eq!(out.pixel(2, 2), Some(Rgba8::TRANSPARENT));
        assert_eq!(out.pixel(0, 0), Some(Rgba8::TRANSPARENT));
        // BGRA byte order in memory.
        let i = (6 + 1) * 4;
        assert_eq!(&buf[i..i + 4], &[30, 20, 10, 255]);
    }

    #[test]
    fn test_step_by_contour() {
        let sel = Selection::new([RectI::new(0, 0, 2, 0), RectI::new(0, 2, 2, 2)]);
        let mut buf = vec![0u8; 3 * 3 * 4];
        let mut out = region(&mut buf, 3, 3);
        let config = OutlineConfig::default();
        let mut pass = OutlinePass::new(&sel, &config, &mut out, &NeverCancel);

        assert_eq!(pass.trace_next(), Some(TraceStatus::Completed));
        assert_eq!(
            pass.last_contour(),
            &[PointI::new(0, 0), PointI::new(1, 0), PointI::new(2, 0)]
        );
        assert_eq!(pass.trace_next(), Some(TraceStatus::Completed));
        assert_eq!(pass.last_contour()[0], PointI::new(0, 2));
        assert_eq!(pass.trace_next(), None);
        assert_eq!(pass.visited().len(), 6);

        let outcome = pass.run();
        assert_eq!(outcome.status, RenderStatus::Completed);
        assert_eq!(outcome.contours, 2);
        assert_eq!(outcome.traced_pixels, 6);
    }

    #[test]
    fn test_empty_selection() {
        let sel = Selection::default();
        let mut buf = vec![7u8; 2 * 2 * 4];
        let mut out = region(&mut buf, 2, 2);
        let outcome = render_outline(&sel, &OutlineConfig::default(), &mut out, &NeverCancel);
        assert_eq!(outcome.status, RenderStatus::Completed);
        assert_eq!(outcome.contours, 0);
        assert!(buf.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_cancelled_before_start() {
        let sel = Selection::new([RectI::new(0, 0, 1, 1)]);
        let mut buf = vec![7u8; 2 * 2 * 4];
        let mut out = region(&mut buf, 2, 2);
        let flag = AtomicBool::new(true);
        let mut pass = OutlinePass::new(&sel, &OutlineConfig::default(), &mut out, &flag);
        assert_eq!(pass.trace_next(), None);
        assert_eq!(pass.trace_next(), None);
        let outcome = pass.outcome();
        assert_eq!(outcome.status, RenderStatus::Stopped);
        assert_eq!(outcome.contours, 0);
        drop(pass);
        assert!(buf.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_output_offset_from_selection() {
        // Buffer covers selection-space x 10..=13, y 20..=22.
        let sel = Selection::new([RectI::new(10, 20, 13, 22)]);
        let mut buf = vec![0u8; 4 * 3 * 4];
        let ra = RowAccessor::new(&mut buf, 4, 3, 16, 4).unwrap();
        let pf = PixfmtBgra32::new(ra).unwrap();
        let mut out = OutputRegion::new(pf, RectI::new(10, 20, 13, 22));
        let config = OutlineConfig::solid(Rgba8::new_opaque(255, 255, 255));
        let outcome = render_outline(&sel, &config, &mut out, &NeverCancel);
        assert_eq!(outcome.traced_pixels, 10);
        assert_eq!(out.ren().pixel(0, 0), Rgba8::new_opaque(255, 255, 255));
        assert_eq!(out.ren().pixel(1, 1), Rgba8::TRANSPARENT);
    }
}
