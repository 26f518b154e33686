//! Boundary tracer.
//!
//! Walks one connected component of edge pixels with an iterative
//! depth-first search, rendering every pixel as it is first visited.
//!
//! The visiting order is fixed: neighbors are examined orthogonal-first,
//! clockwise from north (see [`NEIGHBORS_8_ORTHO_FIRST`]), and pushed in
//! reverse so the LIFO stack pops them in that order. The dash phase of a
//! pixel is its traversal index, so the order decides the output bit for bit.
//!
//! Trace records live in a per-contour arena and refer to their predecessor
//! by index. A stack entry is a fresh record, so the same coordinate may be
//! pending several times with different predecessors.

use rustc_hash::FxHashSet;

use crate::basics::{PointI, NEIGHBORS_8_ORTHO_FIRST};
use crate::cancel::CancelToken;
use crate::color::Rgba8;
use crate::dash::DashPattern;
use crate::pixel_renderer::PixelRenderer;
use crate::pixfmt_rgba::PixelFormat;
use crate::selection::Selection;

// ============================================================================
// Trace records
// ============================================================================

/// Handle of a [`TracePixel`] in the tracer's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceIndex(usize);

/// One step of a contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracePixel {
    pub point: PointI,
    /// Drawn (`true`) or a dash gap. Records start out filled and get their
    /// real state when visited.
    pub filled: bool,
    /// Pixel this one was reached from. Set when the record is pushed, and
    /// at most once more to link the start pixel to the pixel that
    /// rediscovers it.
    pub prev: Option<TraceIndex>,
}

impl TracePixel {
    fn new(point: PointI, prev: Option<TraceIndex>) -> Self {
        Self {
            point,
            filled: true,
            prev,
        }
    }
}

// ============================================================================
// VisitedSet
// ============================================================================

/// Coordinates already consumed by a render pass, either traced or skipped
/// by the start-pixel scan.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    pixels: FxHashSet<PointI>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, p: PointI) -> bool {
        self.pixels.contains(&p)
    }

    /// Mark `p` visited. Returns `false` if it already was.
    #[inline]
    pub fn mark(&mut self, p: PointI) -> bool {
        self.pixels.insert(p)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointI> + '_ {
        self.pixels.iter()
    }
}

// ============================================================================
// BoundaryTracer
// ============================================================================

/// How a trace or a render pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStatus {
    /// The stack ran empty.
    Completed,
    /// Cancellation was observed; pending pixels were dropped.
    Stopped,
}

/// Iterative DFS contour tracer. Reuses its allocations across contours.
#[derive(Debug, Default)]
pub struct BoundaryTracer {
    arena: Vec<TracePixel>,
    stack: Vec<TraceIndex>,
    contour: Vec<PointI>,
}

impl BoundaryTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixels emitted by the last call to [`trace`](Self::trace), in
    /// traversal order.
    pub fn contour(&self) -> &[PointI] {
        &self.contour
    }

    #[inline]
    fn alloc(&mut self, point: PointI, prev: Option<TraceIndex>) -> TraceIndex {
        let idx = TraceIndex(self.arena.len());
        self.arena.push(TracePixel::new(point, prev));
        idx
    }

    #[inline]
    fn get(&self, idx: TraceIndex) -> &TracePixel {
        &self.arena[idx.0]
    }

    /// Trace the contour through `start`, which must be an unvisited edge
    /// pixel. Cancellation is polled once per popped pixel.
    pub fn trace<PF, C>(
        &mut self,
        start: PointI,
        selection: &Selection,
        dash: &DashPattern,
        visited: &mut VisitedSet,
        renderer: &mut PixelRenderer<'_, PF>,
        cancel: &C,
    ) -> TraceStatus
    where
        PF: PixelFormat<ColorType = Rgba8>,
        C: CancelToken + ?Sized,
    {
        self.arena.clear();
        self.stack.clear();
        self.contour.clear();

        let root = self.alloc(start, None);
        self.stack.push(root);

        let mut step = 0usize;
        while let Some(cur) = self.stack.pop() {
            if cancel.is_cancel_requested() {
                return TraceStatus::Stopped;
            }

            let point = self.get(cur).point;
            if visited.contains(point) {
                self.link_rediscovered(cur, renderer);
                continue;
            }

            visited.mark(point);
            self.arena[cur.0].filled = dash.is_filled(step);
            self.render(cur, renderer);
            self.contour.push(point);

            for &dir in NEIGHBORS_8_ORTHO_FIRST.iter().rev() {
                let Some(n) = point.checked_offset(dir) else {
                    continue;
                };
                if !visited.contains(n) && selection.is_edge_pixel(n.x, n.y) {
                    let idx = self.alloc(n, Some(cur));
                    self.stack.push(idx);
                }
            }

            step += 1;
        }

        TraceStatus::Completed
    }

    /// `cur` is a stale stack entry for an already visited pixel. If the
    /// pixel that pushed it has no predecessor (the start pixel), link it
    /// back to `cur` and draw the closing segment.
    fn link_rediscovered<PF>(&mut self, cur: TraceIndex, renderer: &mut PixelRenderer<'_, PF>)
    where
        PF: PixelFormat<ColorType = Rgba8>,
    {
        let Some(prev) = self.get(cur).prev else {
            return;
        };
        if self.get(prev).prev.is_none() {
            self.arena[prev.0].prev = Some(cur);
            self.render(prev, renderer);
        }
    }

    fn render<PF>(&self, idx: TraceIndex, renderer: &mut PixelRenderer<'_, PF>) -> bool
    where
        PF: PixelFormat<ColorType = Rgba8>,
    {
        let pixel = self.get(idx);
        let prev = pixel.prev.map(|p| self.get(p));
        renderer.render(pixel, prev)
    }
}

// ============================================================================
// Tests
// ============================================================================
