//! Start-pixel scanner.
//!
//! Walks the selection rectangles in order, row by row, looking for the next
//! edge pixel no contour has claimed yet. Non-edge pixels it passes over are
//! marked visited so later scans skip them.

use crate::basics::PointI;
use crate::cancel::CancelToken;
use crate::selection::Selection;
use crate::tracer::VisitedSet;

/// Resumable scan over a selection. The region cursor only moves forward.
#[derive(Debug, Clone, Default)]
pub struct StartingPixelScanner {
    roi: usize,
    row: Option<i32>,
    stopped: bool,
}

impl StartingPixelScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last scan ended on a cancellation request.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Next unvisited edge pixel, or `None` when the selection is exhausted
    /// or cancellation was requested.
    ///
    /// The returned pixel is not marked visited; tracing it is the caller's
    /// job. Cancellation is polled before each coordinate.
    pub fn next_start<C>(
        &mut self,
        selection: &Selection,
        visited: &mut VisitedSet,
        cancel: &C,
    ) -> Option<PointI>
    where
        C: CancelToken + ?Sized,
    {
        if self.stopped {
            return None;
        }
        while let Some(r) = selection.rois().get(self.roi) {
            let first_row = self.row.unwrap_or(r.y1);
            for y in first_row..=r.y2 {
                self.row = Some(y);
                for x in r.x1..=r.x2 {
                    if cancel.is_cancel_requested() {
                        self.stopped = true;
                        return None;
                    }
                    let p = PointI::new(x, y);
                    if visited.contains(p) {
                        continue;
                    }
                    if selection.is_edge_pixel(x, y) {
                        return Some(p);
                    }
                    visited.mark(p);
                }
            }
            self.roi += 1;
            self.row = None;
        }
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
