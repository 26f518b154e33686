//! Selection geometry and edge queries.
//!
//! A selection is an ordered list of non-overlapping rectangles, row-major
//! within each, covering every selected pixel. The order is significant: it
//! is the order in which start pixels are searched for, so it decides which
//! contour is traced first and where each contour starts.

use crate::basics::{unite_rectangles, PointI, RectI, NEIGHBORS_4};

/// Ordered rectangle-list selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    rois: Vec<RectI>,
    bounds: Option<RectI>,
}

impl Selection {
    /// Selection from rectangles in scan order. Empty rectangles are dropped.
    pub fn new<I>(rois: I) -> Self
    where
        I: IntoIterator<Item = RectI>,
    {
        let rois: Vec<RectI> = rois.into_iter().filter(RectI::is_valid).collect();
        let bounds = rois
            .iter()
            .copied()
            .reduce(|acc, r| unite_rectangles(&acc, &r));
        Self { rois, bounds }
    }

    /// Selection from a row-major boolean mask of `width` × `height` pixels
    /// anchored at (0, 0). Each horizontal run of selected pixels becomes one
    /// single-row rectangle, rows top to bottom, runs left to right.
    ///
    /// Missing mask entries (a mask shorter than `width * height`) count as
    /// unselected.
    pub fn from_mask(width: u32, height: u32, mask: &[bool]) -> Self {
        let w = width as usize;
        let mut rois = Vec::new();
        for y in 0..height as usize {
            let start = (y * w).min(mask.len());
            let end = ((y + 1) * w).min(mask.len());
            let row = &mask[start..end];
            let mut x = 0;
            while x < row.len() {
                if !row[x] {
                    x += 1;
                    continue;
                }
                let start = x;
                while x < row.len() && row[x] {
                    x += 1;
                }
                rois.push(RectI::new(start as i32, y as i32, x as i32 - 1, y as i32));
            }
        }
        Self::new(rois)
    }

    /// Rectangles in scan order.
    pub fn rois(&self) -> &[RectI] {
        &self.rois
    }

    pub fn is_empty(&self) -> bool {
        self.rois.is_empty()
    }

    /// Smallest rectangle containing every selected pixel.
    pub fn bounding_rect(&self) -> Option<RectI> {
        self.bounds
    }

    /// Number of selected pixels, saturating at `u64::MAX`.
    pub fn area(&self) -> u64 {
        self.rois.iter().fold(0u64, |acc, r| {
            acc.saturating_add(u64::from(r.width()) * u64::from(r.height()))
        })
    }

    /// Returns `true` if (x, y) falls inside any rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match self.bounds {
            Some(b) if b.hit_test(x, y) => self.rois.iter().any(|r| r.hit_test(x, y)),
            _ => false,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: PointI) -> bool {
        self.contains(p.x, p.y)
    }

    /// Returns `true` if (x, y) is selected and at least one of its
    /// 4-connected neighbors is not.
    pub fn is_edge_pixel(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let p = PointI::new(x, y);
        NEIGHBORS_4.iter().any(|&d| match p.checked_offset(d) {
            Some(n) => !self.contains_point(n),
            None => true,
        })
    }

    /// Number of edge pixels over the whole selection.
    pub fn edge_pixel_count(&self) -> usize {
        self.rois
            .iter()
            .map(|r| {
                (r.y1..=r.y2)
                    .flat_map(|y| (r.x1..=r.x2).map(move |x| (x, y)))
                    .filter(|&(x, y)| self.is_edge_pixel(x, y))
                    .count()
            })
            .sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> Selection {
        let w = rows[0].len() as u32;
        let bits: Vec<bool> = rows.iter().flat_map(|r| r.chars().map(|c| c == '#')).collect();
        Selection::from_mask(w, rows.len() as u32, &bits)
    }

    #[test]
    fn test_contains() {
        let sel = Selection::new([RectI::new(0, 0, 2, 1), RectI::new(5, 5, 5, 5)]);
        assert!(sel.contains(0, 0));
        assert!(sel.contains(2, 1));
        assert!(sel.contains(5, 5));
        assert!(!sel.contains(3, 0));
        assert!(!sel.contains(4, 4));
        assert!(!sel.contains(-1, 0));
    }

    #[test]
    fn test_empty_rectangles_are_dropped() {
        let sel = Selection::new([RectI::new(3, 3, 2, 2), RectI::from_xywh(0, 0, 0, 4)]);
        assert!(sel.is_empty());
        assert_eq!(sel.bounding_rect(), None);
        assert!(!sel.contains(0, 0));
    }

    #[test]
    fn test_bounding_rect_and_area() {
        let sel = Selection::new([RectI::new(1, 1, 2, 2), RectI::new(-3, 4, -3, 6)]);
        assert_eq!(sel.bounding_rect(), Some(RectI::new(-3, 1, 2, 6)));
        assert_eq!(sel.area(), 4 + 3);
    }

    #[test]
    fn test_edge_pixels_of_rectangle() {
        let sel = Selection::new([RectI::new(0, 0, 4, 3)]);
        for y in 0..=3 {
            for x in 0..=4 {
                let border = x == 0 || x == 4 || y == 0 || y == 3;
                assert_eq!(sel.is_edge_pixel(x, y), border, "({x}, {y})");
            }
        }
        assert!(!sel.is_edge_pixel(5, 0));
        assert_eq!(sel.edge_pixel_count(), 14);
    }

    #[test]
    fn test_edge_across_adjacent_rectangles() {
        // Two stacked rows behave as one 3x2 block: no internal seam.
        let sel = Selection::new([RectI::new(0, 0, 2, 0), RectI::new(0, 1, 2, 1)]);
        assert_eq!(sel.edge_pixel_count(), 6);
        let tall = Selection::new([RectI::new(0, 0, 2, 1), RectI::new(0, 2, 2, 2)]);
        assert!(!tall.is_edge_pixel(1, 1));
    }

    #[test]
    fn test_edge_pixels_at_coordinate_limits() {
        let sel = Selection::new([RectI::new(i32::MAX - 1, 0, i32::MAX, 0)]);
        assert!(sel.is_edge_pixel(i32::MAX, 0));
        assert!(sel.is_edge_pixel(i32::MAX - 1, 0));
        assert_eq!(sel.edge_pixel_count(), 2);

        let sel = Selection::new([RectI::new(i32::MIN, i32::MIN, i32::MIN + 2, i32::MIN + 2)]);
        assert!(sel.is_edge_pixel(i32::MIN, i32::MIN));
        assert!(!sel.is_edge_pixel(i32::MIN + 1, i32::MIN + 1));
        assert_eq!(sel.edge_pixel_count(), 8);
        assert_eq!(sel.area(), 9);
    }

    #[test]
    fn test_from_mask_runs() {
        let sel = mask(&["##.#", ".###"]);
        assert_eq!(
            sel.rois(),
            &[
                RectI::new(0, 0, 1, 0),
                RectI::new(3, 0, 3, 0),
                RectI::new(1, 1, 3, 1),
            ]
        );
    }

    #[test]
    fn test_from_mask_short_mask() {
        let sel = Selection::from_mask(3, 3, &[true, true]);
        assert_eq!(sel.rois(), &[RectI::new(0, 0, 1, 0)]);
    }

    #[test]
    fn test_interior_pixel_is_not_edge() {
        let sel = mask(&["###", "###", "###"]);
        assert!(!sel.is_edge_pixel(1, 1));
        assert_eq!(sel.edge_pixel_count(), 8);
    }
}
