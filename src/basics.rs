//! Foundation types: points, rectangles, and neighbor tables.
//!
//! Rectangles use inclusive corners (`x1..=x2`, `y1..=y2`), so a rectangle
//! with `x1 > x2` or `y1 > y2` is empty. Every other module addresses pixels
//! through these types.

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
///
/// Equality and hashing are by value, so two points with the same
/// coordinates are the same pixel for visitation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Integer pixel coordinate.
pub type PointI = PointBase<i32>;

impl PointI {
    /// The point shifted by `(dx, dy)`, or `None` if that leaves the `i32`
    /// coordinate range.
    #[inline]
    pub fn checked_offset(self, (dx, dy): (i32, i32)) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two inclusive corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.is_valid()
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    #[inline]
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Compute the union (bounding box) of two rectangles.
pub fn unite_rectangles<T: Copy + PartialOrd>(r1: &Rect<T>, r2: &Rect<T>) -> Rect<T> {
    let mut r = *r1;
    if r.x2 < r2.x2 {
        r.x2 = r2.x2;
    }
    if r.y2 < r2.y2 {
        r.y2 = r2.y2;
    }
    if r.x1 > r2.x1 {
        r.x1 = r2.x1;
    }
    if r.y1 > r2.y1 {
        r.y1 = r2.y1;
    }
    r
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;

impl RectI {
    /// Rectangle from an origin and a size. A zero width or height gives an
    /// empty (invalid) rectangle. The far edge saturates at `i32::MAX`.
    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::new(1, 1, 0, 0);
        }
        Self::new(x, y, span_end(x, width), span_end(y, height))
    }

    /// Width in pixels (0 for an empty rectangle), saturating at `u32::MAX`.
    pub fn width(&self) -> u32 {
        if self.is_valid() {
            span_len(self.x1, self.x2)
        } else {
            0
        }
    }

    /// Height in pixels (0 for an empty rectangle).
    pub fn height(&self) -> u32 {
        if self.is_valid() {
            span_len(self.y1, self.y2)
        } else {
            0
        }
    }

    #[inline]
    pub fn contains(&self, p: PointI) -> bool {
        self.hit_test(p.x, p.y)
    }
}

/// Last coordinate of a run of `len > 0` pixels starting at `start`.
#[inline]
fn span_end(start: i32, len: u32) -> i32 {
    i32::try_from(i64::from(start) + i64::from(len) - 1).unwrap_or(i32::MAX)
}

/// Pixel count of the inclusive run `start..=end`, `start <= end`.
#[inline]
fn span_len(start: i32, end: i32) -> u32 {
    u32::try_from(i64::from(end) - i64::from(start) + 1).unwrap_or(u32::MAX)
}

// ============================================================================
// Neighbor tables
// ============================================================================

/// 8-connectivity, orthogonal directions first, each group clockwise from
/// north: N, E, S, W, NE, SE, SW, NW. Y grows downward.
pub const NEIGHBORS_8_ORTHO_FIRST: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// 4-connectivity, clockwise from east.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

// ============================================================================
// Tests
// ============================================================================
