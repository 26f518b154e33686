//! Dash pattern for pixel outlines.
//!
//! Unlike a vector dash generator, the phase here advances by one per traced
//! pixel, not by path length: a diagonal step moves the pattern exactly as
//! far as an orthogonal one. A pattern repeats every `length + gap` steps,
//! with the gap first; `offset` rotates the pattern.

use core::ops::RangeInclusive;

/// Accepted range of the dash offset.
pub const DASH_OFFSET_RANGE: RangeInclusive<u32> = 0..=16;
/// Accepted range of the dash segment length and gap.
pub const DASH_SEGMENT_RANGE: RangeInclusive<u32> = 1..=4;

/// Filled/gap pattern indexed by traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashPattern {
    dashed: bool,
    offset: u32,
    length: u32,
    gap: u32,
}

impl DashPattern {
    /// Pattern from raw parts. Range checks are the job of
    /// [`OutlineConfig`](crate::config::OutlineConfig); `length + gap` must be
    /// non-zero.
    pub(crate) const fn from_parts(dashed: bool, offset: u32, length: u32, gap: u32) -> Self {
        Self {
            dashed,
            offset,
            length,
            gap,
        }
    }

    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    /// Period of the pattern in steps.
    #[inline]
    pub fn period(&self) -> u32 {
        self.length + self.gap
    }

    /// Whether traversal step `step` is drawn (`true`) or left as a gap.
    /// Always `true` for a solid pattern.
    #[inline]
    pub fn is_filled(&self, step: usize) -> bool {
        if !self.dashed {
            return true;
        }
        let period = self.period() as usize;
        (step + self.offset as usize) % period >= self.gap as usize
    }

    /// Whether diagonal steps get a corner pixel. Patterns with a period of
    /// two or less are left alone, dashed or not.
    #[inline]
    pub fn bridges_corners(&self) -> bool {
        self.period() > 2
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn states(p: &DashPattern, n: usize) -> Vec<bool> {
        (0..n).map(|i| p.is_filled(i)).collect()
    }

    #[test]
    fn test_gap_comes_first() {
        let p = DashPattern::from_parts(true, 0, 2, 1);
        assert_eq!(states(&p, 6), vec![false, true, true, false, true, true]);
    }

    #[test]
    fn test_offset_rotates_pattern() {
        let p = DashPattern::from_parts(true, 1, 2, 1);
        assert_eq!(states(&p, 6), vec![true, true, false, true, true, false]);
        // A full period of offset is the identity.
        let q = DashPattern::from_parts(true, 3, 2, 1);
        assert_eq!(states(&q, 9), states(&DashPattern::from_parts(true, 0, 2, 1), 9));
    }

    #[test]
    fn test_long_gap() {
        let p = DashPattern::from_parts(true, 0, 1, 4);
        assert_eq!(
            states(&p, 10),
            vec![false, false, false, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_solid_is_always_filled() {
        let p = DashPattern::from_parts(false, 7, 1, 4);
        assert!(states(&p, 32).into_iter().all(|f| f));
    }

    #[test]
    fn test_bridges_corners() {
        assert!(!DashPattern::from_parts(true, 0, 1, 1).bridges_corners());
        assert!(!DashPattern::from_parts(false, 0, 1, 1).bridges_corners());
        assert!(DashPattern::from_parts(true, 0, 2, 1).bridges_corners());
        assert!(DashPattern::from_parts(false, 0, 1, 2).bridges_corners());
    }

    #[test]
    fn test_ranges() {
        assert!(DASH_OFFSET_RANGE.contains(&16));
        assert!(!DASH_OFFSET_RANGE.contains(&17));
        assert!(DASH_SEGMENT_RANGE.contains(&1));
        assert!(!DASH_SEGMENT_RANGE.contains(&0));
        assert!(!DASH_SEGMENT_RANGE.contains(&5));
    }
}
