//! Outline configuration.
//!
//! An [`OutlineConfig`] is validated when it is built and stays immutable for
//! a whole render pass, so the tracer never meets an out-of-range dash
//! parameter.

use crate::color::Rgba8;
use crate::dash::{DashPattern, DASH_OFFSET_RANGE, DASH_SEGMENT_RANGE};
use crate::error::{OutlineError, Result};

/// Color, dash flag and dash parameters of an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawOutlineConfig", into = "RawOutlineConfig")
)]
pub struct OutlineConfig {
    color: Rgba8,
    dash: DashPattern,
}

impl OutlineConfig {
    pub const DEFAULT_COLOR: Rgba8 = Rgba8::new_opaque(255, 0, 0);
    pub const DEFAULT_DASH_OFFSET: u32 = 1;
    pub const DEFAULT_DASH_LENGTH: u32 = 2;
    pub const DEFAULT_DASH_GAP: u32 = 1;

    /// Validated configuration. The color is written as given; its alpha is
    /// not forced to opaque.
    pub fn new(
        color: Rgba8,
        dashed: bool,
        dash_offset: u32,
        dash_length: u32,
        dash_gap: u32,
    ) -> Result<Self> {
        if !DASH_OFFSET_RANGE.contains(&dash_offset) {
            return Err(OutlineError::DashOffsetOutOfRange(dash_offset));
        }
        if !DASH_SEGMENT_RANGE.contains(&dash_length) {
            return Err(OutlineError::DashLengthOutOfRange(dash_length));
        }
        if !DASH_SEGMENT_RANGE.contains(&dash_gap) {
            return Err(OutlineError::DashGapOutOfRange(dash_gap));
        }
        Ok(Self {
            color,
            dash: DashPattern::from_parts(dashed, dash_offset, dash_length, dash_gap),
        })
    }

    /// Configuration with every dash parameter clamped into range.
    pub fn clamped(
        color: Rgba8,
        dashed: bool,
        dash_offset: u32,
        dash_length: u32,
        dash_gap: u32,
    ) -> Self {
        let seg = |v: u32| v.clamp(*DASH_SEGMENT_RANGE.start(), *DASH_SEGMENT_RANGE.end());
        Self {
            color,
            dash: DashPattern::from_parts(
                dashed,
                dash_offset.min(*DASH_OFFSET_RANGE.end()),
                seg(dash_length),
                seg(dash_gap),
            ),
        }
    }

    /// Validated configuration with an opaque color given as `0xRRGGBB`.
    pub fn from_packed_rgb(
        rgb: u32,
        dashed: bool,
        dash_offset: u32,
        dash_length: u32,
        dash_gap: u32,
    ) -> Result<Self> {
        if rgb > 0xFF_FFFF {
            return Err(OutlineError::ColorOutOfRange(rgb));
        }
        Self::new(
            Rgba8::from_packed_rgb(rgb),
            dashed,
            dash_offset,
            dash_length,
            dash_gap,
        )
    }

    /// Solid (undashed) outline with the default segment parameters, which
    /// keep diagonal corner-fill enabled.
    pub fn solid(color: Rgba8) -> Self {
        Self {
            color,
            dash: DashPattern::from_parts(
                false,
                Self::DEFAULT_DASH_OFFSET,
                Self::DEFAULT_DASH_LENGTH,
                Self::DEFAULT_DASH_GAP,
            ),
        }
    }

    pub fn color(&self) -> Rgba8 {
        self.color
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_dashed()
    }

    pub fn dash_offset(&self) -> u32 {
        self.dash.offset()
    }

    pub fn dash_length(&self) -> u32 {
        self.dash.length()
    }

    pub fn dash_gap(&self) -> u32 {
        self.dash.gap()
    }

    pub fn dash(&self) -> &DashPattern {
        &self.dash
    }
}

impl Default for OutlineConfig {
    /// Opaque red, dashed, offset 1, length 2, gap 1.
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR,
            dash: DashPattern::from_parts(
                true,
                Self::DEFAULT_DASH_OFFSET,
                Self::DEFAULT_DASH_LENGTH,
                Self::DEFAULT_DASH_GAP,
            ),
        }
    }
}

/// Flat, unvalidated form used for (de)serialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawOutlineConfig {
    color: Rgba8,
    dashed: bool,
    dash_offset: u32,
    dash_length: u32,
    dash_gap: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOutlineConfig> for OutlineConfig {
    type Error = OutlineError;

    fn try_from(raw: RawOutlineConfig) -> Result<Self> {
        Self::new(
            raw.color,
            raw.dashed,
            raw.dash_offset,
            raw.dash_length,
            raw.dash_gap,
        )
    }
}

#[cfg(feature = "serde")]
impl From<OutlineConfig> for RawOutlineConfig {
    fn from(c: OutlineConfig) -> Self {
        Self {
            color: c.color,
            dashed: c.is_dashed(),
            dash_offset: c.dash_offset(),
            dash_length: c.dash_length(),
            dash_gap: c.dash_gap(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
