//! Color type and component orders.
//!
//! The outline only ever writes two colors, the configured outline color and
//! fully transparent black, so this module keeps just the 8-bit RGBA color and
//! the byte orders a host buffer may use.

// ============================================================================
// Component orders (for pixel format layer)
// ============================================================================

/// Byte positions of the four channels inside one 32-bit pixel.
pub trait ComponentOrder {
    const R: usize;
    const G: usize;
    const B: usize;
    const A: usize;
}

/// RGBA component order: R=0, G=1, B=2, A=3
pub struct OrderRgba;
impl ComponentOrder for OrderRgba {
    const R: usize = 0;
    const G: usize = 1;
    const B: usize = 2;
    const A: usize = 3;
}

/// BGRA component order: B=0, G=1, R=2, A=3
pub struct OrderBgra;
impl ComponentOrder for OrderBgra {
    const B: usize = 0;
    const G: usize = 1;
    const R: usize = 2;
    const A: usize = 3;
}

// ============================================================================
// Rgba8
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = 255;

    /// Fully transparent black, written for the gaps of a dashed outline.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    /// Opaque color from a packed `0xRRGGBB` value; bits above 24 are ignored.
    pub const fn from_packed_rgb(rgb: u32) -> Self {
        Self::new_opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK
    }
}

// ============================================================================
// Tests
// ============================================================================
