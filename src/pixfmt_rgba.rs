//! 32-bit RGBA pixel formats.
//!
//! Pixel format that reads and writes 4-byte pixels in a configurable
//! component order. Outlines are aliased, so pixels are only ever copied,
//! never blended.
//!
//! Provides the `PixelFormat` trait and the `PixfmtRgba32` / `PixfmtBgra32`
//! concrete formats.

use core::marker::PhantomData;

use crate::color::{ComponentOrder, OrderBgra, OrderRgba, Rgba8};
use crate::error::{OutlineError, Result};
use crate::rendering_buffer::RowAccessor;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that can store colors in a rendering buffer.
///
/// This is the abstraction layer between the renderer and the raw pixel
/// data. Coordinates are buffer coordinates and must be in range; clipping
/// is the job of [`OutputRegion`](crate::output_region::OutputRegion).
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Copy (overwrite) a single pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Self::ColorType);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Self::ColorType;
}

// ============================================================================
// PixfmtRgba: 8 bits per channel, any component order
// ============================================================================

const BPP: usize = 4; // bytes per pixel

/// Pixel format for 4-byte pixels with component order `O`.
pub struct PixfmtRgba<'a, O: ComponentOrder> {
    rbuf: RowAccessor<'a>,
    order: PhantomData<O>,
}

/// R, G, B, A byte order.
pub type PixfmtRgba32<'a> = PixfmtRgba<'a, OrderRgba>;
/// B, G, R, A byte order (the usual layout of Windows host bitmaps).
pub type PixfmtBgra32<'a> = PixfmtRgba<'a, OrderBgra>;

impl<'a, O: ComponentOrder> PixfmtRgba<'a, O> {
    /// Bytes per pixel, for sizing the [`RowAccessor`].
    pub const BYTES_PER_PIXEL: u32 = BPP as u32;

    /// Wrap `rbuf`, which must have been validated for 4-byte pixels.
    pub fn new(rbuf: RowAccessor<'a>) -> Result<Self> {
        if rbuf.bytes_per_pixel() != Self::BYTES_PER_PIXEL {
            return Err(OutlineError::PixelSizeMismatch {
                expected: Self::BYTES_PER_PIXEL,
                actual: rbuf.bytes_per_pixel(),
            });
        }
        Ok(Self {
            rbuf,
            order: PhantomData,
        })
    }

    /// Clear the entire buffer to a solid color.
    pub fn clear(&mut self, c: &Rgba8) {
        let w = self.rbuf.width() as usize;
        for y in 0..self.rbuf.height() {
            let row = self.rbuf.row_slice_mut(y);
            for px in row[..w * BPP].chunks_exact_mut(BPP) {
                Self::store(px, c);
            }
        }
    }

    #[inline]
    fn store(p: &mut [u8], c: &Rgba8) {
        p[O::R] = c.r;
        p[O::G] = c.g;
        p[O::B] = c.b;
        p[O::A] = c.a;
    }
}

impl<'a, O: ComponentOrder> PixelFormat for PixfmtRgba<'a, O> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let row = self.rbuf.row_slice(y as u32);
        let off = x as usize * BPP;
        let p = &row[off..off + BPP];
        Rgba8::new(p[O::R], p[O::G], p[O::B], p[O::A])
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let off = x as usize * BPP;
        Self::store(&mut row[off..off + BPP], c);
    }
}

// ============================================================================
// Tests
// ============================================================================
