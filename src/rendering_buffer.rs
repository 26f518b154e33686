//! Rendering buffer: row-oriented access to pixel data.
//!
//! [`RowAccessor`] borrows a host byte buffer and computes row offsets on
//! demand (`start + y * stride`). Both positive strides (top-down) and
//! negative strides (bottom-up, e.g. BMP layout) are supported.

use crate::error::{OutlineError, Result};

// ============================================================================
// RowAccessor
// ============================================================================

/// Row accessor over a borrowed byte buffer.
#[derive(Debug)]
pub struct RowAccessor<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
    stride: i32,
    bytes_per_pixel: u32,
}

impl<'a> RowAccessor<'a> {
    /// Attach to `buf`, a `width` × `height` image whose rows are `stride`
    /// bytes apart and hold `bytes_per_pixel` bytes per pixel.
    ///
    /// A negative stride means row 0 is the last row in memory.
    pub fn new(
        buf: &'a mut [u8],
        width: u32,
        height: u32,
        stride: i32,
        bytes_per_pixel: u32,
    ) -> Result<Self> {
        let row_bytes = width as usize * bytes_per_pixel as usize;
        if (stride.unsigned_abs() as usize) < row_bytes {
            return Err(OutlineError::InvalidStride { stride, width });
        }
        let expected = if height == 0 {
            0
        } else {
            (height as usize - 1) * stride.unsigned_abs() as usize + row_bytes
        };
        if buf.len() < expected {
            return Err(OutlineError::BufferTooSmall {
                expected,
                actual: buf.len(),
            });
        }
        Ok(Self {
            buf,
            width,
            height,
            stride,
            bytes_per_pixel,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn stride_abs(&self) -> u32 {
        self.stride.unsigned_abs()
    }

    /// Pixel size the stride and buffer length were validated against.
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    /// Byte offset of the first byte of row `y`.
    #[inline]
    fn row_offset(&self, y: u32) -> usize {
        let abs = self.stride_abs() as usize;
        if self.stride < 0 {
            (self.height - 1 - y) as usize * abs
        } else {
            y as usize * abs
        }
    }

    /// Length of a row slice: the full stride, or what is left of the buffer
    /// for the last row in memory.
    #[inline]
    fn row_len(&self, offset: usize) -> usize {
        (self.stride_abs() as usize).min(self.buf.len() - offset)
    }

    /// Immutable slice for row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let off = self.row_offset(y);
        &self.buf[off..off + self.row_len(off)]
    }

    /// Mutable slice for row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let off = self.row_offset(y);
        let len = self.row_len(off);
        &mut self.buf[off..off + len]
    }
}

// ============================================================================
// Tests
// ============================================================================
