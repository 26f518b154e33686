//! # pixel-outline
//!
//! Pixel-exact outline ("marching ants") rendering for rectangle-list
//! selections.
//!
//! Given a selection made of rectangles, the crate finds every edge pixel
//! (a selected pixel with an unselected 4-neighbor), follows the 8-connected
//! boundary contours with a deterministic depth-first trace, and writes a
//! solid or dashed one-pixel outline into a 32-bit RGBA or BGRA buffer.
//!
//! ## Architecture
//!
//! A render pass runs in four stages:
//!
//! 1. **Scanner** walks the selection rectangles for the next unclaimed
//!    edge pixel
//! 2. **Tracer** follows that pixel's contour, orthogonal neighbors first
//! 3. **Dash pattern** decides per traversal step whether a pixel is drawn
//! 4. **Pixel renderer** writes the pixel, plus a corner pixel on diagonal
//!    steps, through a clipped [`OutputRegion`]
//!
//! ```
//! use pixel_outline::{
//!     render_outline, NeverCancel, OutlineConfig, OutputRegion, PixfmtBgra32, RectI,
//!     RowAccessor, Selection,
//! };
//!
//! let selection = Selection::new([RectI::new(2, 2, 13, 9)]);
//! let mut buf = vec![0u8; 16 * 12 * 4];
//! let rbuf = RowAccessor::new(&mut buf, 16, 12, 16 * 4, 4)?;
//! let mut output = OutputRegion::with_origin(PixfmtBgra32::new(rbuf)?, Default::default());
//! let outcome = render_outline(&selection, &OutlineConfig::default(), &mut output, &NeverCancel);
//! assert_eq!(outcome.contours, 1);
//! # Ok::<(), pixel_outline::OutlineError>(())
//! ```

// Foundation types
pub mod basics;
pub mod color;
pub mod error;

// Buffers & pixel formats
pub mod output_region;
pub mod pixfmt_rgba;
pub mod rendering_buffer;

// Selection & configuration
pub mod cancel;
pub mod config;
pub mod dash;
pub mod selection;

// Tracing & rendering
pub mod outline;
pub mod pixel_renderer;
pub mod scanner;
pub mod tracer;

pub use basics::{PointI, RectI};
pub use cancel::{CancelFn, CancelToken, NeverCancel};
pub use color::Rgba8;
pub use config::OutlineConfig;
pub use dash::DashPattern;
pub use error::{OutlineError, Result};
pub use outline::{render_outline, OutlinePass, RenderOutcome, RenderStatus};
pub use output_region::OutputRegion;
pub use pixfmt_rgba::{PixelFormat, PixfmtBgra32, PixfmtRgba32};
pub use rendering_buffer::RowAccessor;
pub use selection::Selection;
pub use tracer::{TraceStatus, VisitedSet};
