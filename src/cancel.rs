//! Cooperative cancellation.
//!
//! A render pass polls its [`CancelToken`] before every scanned coordinate and
//! before every traced pixel. Observing a cancellation ends the pass early;
//! pixels written up to that point stay written.

use core::sync::atomic::{AtomicBool, Ordering};

/// Source of cancellation requests, polled by the render pass.
pub trait CancelToken {
    fn is_cancel_requested(&self) -> bool;
}

/// Token that never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancel_requested(&self) -> bool {
        false
    }
}

/// A flag another thread (typically the host UI) may raise.
impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancel_requested(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Adapts any `Fn() -> bool` into a token.
#[derive(Debug, Clone, Copy)]
pub struct CancelFn<F>(pub F);

impl<F: Fn() -> bool> CancelToken for CancelFn<F> {
    #[inline]
    fn is_cancel_requested(&self) -> bool {
        (self.0)()
    }
}

impl<T: CancelToken + ?Sized> CancelToken for &T {
    #[inline]
    fn is_cancel_requested(&self) -> bool {
        (**self).is_cancel_requested()
    }
}
