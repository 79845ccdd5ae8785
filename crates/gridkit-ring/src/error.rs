//! Error type for guarded ring buffer pushes.

use std::error::Error;
use std::fmt;

/// A guarded push was rejected because the ring was full.
///
/// Carries the rejected value back to the caller.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RingBufferFull<T>(pub T);

impl<T> RingBufferFull<T> {
    /// Recover the value that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Hand-written so `T` need not be `Debug` to debug-print the error.
impl<T> fmt::Debug for RingBufferFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RingBufferFull(..)")
    }
}

impl<T> fmt::Display for RingBufferFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring buffer full")
    }
}

impl<T> Error for RingBufferFull<T> {}
