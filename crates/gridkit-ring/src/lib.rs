//! Fixed-capacity ring buffer for gridkit simulations.
//!
//! [`RingBuffer`] holds a bounded sequence with O(1) push and pop at both
//! ends and O(1) positional reads, without reallocating. Typical uses are
//! sliding windows and bounded histories inside a tick loop, such as the
//! last few cells an agent visited.
//!
//! The buffer never grows. An unguarded push onto a full buffer empties
//! the logical window (see [`RingBuffer`]); the `try_push_*` variants
//! return [`RingBufferFull`] instead.
//!
//! # Threading
//!
//! No internal locking. Wrap a buffer in a `Mutex` to share it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ring;

pub use error::RingBufferFull;
pub use ring::{Iter, RingBuffer};
