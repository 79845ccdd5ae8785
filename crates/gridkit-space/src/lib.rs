//! Grid geometry and dense grid storage for gridkit simulations.
//!
//! This crate defines the coordinate algebra that agents move through and
//! the container that holds per-cell state:
//!
//! - [`Coord`] and [`Dir`]: cell addresses and the four cardinal steps,
//!   with [`direction_between`] and [`is_neighbor`] for adjacency.
//! - [`GridConfig`]: the `width x height` domain, threaded explicitly to
//!   everything that needs bounds. Defaults to 30 x 30.
//! - [`CoordRange`]: lazy, restartable row-major enumeration of a domain.
//! - [`Grid`]: dense row-major storage indexed by [`Coord`].
//!
//! # Threading
//!
//! Nothing here locks. Every value is independently owned; share a
//! [`Grid`] across threads by wrapping it in your own `Mutex` or `RwLock`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod range;

pub use config::{valid, GridConfig};
pub use coord::{direction_between, is_neighbor, Coord, Dir, ParseDirError};
pub use error::SpaceError;
pub use grid::Grid;
pub use range::{CoordRange, Coords};
