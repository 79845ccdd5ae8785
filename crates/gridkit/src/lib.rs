//! gridkit: spatial and sequence primitives for grid-based simulations.
//!
//! This is the facade crate that re-exports the public API of the gridkit
//! sub-crates. For most users, adding `gridkit` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridkit::prelude::*;
//!
//! // A 30x30 occupancy grid and a short trail of visited cells.
//! let config = GridConfig::default();
//! let mut occupied = Grid::with_config(&config, false).unwrap();
//! let mut trail = RingBuffer::new(4);
//!
//! let mut agent = Coord::new(0, 0);
//! for step in [Dir::Right, Dir::Right, Dir::Down, Dir::Down, Dir::Left] {
//!     let next = agent + step;
//!     if !config.contains(next) {
//!         continue;
//!     }
//!     if trail.is_full() {
//!         trail.pop_front();
//!     }
//!     trail.push_back(agent);
//!     agent = next;
//!     occupied[agent] = true;
//! }
//!
//! assert_eq!(agent, Coord::new(1, 2));
//! assert_eq!(trail.len(), 3);
//! assert_eq!(direction_between(*trail.back(), agent).unwrap(), Dir::Left);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`space`] | `gridkit-space` | `Coord`, `Dir`, `GridConfig`, `CoordRange`, `Grid` |
//! | [`ring`] | `gridkit-ring` | `RingBuffer` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, domains, and dense grids (`gridkit-space`).
pub use gridkit_space as space;

/// Fixed-capacity double-ended ring buffer (`gridkit-ring`).
pub use gridkit_ring as ring;

/// Common imports for typical gridkit usage.
///
/// ```rust
/// use gridkit::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use gridkit_space::{direction_between, is_neighbor, valid, Coord, CoordRange, Dir};

    // Storage
    pub use gridkit_space::{Grid, GridConfig};
    pub use gridkit_ring::RingBuffer;

    // Errors
    pub use gridkit_ring::RingBufferFull;
    pub use gridkit_space::SpaceError;
}
