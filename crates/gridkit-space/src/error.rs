//! Error types for geometry and grid operations.

use crate::coord::Coord;
use std::fmt;

/// Errors arising from grid construction or coordinate queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Two coordinates are not one cardinal step apart, so no [`Dir`](crate::Dir)
    /// leads from one to the other.
    NotAdjacent {
        /// Start of the requested step.
        from: Coord,
        /// End of the requested step.
        to: Coord,
    },
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum representable by `i32` coordinates.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent { from, to } => {
                write!(f, "no direction from {from} to {to}: coordinates are not adjacent")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count {width} x {height} overflows usize")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
