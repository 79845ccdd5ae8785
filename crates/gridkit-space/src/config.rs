//! Grid domain configuration.

use crate::coord::Coord;
use crate::error::SpaceError;
use crate::range::CoordRange;
use smallvec::SmallVec;

/// Dimensions of a grid domain `[0, width) x [0, height)`.
///
/// Passed explicitly to everything that needs domain bounds, so grids of
/// different sizes can coexist. Checked by [`validate`](Self::validate)
/// before any storage is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Number of columns (`x` range).
    ///
    /// Default: 30. Must be in `1..=MAX_DIM`.
    pub width: u32,

    /// Number of rows (`y` range).
    ///
    /// Default: 30. Must be in `1..=MAX_DIM`.
    pub height: u32,
}

impl GridConfig {
    /// Default number of columns.
    pub const DEFAULT_WIDTH: u32 = 30;

    /// Default number of rows.
    pub const DEFAULT_HEIGHT: u32 = 30;

    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a config with the given dimensions. Not validated.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check the structural invariants.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`MAX_DIM`](Self::MAX_DIM),
    /// or `Err(SpaceError::CellCountOverflow)` if the cell count does not fit
    /// in `usize`.
    pub fn validate(&self) -> Result<(), SpaceError> {
        if self.width == 0 || self.height == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if self.width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max: Self::MAX_DIM,
            });
        }
        if self.height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max: Self::MAX_DIM,
            });
        }
        if (self.width as usize)
            .checked_mul(self.height as usize)
            .is_none()
        {
            return Err(SpaceError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Whether `coord` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && (coord.x as u32) < self.width
            && coord.y >= 0
            && (coord.y as u32) < self.height
    }

    /// Human-readable description of the valid range, used in error messages.
    pub fn bounds(&self) -> String {
        format!("[0, {}) x [0, {})", self.width, self.height)
    }

    /// `Ok(coord)` if it lies in the domain, otherwise
    /// [`SpaceError::CoordOutOfBounds`].
    pub fn check(&self, coord: Coord) -> Result<Coord, SpaceError> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                bounds: self.bounds(),
            })
        }
    }

    /// The cardinal neighbours of `coord` that lie inside the domain,
    /// in [`Dir::ALL`](crate::Dir::ALL) order.
    ///
    /// Corners have 2, edges 3, interior cells 4.
    pub fn in_bounds_neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        coord
            .neighbours()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Every coordinate in the domain, row-major.
    pub fn coords(&self) -> CoordRange {
        CoordRange::new(self.width, self.height)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Whether `coord` lies inside the domain described by `config`.
pub fn valid(config: &GridConfig, coord: Coord) -> bool {
    config.contains(coord)
}
