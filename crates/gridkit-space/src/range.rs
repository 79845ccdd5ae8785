//! Lazy row-major enumeration of a grid domain.

use crate::config::GridConfig;
use crate::coord::Coord;
use std::iter::FusedIterator;

/// Every coordinate of a `width x height` domain, `y` outer and `x` inner.
///
/// A `CoordRange` is a cheap `Copy` description, not a materialised list.
/// Each call to [`into_iter`](IntoIterator::into_iter) starts a fresh pass
/// from `(0, 0)`, so the same range can drive any number of full-grid scans.
///
/// # Examples
///
/// ```
/// use gridkit_space::{Coord, GridConfig};
///
/// let range = GridConfig::new(3, 2).coords();
/// let cells: Vec<Coord> = range.into_iter().collect();
/// assert_eq!(cells.len(), 6);
/// assert_eq!(cells[0], Coord::new(0, 0));
/// assert_eq!(cells[3], Coord::new(0, 1));
/// // Restartable.
/// assert_eq!(range.into_iter().count(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordRange {
    width: u32,
    height: u32,
}

impl CoordRange {
    /// Range over `[0, width) x [0, height)`.
    ///
    /// A zero dimension yields an empty range. Coordinates are `i32`, so
    /// each axis is clamped to [`GridConfig::MAX_DIM`].
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: clamp_dim(width),
            height: clamp_dim(height),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of coordinates one pass yields.
    pub fn len(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Whether a pass yields nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `coord` is yielded by a pass.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && (coord.x as u32) < self.width
            && coord.y >= 0
            && (coord.y as u32) < self.height
    }

    /// Position of `coord` within a pass (`x + width * y`), or `None`
    /// if the range does not contain it.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.x as usize + self.width as usize * coord.y as usize)
    }

    /// Start a pass.
    pub fn iter(&self) -> Coords {
        Coords {
            next: Coord::new(0, 0),
            width: self.width,
            remaining: self.len(),
        }
    }
}

const fn clamp_dim(n: u32) -> u32 {
    if n > GridConfig::MAX_DIM {
        GridConfig::MAX_DIM
    } else {
        n
    }
}

impl IntoIterator for CoordRange {
    type Item = Coord;
    type IntoIter = Coords;

    fn into_iter(self) -> Coords {
        self.iter()
    }
}

impl IntoIterator for &CoordRange {
    type Item = Coord;
    type IntoIter = Coords;

    fn into_iter(self) -> Coords {
        self.iter()
    }
}

/// One pass over a [`CoordRange`].
#[derive(Clone, Debug)]
pub struct Coords {
    next: Coord,
    width: u32,
    remaining: usize,
}

impl Iterator for Coords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // x < width <= i32::MAX, so the increments cannot overflow
            // while coordinates remain.
            self.next.x += 1;
            if self.next.x as u32 == self.width {
                self.next.x = 0;
                self.next.y += 1;
            }
        }
        Some(current)
    }

    fn nth(&mut self, n: usize) -> Option<Coord> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        let width = self.width as usize;
        let pos = self.next.x as usize + width * self.next.y as usize + n;
        self.next = Coord::new((pos % width) as i32, (pos / width) as i32);
        self.remaining -= n;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Coords {}

impl FusedIterator for Coords {}
