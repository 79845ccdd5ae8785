//! Dense row-major 2D storage addressed by [`Coord`].

use crate::config::GridConfig;
use crate::coord::Coord;
use crate::error::SpaceError;
use crate::range::CoordRange;
use std::ops::{Index, IndexMut};

/// A fixed-size `width x height` grid of `T`.
///
/// Cells live in one contiguous buffer in row-major order: the cell at
/// `(x, y)` is stored at `x + width * y`. The size never changes after
/// construction. Cloning copies every cell; clones share nothing.
///
/// Indexing with `grid[coord]` panics if `coord` lies outside the grid,
/// so callers are expected to test [`contains`](Self::contains) (or use
/// [`get`](Self::get)) when a coordinate may have stepped off the edge.
///
/// # Examples
///
/// ```
/// use gridkit_space::{Coord, Dir, Grid};
///
/// let mut grid = Grid::new(30, 30, 0u8).unwrap();
/// let start = Coord::new(5, 5);
/// grid[start] = 7;
/// grid[start + Dir::Right] = 1;
/// assert_eq!(grid.iter().filter(|&&v| v == 0).count(), 898);
/// assert_eq!(grid.get(Coord::new(30, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Box<[T]>,
    config: GridConfig,
}

// Compile-time assertion: Grid is Send + Sync when its cells are.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Grid<u8>>();
};

impl<T> Grid<T> {
    /// Create a grid with every cell set to a clone of `init`.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32, init: T) -> Result<Self, SpaceError>
    where
        T: Clone,
    {
        Self::with_config(&GridConfig::new(width, height), init)
    }

    /// Create a grid sized by `config`, every cell a clone of `init`.
    pub fn with_config(config: &GridConfig, init: T) -> Result<Self, SpaceError>
    where
        T: Clone,
    {
        config.validate()?;
        Ok(Self {
            cells: vec![init; config.cell_count()].into_boxed_slice(),
            config: *config,
        })
    }

    /// Create a grid whose cell at `coord` is `f(coord)`.
    ///
    /// `f` is called once per cell in row-major order.
    pub fn from_fn(
        width: u32,
        height: u32,
        f: impl FnMut(Coord) -> T,
    ) -> Result<Self, SpaceError> {
        let config = GridConfig::new(width, height);
        config.validate()?;
        Ok(Self {
            cells: config.coords().into_iter().map(f).collect(),
            config,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// The dimensions this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        self.config.contains(coord)
    }

    fn offset(&self, coord: Coord) -> Option<usize> {
        if !self.config.contains(coord) {
            return None;
        }
        Some(coord.x as usize + self.config.width as usize * coord.y as usize)
    }

    fn offset_or_panic(&self, coord: Coord) -> usize {
        match self.offset(coord) {
            Some(i) => i,
            None => panic!(
                "{}",
                SpaceError::CoordOutOfBounds {
                    coord,
                    bounds: self.config.bounds(),
                }
            ),
        }
    }

    /// The cell at `coord`, or `None` if it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.offset(coord).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `coord`, or `None` if it lies outside.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.offset(coord).map(move |i| &mut self.cells[i])
    }

    /// Replace the cell at `coord`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn set(&mut self, coord: Coord, value: T) -> T {
        let i = self.offset_or_panic(coord);
        std::mem::replace(&mut self.cells[i], value)
    }

    /// Replace the cell at `coord`, returning the previous value, or
    /// `Err(SpaceError::CoordOutOfBounds)` without touching the grid.
    pub fn try_set(&mut self, coord: Coord, value: T) -> Result<T, SpaceError> {
        let i = self
            .offset(coord)
            .ok_or_else(|| SpaceError::CoordOutOfBounds {
                coord,
                bounds: self.config.bounds(),
            })?;
        Ok(std::mem::replace(&mut self.cells[i], value))
    }

    /// Set every cell to a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Cells in row-major storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Mutable cells in row-major storage order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.config.coords().into_iter().zip(self.cells.iter())
    }

    /// Every coordinate of this grid, row-major.
    pub fn coords(&self) -> CoordRange {
        self.config.coords()
    }

    /// The backing buffer, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// The backing buffer, row-major, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.cells[self.offset_or_panic(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let i = self.offset_or_panic(coord);
        &mut self.cells[i]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_vec().into_iter()
    }
}
