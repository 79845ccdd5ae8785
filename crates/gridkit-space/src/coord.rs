//! Cell coordinates and the four cardinal directions.
//!
//! [`Coord`] and [`Dir`] form a small algebra: `coord + dir` takes one step,
//! `-dir` reverses a step, and [`direction_between`] recovers the step that
//! joins two adjacent cells. Stepping never validates; check the result
//! against a [`GridConfig`](crate::GridConfig) before indexing.

use crate::error::SpaceError;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

/// A cardinal direction on the grid.
///
/// `Up` decreases `y`, `Down` increases `y`, `Left` decreases `x` and
/// `Right` increases `x`, matching row-major screen layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    /// Towards `y - 1`.
    Up,
    /// Towards `y + 1`.
    Down,
    /// Towards `x - 1`.
    Left,
    /// Towards `x + 1`.
    Right,
}

impl Dir {
    /// Every direction, in declaration order.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// The opposite direction. `d.invert().invert() == d` for every `d`.
    pub fn invert(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// The unit step `(dx, dy)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    /// Single-letter code used by [`Display`](fmt::Display).
    pub fn as_char(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }
}

impl Neg for Dir {
    type Output = Dir;

    fn neg(self) -> Dir {
        self.invert()
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when parsing a [`Dir`] from anything but `u`, `d`, `l` or `r`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirError {
    input: String,
}

impl fmt::Display for ParseDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction {:?}, expected one of u, d, l, r", self.input)
    }
}

impl std::error::Error for ParseDirError {}

impl FromStr for Dir {
    type Err = ParseDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u" => Ok(Dir::Up),
            "d" => Ok(Dir::Down),
            "l" => Ok(Dir::Left),
            "r" => Ok(Dir::Right),
            _ => Err(ParseDirError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A cell address `(x, y)`.
///
/// Ordering is row-major (`y` first, then `x`), so a sorted list of
/// coordinates matches [`CoordRange`](crate::CoordRange) enumeration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cells one step away, in [`Dir::ALL`] order.
    ///
    /// Results are not bounds-checked; see
    /// [`GridConfig::in_bounds_neighbours`](crate::GridConfig::in_bounds_neighbours).
    pub fn neighbours(self) -> [Coord; 4] {
        Dir::ALL.map(|d| self + d)
    }

    /// Manhattan (L1) distance, saturating at `u32::MAX`.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Whether `other` is exactly one cardinal step away.
    pub fn is_neighbor(self, other: Coord) -> bool {
        is_neighbor(self, other)
    }

    /// The direction `d` such that `self + d == to`.
    ///
    /// See [`direction_between`].
    pub fn direction_to(self, to: Coord) -> Result<Dir, SpaceError> {
        direction_between(self, to)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// One step in `dir`. No clamping or validation: stepping past
/// `i32::MAX` or `i32::MIN` wraps, the same in every build profile.
impl Add<Dir> for Coord {
    type Output = Coord;

    fn add(self, dir: Dir) -> Coord {
        let (dx, dy) = dir.offset();
        Coord::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl AddAssign<Dir> for Coord {
    fn add_assign(&mut self, dir: Dir) {
        *self = *self + dir;
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The direction `d` such that `from + d == to`.
///
/// Returns [`SpaceError::NotAdjacent`] when the two coordinates are equal,
/// diagonal, or more than one step apart. Path reconstruction relies on this
/// failing rather than guessing.
///
/// # Examples
///
/// ```
/// use gridkit_space::{direction_between, Coord, Dir};
///
/// let a = Coord::new(3, 3);
/// assert_eq!(direction_between(a, a + Dir::Left).unwrap(), Dir::Left);
/// assert!(direction_between(a, Coord::new(4, 4)).is_err());
/// ```
pub fn direction_between(from: Coord, to: Coord) -> Result<Dir, SpaceError> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    match (dx, dy) {
        (0, -1) => Ok(Dir::Up),
        (0, 1) => Ok(Dir::Down),
        (-1, 0) => Ok(Dir::Left),
        (1, 0) => Ok(Dir::Right),
        _ => Err(SpaceError::NotAdjacent { from, to }),
    }
}

/// Whether `a` and `b` differ by exactly 1 in exactly one axis.
pub fn is_neighbor(a: Coord, b: Coord) -> bool {
    match (a.x == b.x, a.y == b.y) {
        (true, false) => a.y.abs_diff(b.y) == 1,
        (false, true) => a.x.abs_diff(b.x) == 1,
        _ => false,
    }
}
