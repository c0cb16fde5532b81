//! The eight ray directions.

use super::square::Square;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 8 non-zero `(dy, dx)` steps, `dy, dx` in `{-1, 0, 1}`.
///
/// The discriminant order is row-major over `dy` then `dx`, skipping
/// `(0, 0)`; downstream tables index rays by this number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    West = 3,
    East = 4,
    SouthWest = 5,
    South = 6,
    SouthEast = 7,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The `(dy, dx)` step of this direction
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction from unit deltas; `None` for `(0, 0)`.
    #[inline]
    #[must_use]
    const fn from_deltas(dy: i32, dx: i32) -> Option<Self> {
        // 3*dy + dx + 4 maps the 3x3 neighborhood to 0..9 with (0,0) at 4;
        // closing that gap yields the direction index.
        let k = 3 * dy + dx + 4;
        match k {
            0 => Some(Direction::NorthWest),
            1 => Some(Direction::North),
            2 => Some(Direction::NorthEast),
            3 => Some(Direction::West),
            5 => Some(Direction::East),
            6 => Some(Direction::SouthWest),
            7 => Some(Direction::South),
            8 => Some(Direction::SouthEast),
            _ => None,
        }
    }

    /// The direction of the ray from `from` through `to`, or `None` when the
    /// two squares do not share a rank, file, or diagonal.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let dy = to.row() as i32 - from.row() as i32;
        let dx = to.col() as i32 - from.col() as i32;
        let aligned = (dy == 0) != (dx == 0) || (dy != 0 && dy.abs() == dx.abs());
        if !aligned {
            return None;
        }
        Self::from_deltas(dy.signum(), dx.signum())
    }
}
