//! Board coordinate representation.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::CoordinateError;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i8 = 8;

/// A position on the board, or a relative offset between two positions.
///
/// Files and ranks are both indexed 0-7 when the coordinate is a square.
/// Offsets use the same type and may be negative; arithmetic is componentwise
/// and saturating, so a far off-board coordinate stays off the board instead
/// of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    /// Creates a coordinate from file and rank.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coordinate { file, rank }
    }

    /// Multiplies both components by `factor`, saturating at the `i8` range.
    #[inline]
    pub const fn scale(self, factor: i8) -> Self {
        Coordinate::new(
            self.file.saturating_mul(factor),
            self.rank.saturating_mul(factor),
        )
    }

    /// Divides both components by `divisor`, truncating toward zero.
    /// Saturates at the `i8` range.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub const fn divide(self, divisor: i8) -> Self {
        Coordinate::new(
            self.file.saturating_div(divisor),
            self.rank.saturating_div(divisor),
        )
    }

    /// Returns true if either axis lies outside 0-7.
    #[inline]
    pub const fn is_out_of_bounds(self) -> bool {
        self.file < 0 || self.file >= BOARD_SIZE || self.rank < 0 || self.rank >= BOARD_SIZE
    }

    /// Returns true if this coordinate names a square on the board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        !self.is_out_of_bounds()
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(
            self.file.saturating_add(rhs.file),
            self.rank.saturating_add(rhs.rank),
        )
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(
            self.file.saturating_sub(rhs.file),
            self.rank.saturating_sub(rhs.rank),
        )
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn neg(self) -> Coordinate {
        Coordinate::new(self.file.saturating_neg(), self.rank.saturating_neg())
    }
}

impl Mul<i8> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn mul(self, rhs: i8) -> Coordinate {
        self.scale(rhs)
    }
}

impl Div<i8> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn div(self, rhs: i8) -> Coordinate {
        self.divide(rhs)
    }
}

impl From<(i8, i8)> for Coordinate {
    fn from((file, rank): (i8, i8)) -> Self {
        Coordinate::new(file, rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// Parses a board square written as two indices, e.g. `"4 1"`, `"4,1"` or `"(4, 1)"`.
impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(CoordinateError::WrongComponentCount(parts.len()));
        }

        let parse = |part: &str| {
            part.parse::<i8>()
                .map_err(|_| CoordinateError::InvalidNumber(part.to_string()))
        };
        let coordinate = Coordinate::new(parse(parts[0])?, parse(parts[1])?);

        if coordinate.is_out_of_bounds() {
            return Err(CoordinateError::OutOfBounds(coordinate));
        }
        Ok(coordinate)
    }
}
