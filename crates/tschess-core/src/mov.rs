//! Move text representation.

use crate::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing move text such as `"e2 e4"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move: expected 5 characters, got {0}")]
    WrongLength(usize),

    #[error("invalid move: '{0}' is not a square between a1 and h8")]
    InvalidSquare(String),

    #[error("invalid move: squares must be separated by a single space")]
    MissingSeparator,
}

/// A requested move from one square to another.
///
/// The text form is `<file><rank> <file><rank>`, case-insensitive, with
/// exactly one separating space. No whitespace is trimmed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a move between two squares.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parses move text, accepting exactly `^[a-h][1-8] [a-h][1-8]$`
    /// after lowercasing.
    pub fn parse(s: &str) -> Result<Self, MoveParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(MoveParseError::WrongLength(chars.len()));
        }
        if chars[2] != ' ' {
            return Err(MoveParseError::MissingSeparator);
        }
        let square = |file: char, rank: char| {
            Square::from_chars(file, rank)
                .ok_or_else(|| MoveParseError::InvalidSquare(format!("{}{}", file, rank)))
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[3], chars[4])?;
        Ok(Move::new(from, to))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}
