//! Board square representation.

use std::fmt;

/// A file (column) on the board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a'..='h' => File::from_index(c.to_ascii_lowercase() as u8 - b'a'),
            _ => None,
        }
    }

    /// Returns the index (0-7), which is also the internal column.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank on the board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Returns the internal row of this rank (rank 8 is row 0).
    #[inline]
    pub const fn row(self) -> u8 {
        7 - self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board in internal coordinates, indexed 0-63.
///
/// Squares are indexed row-major from the top of the rendered board:
/// - a8 = 0 (row 0, col 0), b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank, applying the row inversion.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.row() * 8 + file.index())
    }

    /// Creates a square from internal coordinates.
    ///
    /// Returns `None` when either coordinate is outside 0-7, which makes this
    /// the bounds filter for every generated destination.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square(row as u8 * 8 + col as u8))
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from a file character and a rank character.
    pub const fn from_chars(file: char, rank: char) -> Option<Self> {
        let file = match File::from_char(file) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(rank) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Parses a square from algebraic notation (e.g., "e4" or "E4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        Square::from_chars(bytes[0] as char, bytes[1] as char)
    }

    /// Converts internal coordinates straight to algebraic notation.
    ///
    /// Out-of-range coordinates give `None` instead of a square name.
    pub fn coords_to_algebraic(row: i8, col: i8) -> Option<String> {
        Square::from_coords(row, col).map(Square::to_algebraic)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the internal row (0 is rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the internal column (0 is file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.col()) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(7 - self.row()) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the square shifted by `(dr, dc)`, or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Square::from_coords(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    // Common squares
    pub const A8: Square = Square(0);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
