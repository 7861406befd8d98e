//! Piece representation.

use crate::Color;
use std::fmt;

/// The six kinds of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Rook = 0,
    Knight = 1,
    Bishop = 2,
    Queen = 3,
    King = 4,
    Pawn = 5,
}

/// Knight jumps as `(row, col)` deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (2, -1),
    (-2, -1),
];

/// North, south, east, west.
const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

/// How a piece kind produces candidate destinations.
///
/// Every kind maps to exactly one rule; see [`Piece::move_rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    /// Jumps to each `(row, col)` offset that stays on the board.
    /// Occupancy of the landing square is not considered.
    Leaper(&'static [(i8, i8)]),
    /// Walks each `(row, col)` ray until blocked.
    Slider(&'static [(i8, i8)]),
    /// One step forward, or two from the starting row.
    Pawn,
    /// Never moves.
    Immobile,
}

impl Piece {
    /// All piece kinds, in back-rank declaration order.
    pub const ALL: [Piece; 6] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Pawn,
    ];

    /// The back rank from file a to file h.
    pub const BACK_RANK: [Piece; 8] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    /// Returns the letter used for this kind in two-character board codes.
    ///
    /// Knights use `k`; the king and queen are upper case.
    pub const fn code(self) -> char {
        match self {
            Piece::Rook => 'r',
            Piece::Knight => 'k',
            Piece::Bishop => 'b',
            Piece::Queen => 'Q',
            Piece::King => 'K',
            Piece::Pawn => 'p',
        }
    }

    /// Parses a kind letter as produced by [`Piece::code`].
    pub const fn from_code(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::Rook),
            'k' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            'p' => Some(Piece::Pawn),
            _ => None,
        }
    }

    /// Returns the movement rule for this kind.
    pub const fn move_rule(self) -> MoveRule {
        match self {
            Piece::Knight => MoveRule::Leaper(&KNIGHT_OFFSETS),
            Piece::Rook => MoveRule::Slider(&ORTHOGONAL_RAYS),
            Piece::Bishop => MoveRule::Slider(&DIAGONAL_RAYS),
            Piece::Pawn => MoveRule::Pawn,
            Piece::Queen => MoveRule::Immobile,
            Piece::King => MoveRule::Immobile,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Rook => "rook",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Queen => "queen",
            Piece::King => "king",
            Piece::Pawn => "pawn",
        };
        write!(f, "{}", name)
    }
}

/// A piece of a given color, the content of an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

impl ColoredPiece {
    #[inline]
    pub const fn new(color: Color, piece: Piece) -> Self {
        ColoredPiece { color, piece }
    }

    /// Parses a two-character board code such as `"wp"` or `"bK"`.
    pub fn from_code(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let color = match chars.next()? {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return None,
        };
        let piece = Piece::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(ColoredPiece::new(color, piece))
    }
}

impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.piece.code())
    }
}
