//! Candidate destination generation.
//!
//! Each piece kind maps to a [`MoveRule`]; the functions here turn a rule
//! into the squares a piece could move to. Only occupancy is considered:
//! friendly pieces stop a slider before their square, enemy pieces stop it
//! on theirs. Knights and pawns do not look at occupancy at all.

use tschess_core::{Color, ColoredPiece, MoveRule, Square};
use tracing::trace;

use crate::Board;

/// A list of squares with a fixed maximum capacity.
///
/// No piece under these rules reaches more than 14 squares, so a fixed-size
/// array avoids heap allocations during generation.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; Self::MAX_SQUARES],
    len: usize,
}

impl SquareList {
    /// Capacity of the list.
    pub const MAX_SQUARES: usize = 16;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square::A8; Self::MAX_SQUARES],
            len: 0,
        }
    }

    /// Adds a square to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_SQUARES);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    /// Returns the number of squares.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the squares.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    /// Returns true if the square is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the candidate destinations of `piece` standing on `from`.
pub fn destinations(board: &Board, piece: ColoredPiece, from: Square) -> SquareList {
    let list = match piece.piece.move_rule() {
        MoveRule::Leaper(offsets) => leaper_destinations(from, offsets),
        MoveRule::Slider(rays) => slider_destinations(board, piece.color, from, rays),
        MoveRule::Pawn => pawn_destinations(piece.color, from),
        MoveRule::Immobile => SquareList::new(),
    };
    trace!(%piece, %from, candidates = ?list, "generated destinations");
    list
}

/// Every on-board square one offset away from `from`, occupied or not.
pub fn leaper_destinations(from: Square, offsets: &[(i8, i8)]) -> SquareList {
    let mut list = SquareList::new();
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            list.push(to);
        }
    }
    list
}

/// Walks each ray from `from` until the edge or the first occupied square.
///
/// A square held by `color` ends the ray without being included; a square
/// held by the other side is included and then ends the ray.
pub fn slider_destinations(
    board: &Board,
    color: Color,
    from: Square,
    rays: &[(i8, i8)],
) -> SquareList {
    let mut list = SquareList::new();
    for &(dr, dc) in rays {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if board.is_occupied_by(next, color) {
                break;
            }
            list.push(next);
            if board.piece_at(next).is_some() {
                break;
            }
            current = next;
        }
    }
    list
}

/// One step forward, plus two steps from the color's pawn row.
///
/// Neither step checks that its squares are empty, and no diagonal
/// captures exist.
pub fn pawn_destinations(color: Color, from: Square) -> SquareList {
    let mut list = SquareList::new();
    let dir = color.pawn_direction();
    if let Some(to) = from.offset(dir, 0) {
        list.push(to);
    }
    if from.row() == color.pawn_row() {
        if let Some(to) = from.offset(2 * dir, 0) {
            list.push(to);
        }
    }
    list
}
