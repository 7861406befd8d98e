//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, which separates the engine's
//! board handling from the rules that decide where pieces may go. The only
//! rule set shipped is [`RestrictedRules`].

mod restricted;

pub use restricted::RestrictedRules;

use crate::{Board, SquareList};
use tschess_core::{ColoredPiece, Move, Square};

/// Trait for the rules a [`Game`](crate::Game) is played under.
///
/// # Example
///
/// ```
/// use tschess_core::Square;
/// use tschess_engine::{RestrictedRules, RuleSet};
///
/// let board = RestrictedRules.initial_board();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// assert_eq!(RestrictedRules.candidates(&board, e2).len(), 2);
/// ```
pub trait RuleSet {
    /// Returns the starting board for these rules.
    fn initial_board(&self) -> Board;

    /// Returns the destinations `piece` could reach from `from`.
    fn destinations(&self, board: &Board, piece: ColoredPiece, from: Square) -> SquareList;

    /// Returns the destinations of whatever stands on `from`.
    ///
    /// An empty square has no candidates.
    fn candidates(&self, board: &Board, from: Square) -> SquareList {
        match board.piece_at(from) {
            Some(piece) => self.destinations(board, piece, from),
            None => SquareList::new(),
        }
    }

    /// Returns true if the move's destination is a candidate of its origin.
    fn is_legal(&self, board: &Board, m: Move) -> bool {
        self.candidates(board, m.from()).contains(m.to())
    }
}
