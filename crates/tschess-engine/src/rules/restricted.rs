//! The restricted rule set.

use super::RuleSet;
use crate::{movegen, Board, SquareList};
use tschess_core::{ColoredPiece, Square};

/// Occupancy-only rules without turns, check, or special moves.
///
/// - Knights jump to any on-board square a knight's move away
/// - Rooks and bishops slide until blocked, capturing the first enemy
/// - Pawns step one square forward, or two from their starting row,
///   without checking the squares are empty
/// - Queens and kings cannot move
#[derive(Debug, Clone, Copy, Default)]
pub struct RestrictedRules;

impl RuleSet for RestrictedRules {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn destinations(&self, board: &Board, piece: ColoredPiece, from: Square) -> SquareList {
        movegen::destinations(board, piece, from)
    }
}
