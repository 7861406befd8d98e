//! Move validation.
//!
//! Validation never touches the board mutably. A move is rejected either
//! because its text is malformed or because the destination is not among
//! the candidates of the piece on the origin square.

use thiserror::Error;
use tracing::debug;
use tschess_core::{Move, MoveParseError};

use crate::rules::{RestrictedRules, RuleSet};
use crate::Board;

/// Why a move was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The text is not of the form `e2 e4`.
    #[error(transparent)]
    Parse(#[from] MoveParseError),
    /// The text is well formed but the piece cannot reach the destination.
    #[error("move {0} is not possible")]
    Illegal(Move),
}

/// Checks move text against `board` under `rules`.
///
/// Returns the parsed move when it is legal.
pub fn check_move<R: RuleSet + ?Sized>(
    rules: &R,
    board: &Board,
    text: &str,
) -> Result<Move, MoveError> {
    debug!(text = %text.to_lowercase(), "checking move");
    let m = Move::parse(text)?;
    debug!(
        from = ?(m.from().row(), m.from().col()),
        to = ?(m.to().row(), m.to().col()),
        "internal coordinates"
    );
    if rules.is_legal(board, m) {
        Ok(m)
    } else {
        Err(MoveError::Illegal(m))
    }
}

/// Returns true if the move text is legal on `board` under the restricted rules.
pub fn is_move_possible(board: &Board, text: &str) -> bool {
    check_move(&RestrictedRules, board, text).is_ok()
}
