//! Move execution and capture bookkeeping.
//!
//! Execution does not check legality. Callers validate first (see
//! [`check_move`](crate::check_move)); an unvalidated move is applied as-is.

use std::fmt;

use tracing::debug;
use tschess_core::{Color, ColoredPiece, Move, MoveParseError, Piece};

use crate::Board;

/// Pieces removed from the board, by the color of the removed piece.
///
/// Both lists are append-only and ordered by time of capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl Captures {
    /// Creates empty capture lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a removed piece to the list of its color.
    pub fn record(&mut self, captured: ColoredPiece) {
        match captured.color {
            Color::White => self.white.push(captured.piece),
            Color::Black => self.black.push(captured.piece),
        }
    }

    /// Returns the captured white pieces.
    pub fn white(&self) -> &[Piece] {
        &self.white
    }

    /// Returns the captured black pieces.
    pub fn black(&self) -> &[Piece] {
        &self.black
    }

    /// Returns the captured pieces of one color.
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Returns the total number of captured pieces.
    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Comma-joined kind names of one list, e.g. `rook, pawn`.
pub struct CaptureList<'a>(pub &'a [Piece]);

impl fmt::Display for CaptureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, piece) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", piece)?;
        }
        Ok(())
    }
}

/// Parses `text` and applies it to `board` without checking legality.
///
/// Malformed text leaves the board untouched.
pub fn execute_move(
    board: &mut Board,
    captures: &mut Captures,
    text: &str,
) -> Result<Option<ColoredPiece>, MoveParseError> {
    let m = Move::parse(text)?;
    Ok(apply_move(board, captures, m))
}

/// Copies whatever stands on the origin to the destination, then empties
/// the origin.
///
/// If the destination holds a piece of the other color it is recorded in
/// `captures` and returned. A move onto its own origin therefore leaves the
/// square empty.
pub fn apply_move(board: &mut Board, captures: &mut Captures, m: Move) -> Option<ColoredPiece> {
    let mover = board.piece_at(m.from());
    let displaced = board.piece_at(m.to());
    let captured = match (mover, displaced) {
        (Some(mover), Some(target)) if target.color != mover.color => Some(target),
        _ => None,
    };
    if let Some(piece) = captured {
        debug!(%piece, square = %m.to(), "captured");
        captures.record(piece);
    }
    board.set(m.to(), mover);
    board.set(m.from(), None);
    captured
}
