//! Core types for tschess.
//!
//! This crate provides the fundamental types shared by the engine and the REPL:
//! - [`Piece`], [`Color`] and [`ColoredPiece`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for the `"e2 e4"` move text
//!
//! Squares use the internal `(row, col)` layout where row 0 is rank 8
//! (black's back rank) and row 7 is rank 1.

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::{Move, MoveParseError};
pub use piece::{ColoredPiece, MoveRule, Piece};
pub use square::{File, Rank, Square};
