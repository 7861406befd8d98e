//! Move generation and validation for a restricted chess rule set.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of optional pieces, row 0 being rank 8
//! - [`movegen`] - candidate destinations for each piece kind
//! - [`RuleSet`] - the seam between the engine and the active rules,
//!   implemented by [`RestrictedRules`]
//! - [`validate`] and [`execute`] - the two halves of playing a move
//! - [`Game`] - a board plus capture lists, played one move at a time
//!
//! # Rules
//!
//! Only occupancy is considered. There is no turn order, no check, no
//! castling, en passant or promotion. Knights may land on any square a jump
//! away, pawns step forward without looking at the target square, and
//! queens and kings never move.
//!
//! # Example
//!
//! ```
//! use tschess_engine::Game;
//!
//! let mut game = Game::new();
//! assert!(game.play("e2 e4").is_ok());
//! assert!(game.play("d1 d4").is_err());
//! println!("{}", game.board());
//! ```

mod board;
pub mod execute;
mod game;
pub mod movegen;
pub mod rules;
pub mod validate;

pub use board::{Board, BoardError};
pub use execute::{apply_move, execute_move, CaptureList, Captures};
pub use game::{Game, MoveOutcome};
pub use movegen::{destinations, SquareList};
pub use rules::{RestrictedRules, RuleSet};
pub use validate::{check_move, is_move_possible, MoveError};
