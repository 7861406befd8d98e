//! A board and its capture lists, played one move at a time.
//!
//! [`Game::play`] validates and executes under a single `&mut self` borrow,
//! so nobody can observe the board between the two steps.

use crate::execute::{apply_move, Captures};
use crate::rules::{RestrictedRules, RuleSet};
use crate::validate::{check_move, MoveError};
use crate::Board;
use tracing::debug;
use tschess_core::{ColoredPiece, Move};

/// What happened when a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub mv: Move,
    /// The piece that moved.
    pub moved: ColoredPiece,
    /// The enemy piece removed from the destination, if any.
    pub captured: Option<ColoredPiece>,
}

/// A game in progress.
///
/// There is no side to move: either color may move any of its pieces at any
/// time, and the game never ends on its own.
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = RestrictedRules> {
    rules: R,
    board: Board,
    captures: Captures,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting board.
    pub fn new() -> Self {
        Self::with_rules(RestrictedRules)
    }

    /// Creates a game from a custom board with empty capture lists.
    pub fn from_board(board: Board) -> Self {
        Game {
            rules: RestrictedRules,
            board,
            captures: Captures::new(),
        }
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game under the given rules.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Game {
            rules,
            board,
            captures: Captures::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the capture lists.
    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Returns the active rules.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns true if the move text would be accepted by [`Game::play`].
    pub fn is_possible(&self, text: &str) -> bool {
        check_move(&self.rules, &self.board, text).is_ok()
    }

    /// Validates and applies a move given as text such as `"e2 e4"`.
    ///
    /// On error the board and capture lists are unchanged.
    pub fn play(&mut self, text: &str) -> Result<MoveOutcome, MoveError> {
        let mv = check_move(&self.rules, &self.board, text)?;
        // A legal move always starts from an occupied square.
        let moved = self.board.piece_at(mv.from()).ok_or(MoveError::Illegal(mv))?;
        let captured = apply_move(&mut self.board, &mut self.captures, mv);
        debug!(%mv, %moved, ?captured, "played");
        Ok(MoveOutcome {
            mv,
            moved,
            captured,
        })
    }
}
