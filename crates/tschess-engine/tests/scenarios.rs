//! End-to-end scenarios: validate then execute, as the REPL does.

use tschess_core::{Color, ColoredPiece, Piece, Square};
use tschess_engine::{
    execute_move, is_move_possible, Board, Captures, Game, MoveError, RestrictedRules, RuleSet,
};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Validates and, if legal, executes. Returns the verdict.
fn step(board: &mut Board, captures: &mut Captures, text: &str) -> bool {
    if !is_move_possible(board, text) {
        return false;
    }
    execute_move(board, captures, text).unwrap();
    true
}

#[test]
fn initial_board_counts() {
    let board = RestrictedRules.initial_board();
    assert_eq!(board.count(Color::White), 16);
    assert_eq!(board.count(Color::Black), 16);
    let pawns = |color| {
        board
            .pieces()
            .filter(|(s, p)| {
                *p == ColoredPiece::new(color, Piece::Pawn) && s.row() == color.pawn_row()
            })
            .count()
    };
    assert_eq!(pawns(Color::White), 8);
    assert_eq!(pawns(Color::Black), 8);

    for (from, piece) in board.pieces() {
        if matches!(piece.piece, Piece::Queen | Piece::King) {
            assert!(RestrictedRules.candidates(&board, from).is_empty());
        }
    }
}

#[test]
fn e2_e4_moves_the_pawn() {
    let mut board = Board::initial();
    let mut captures = Captures::new();
    assert!(step(&mut board, &mut captures, "e2 e4"));
    assert_eq!(board.piece_at(sq("e2")), None);
    assert_eq!(
        board.piece_at(sq("e4")),
        Some(ColoredPiece::new(Color::White, Piece::Pawn))
    );
    assert!(captures.white().is_empty());
    assert!(captures.black().is_empty());
}

#[test]
fn b1_c3_knight() {
    let mut board = Board::initial();
    let mut captures = Captures::new();
    assert!(step(&mut board, &mut captures, "b1 c3"));
    assert_eq!(
        board.piece_at(sq("c3")),
        Some(ColoredPiece::new(Color::White, Piece::Knight))
    );
    assert_eq!(board.piece_at(sq("b1")), None);
    assert!(captures.is_empty());
}

#[test]
fn e2_e5_is_rejected() {
    let mut board = Board::initial();
    let mut captures = Captures::new();
    assert!(!step(&mut board, &mut captures, "e2 e5"));
    assert_eq!(board, Board::initial());
}

#[test]
fn d1_d4_queen_is_rejected() {
    let mut board = Board::initial();
    let mut captures = Captures::new();
    assert!(!step(&mut board, &mut captures, "d1 d4"));
    assert_eq!(board, Board::initial());
}

#[test]
fn malformed_strings_are_rejected() {
    let board = Board::initial();
    for text in ["", "e2", "e2e4", "e2 e4 ", " e2 e4", "e2-e4", "i2 i4", "e0 e4", "e2 e9", "exit"] {
        assert!(!is_move_possible(&board, text), "{text:?} should be rejected");
    }
    assert!(is_move_possible(&board, "E2 E4"));
}

#[test]
fn bishop_captures_after_pawn_moves() {
    let mut game = Game::new();
    game.play("e2 e3").unwrap();
    game.play("b7 b6").unwrap();
    game.play("b6 b5").unwrap();
    // f1 bishop now sees e2, d3, c4, b5 (black pawn).
    let outcome = game.play("f1 b5").unwrap();
    assert_eq!(
        outcome.captured,
        Some(ColoredPiece::new(Color::Black, Piece::Pawn))
    );
    assert_eq!(game.captures().black(), &[Piece::Pawn]);
    assert!(game.captures().white().is_empty());
    assert_eq!(
        game.board().piece_at(sq("b5")),
        Some(ColoredPiece::new(Color::White, Piece::Bishop))
    );

    // The pawn on d7 blocks the way to e8.
    assert!(matches!(game.play("b5 e8"), Err(MoveError::Illegal(_))));
    let outcome = game.play("b5 d7").unwrap();
    assert_eq!(
        outcome.captured,
        Some(ColoredPiece::new(Color::Black, Piece::Pawn))
    );
    assert_eq!(game.captures().black(), &[Piece::Pawn, Piece::Pawn]);
}

#[test]
fn captures_are_split_by_color() {
    let mut game = Game::new();
    game.play("g1 f3").unwrap();
    game.play("f3 e5").unwrap();
    game.play("e5 d7").unwrap();
    let outcome = game.play("c8 d7").unwrap();
    assert_eq!(
        outcome.captured,
        Some(ColoredPiece::new(Color::White, Piece::Knight))
    );
    assert_eq!(game.captures().black(), &[Piece::Pawn]);
    assert_eq!(game.captures().white(), &[Piece::Knight]);
}
