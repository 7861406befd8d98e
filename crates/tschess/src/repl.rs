//! The interactive loop.
//!
//! Reads one line at a time, hands it to the [`Game`], and prints the board
//! after every legal move.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tschess_engine::{CaptureList, Game};

use crate::config::ReplConfig;

/// Printed when a line is not a legal move.
pub const NOT_POSSIBLE: &str = "Move is not possible.";

/// A REPL session over any reader and writer.
pub struct Repl<R: BufRead, W: Write> {
    config: ReplConfig,
    game: Game,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(config: ReplConfig, reader: R, writer: W) -> Self {
        Self {
            config,
            game: Game::new(),
            reader,
            writer,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until a quit word or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");
        writeln!(self.writer, "{}", self.game.board())?;
        loop {
            write!(self.writer, "{}", self.config.prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            let line = strip_line_ending(&line);
            if self.config.is_quit(line) {
                break;
            }
            self.handle(line)?;
        }
        writeln!(self.writer, "bye")?;
        self.writer.flush()?;
        Ok(())
    }

    fn handle(&mut self, line: &str) -> io::Result<()> {
        match self.game.play(line) {
            Ok(_) => {
                writeln!(self.writer, "{}", self.game.board())?;
                if self.config.show_captures {
                    let captures = self.game.captures();
                    writeln!(self.writer, "Captured white: {}", CaptureList(captures.white()))?;
                    writeln!(self.writer, "Captured black: {}", CaptureList(captures.black()))?;
                }
            }
            Err(err) => {
                debug!(%err, line, "rejected");
                writeln!(self.writer, "{}", NOT_POSSIBLE)?;
            }
        }
        Ok(())
    }
}

/// Removes a trailing `\n` or `\r\n`, nothing else.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tschess_core::{Color, Piece, Square};

    fn run_session(config: ReplConfig, input: &str) -> (String, Game) {
        let mut output = Vec::new();
        let mut repl = Repl::new(config, Cursor::new(input.as_bytes()), &mut output);
        repl.run().unwrap();
        let game = repl.game().clone();
        (String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn quits_immediately() {
        let (out, game) = run_session(ReplConfig::default(), "q\n");
        assert!(out.starts_with("   a b c d e f g h \n\n8  brbkbbbQbKbbbkbr\n"));
        assert!(out.ends_with("Your move: bye\n"));
        assert_eq!(game.board(), &tschess_engine::Board::initial());
    }

    #[test]
    fn end_of_input_closes_session() {
        let (out, _) = run_session(ReplConfig::default(), "");
        assert!(out.ends_with("Your move: bye\n"));
    }

    #[test]
    fn illegal_move_prints_notice() {
        let (out, _) = run_session(ReplConfig::default(), "d1 d4\nexit\n");
        assert!(out.contains(NOT_POSSIBLE));
        assert!(!out.contains("Captured"));
    }

    #[test]
    fn legal_move_prints_board_and_captures() {
        let (out, game) = run_session(ReplConfig::default(), "e2 e4\r\nquit\n");
        assert!(out.contains("4  --------wp------\n"));
        assert!(out.contains("2  wpwpwpwp--wpwpwp\n"));
        assert!(out.contains("Captured white: \nCaptured black: \n"));
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(game.board().piece_at(e4).map(|p| p.piece), Some(Piece::Pawn));
    }

    #[test]
    fn captures_are_listed() {
        let input = "g1 f3\nf3 e5\ne5 d7\nc8 d7\nq\n";
        let (out, game) = run_session(ReplConfig::default(), input);
        assert!(out.contains("Captured white: \nCaptured black: pawn\n"));
        assert!(out.contains("Captured white: knight\nCaptured black: pawn\n"));
        assert_eq!(game.captures().of(Color::White), &[Piece::Knight]);
    }

    #[test]
    fn lines_are_not_trimmed() {
        let (out, game) = run_session(ReplConfig::default(), " e2 e4\nq \nq\n");
        assert_eq!(out.matches(NOT_POSSIBLE).count(), 2);
        assert_eq!(game.board(), &tschess_engine::Board::initial());
    }

    #[test]
    fn custom_config() {
        let config = ReplConfig {
            prompt: "> ".to_string(),
            quit_words: vec!["stop".to_string()],
            show_captures: false,
            ..ReplConfig::default()
        };
        let (out, _) = run_session(config, "q\nb1 c3\nstop\nb8 c6\n");
        assert!(out.contains("> Move is not possible.\n"));
        assert!(!out.contains("Captured"));
        assert!(out.ends_with("> bye\n"));
        assert!(out.contains("3  ----wk----------\n"));
        assert!(!out.contains("6  ----bk----------\n"));
    }

    #[test]
    fn strip_line_ending_only_removes_terminator() {
        assert_eq!(strip_line_ending("e2 e4\n"), "e2 e4");
        assert_eq!(strip_line_ending("e2 e4\r\n"), "e2 e4");
        assert_eq!(strip_line_ending("e2 e4 \n"), "e2 e4 ");
        assert_eq!(strip_line_ending("e2 e4"), "e2 e4");
    }
}
