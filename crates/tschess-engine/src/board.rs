//! Board representation.

use std::fmt;

use thiserror::Error;
use tschess_core::{Color, ColoredPiece, Piece, Square};

/// Errors that can occur when building a board from rendered rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("row {row}: expected 16 characters, got {len}")]
    RowLength { row: usize, len: usize },

    #[error("row {row}: unknown piece code '{code}'")]
    UnknownCode { row: usize, code: String },
}

/// The 8×8 grid of squares.
///
/// Cells are indexed `[row][col]` in internal coordinates: row 0 is rank 8
/// (black's back rank) and row 7 is rank 1 (white's back rank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// Creates a board with every square empty.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, piece) in Piece::BACK_RANK.into_iter().enumerate() {
                board.cells[back][col] = Some(ColoredPiece::new(color, piece));
                board.cells[pawns][col] = Some(ColoredPiece::new(color, Piece::Pawn));
            }
        }
        board
    }

    /// Builds a board from eight rendered rows, top (rank 8) first.
    ///
    /// Each row holds eight two-character cells: a piece code such as `wp`
    /// or `bK`, or `--` for an empty square.
    pub fn from_rows(rows: [&str; 8]) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != 16 {
                return Err(BoardError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, pair) in chars.chunks(2).enumerate() {
                let code: String = pair.iter().collect();
                if code == "--" {
                    continue;
                }
                let piece = ColoredPiece::from_code(&code)
                    .ok_or(BoardError::UnknownCode { row, code })?;
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Places a piece on (or clears) the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<ColoredPiece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Removes and returns the piece on the given square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Returns the color of the piece at internal coordinates.
    ///
    /// Out-of-bounds coordinates and empty squares report `None`.
    pub fn occupant_color(&self, row: i8, col: i8) -> Option<Color> {
        let sq = Square::from_coords(row, col)?;
        self.piece_at(sq).map(|p| p.color)
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        (0..64u8).filter_map(move |i| {
            let sq = Square::from_index(i)?;
            self.piece_at(sq).map(|p| (sq, p))
        })
    }

    /// Returns the number of pieces of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

const FILE_HEADER: &str = "   a b c d e f g h ";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", FILE_HEADER)?;
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, "{}", piece)?,
                    None => write!(f, "--")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", FILE_HEADER)
    }
}
