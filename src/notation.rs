//! Textual position parsing and serialization.
//!
//! A position is written as three `/`-separated ranks of `X`, `O`, and `.`
//! reading top-down, e.g. `"XX./.O./..."`. Parsing validates the mark-count
//! invariant (X moves first, so X never trails and never leads by more than
//! one) and rejects positions where both marks complete a winning line.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::mark::Mark;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate;

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[XO.]{3}/[XO.]{3}/[XO.]{3}$").expect("POSITION_RE regex should be valid")
});

pub const EMPTY_POSITION: &str = ".../.../...";

#[derive(Error, Debug)]
pub enum PositionParseError {
    #[error("Position does not have the rank/rank/rank form: {input:?}")]
    MalformedPosition { input: String },
    #[error("Error placing mark: {board_error:?}")]
    ErrorPlacingMark { board_error: BoardError },
    #[error("Impossible mark counts: {x_count:?} X against {o_count:?} O")]
    ImpossibleMarkCounts { x_count: usize, o_count: usize },
    #[error("Inconsistent position: {board_error:?}")]
    InconsistentPosition { board_error: BoardError },
}

type PositionResult<T> = Result<T, PositionParseError>;

/// Parses a position string into a Board, validating that the position is
/// reachable by alternating play from the empty grid.
pub fn parse_position(input: &str) -> PositionResult<Board> {
    if !POSITION_RE.is_match(input) {
        return Err(PositionParseError::MalformedPosition {
            input: input.to_string(),
        });
    }

    let mut board = Board::new();
    for (row, rank) in input.split('/').enumerate() {
        for (col, c) in rank.chars().enumerate() {
            let mark = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => continue,
            };
            board
                .put(Square::new(row, col), mark)
                .map_err(|board_error| PositionParseError::ErrorPlacingMark { board_error })?;
        }
    }

    let x_count = board.mark_count(Mark::X);
    let o_count = board.mark_count(Mark::O);
    if x_count < o_count || x_count > o_count + 1 {
        return Err(PositionParseError::ImpossibleMarkCounts { x_count, o_count });
    }

    evaluate::winner(&board)
        .map_err(|board_error| PositionParseError::InconsistentPosition { board_error })?;

    Ok(board)
}

/// Serializes a board into the rank/rank/rank form parsed by
/// `parse_position`.
pub fn position(board: &Board) -> String {
    let mut out = String::with_capacity(11);
    for row in 0..3 {
        if row > 0 {
            out.push('/');
        }
        for col in 0..3 {
            out.push(match board.get(Square::new(row, col)) {
                Some(Mark::X) => 'X',
                Some(Mark::O) => 'O',
                None => '.',
            });
        }
    }
    out
}

impl FromStr for Board {
    type Err = PositionParseError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_position(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::tictactoe_position;

    #[test]
    fn test_parse_empty_position() {
        let board = parse_position(EMPTY_POSITION).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_midgame_position() {
        let board = parse_position("XX./.O./...").unwrap();
        assert_eq!(board.get(A1), Some(Mark::X));
        assert_eq!(board.get(B1), Some(Mark::X));
        assert_eq!(board.get(B2), Some(Mark::O));
        assert_eq!(board.get(C1), None);
        assert_eq!(board.turn(), Mark::O);
    }

    #[test]
    fn test_round_trip() {
        let board = tictactoe_position! {
            X.O
            .X.
            O..
        };
        let serialized = position(&board);
        assert_eq!(serialized, "X.O/.X./O..");
        assert_eq!(parse_position(&serialized).unwrap(), board);
    }

    #[test]
    fn test_serialize_empty_board() {
        assert_eq!(position(&Board::new()), EMPTY_POSITION);
    }

    #[test]
    fn test_malformed_positions_are_rejected() {
        for input in ["", "XX/.O./...", "xx./.o./...", "XX./.O./....", "XXOXXOXXO"] {
            assert!(matches!(
                parse_position(input),
                Err(PositionParseError::MalformedPosition { .. })
            ));
        }
    }

    #[test]
    fn test_impossible_mark_counts_are_rejected() {
        // X leading by two
        assert!(matches!(
            parse_position("XX./.../..."),
            Err(PositionParseError::ImpossibleMarkCounts {
                x_count: 2,
                o_count: 0
            })
        ));
        // O ahead of X
        assert!(matches!(
            parse_position("O../.../..."),
            Err(PositionParseError::ImpossibleMarkCounts {
                x_count: 0,
                o_count: 1
            })
        ));
    }

    #[test]
    fn test_conflicting_wins_are_rejected() {
        assert!(matches!(
            parse_position("XXX/OOO/..."),
            Err(PositionParseError::InconsistentPosition {
                board_error: BoardError::ConflictingWins
            })
        ));
    }

    #[test]
    fn test_from_str() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(board.get(A1), Some(Mark::X));
        assert_eq!(board.get(B1), Some(Mark::O));
    }
}
