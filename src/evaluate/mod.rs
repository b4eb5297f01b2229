use crate::board::error::BoardError;
use crate::board::mark::Mark;
use crate::board::square::{Square, A1, A2, A3, B1, B2, B3, C1, C2, C3};
use crate::board::Board;

// Outcome values from X's perspective. The value function is exact: a
// terminal board is worth exactly a win, a loss, or a draw, never an
// estimate.
pub const X_WINS: i8 = 1;
pub const O_WINS: i8 = -1;
pub const DRAW: i8 = 0;

/// The eight square triples a mark can occupy to win: three rows, three
/// columns, two diagonals.
pub const WINNING_LINES: [[Square; 3]; 8] = [
    [A1, B1, C1],
    [A2, B2, C2],
    [A3, B3, C3],
    [A1, A2, A3],
    [B1, B2, B3],
    [C1, C2, C3],
    [A1, B2, C3],
    [C1, B2, A3],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Mark),
    Draw,
}

/// Returns the mark that fully occupies a winning line, if any. Move
/// alternation makes a double win impossible in real play; a hand-built
/// position where both marks complete lines is reported as
/// `ConflictingWins` rather than silently resolved in favor of either.
#[inline(always)]
pub fn winner(board: &Board) -> Result<Option<Mark>, BoardError> {
    let mut winning_mark = None;

    for line in WINNING_LINES.iter() {
        let first = match board.get(line[0]) {
            Some(mark) => mark,
            None => continue,
        };
        if board.get(line[1]) == Some(first) && board.get(line[2]) == Some(first) {
            match winning_mark {
                Some(previous) if previous != first => {
                    return Err(BoardError::ConflictingWins)
                }
                _ => winning_mark = Some(first),
            }
        }
    }

    Ok(winning_mark)
}

/// Returns the game ending state if the game has ended, otherwise returns None.
#[inline(always)]
pub fn game_ending(board: &Board) -> Result<Option<GameEnding>, BoardError> {
    if let Some(mark) = winner(board)? {
        return Ok(Some(GameEnding::Win(mark)));
    }

    if board.is_full() {
        return Ok(Some(GameEnding::Draw));
    }

    Ok(None)
}

/// True iff a mark has won or no empty cell remains.
#[inline(always)]
pub fn is_terminal(board: &Board) -> Result<bool, BoardError> {
    Ok(game_ending(board)?.is_some())
}

/// Returns the outcome of a finished game: `X_WINS`, `O_WINS`, or `DRAW`.
/// Asking for the outcome of a game still in progress is an error, so an
/// unfinished board can never be mistaken for a draw.
#[inline(always)]
pub fn score(board: &Board) -> Result<i8, BoardError> {
    match game_ending(board)? {
        Some(ending) => Ok(ending_score(ending)),
        None => Err(BoardError::GameInProgress),
    }
}

#[inline(always)]
pub fn ending_score(ending: GameEnding) -> i8 {
    match ending {
        GameEnding::Win(Mark::X) => X_WINS,
        GameEnding::Win(Mark::O) => O_WINS,
        GameEnding::Draw => DRAW,
    }
}
