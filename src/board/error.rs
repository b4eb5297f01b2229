use thiserror::Error;

use crate::board::square::Square;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Cannot place a mark on a square that is already occupied: {square}")]
    SquareOccupied { square: Square },
    #[error("Cannot apply a move, the game is already over")]
    GameOver,
    #[error("Both marks complete a winning line, the position is inconsistent")]
    ConflictingWins,
    #[error("The game has not ended, no outcome is defined")]
    GameInProgress,
}
