pub mod error;
pub mod mark;
pub mod square;

mod display;

use smallvec::SmallVec;

use error::BoardError;
use mark::Mark;
use square::{Square, ALL_SQUARES};

use crate::evaluate;

/// List of playable squares. A board never has more than nine.
pub type MoveList = SmallVec<[Square; 9]>;

/// Represents the state of a tic-tac-toe board: nine cells in row-major
/// order, each empty or holding a mark. The player to move is not stored;
/// it is derived from the mark counts, so the grid alone is the whole
/// state. Boards are plain values: `apply` returns a new board and leaves
/// its input untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 9] }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, square: Square) -> Option<Mark> {
        self.cells[square.index()]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Places a mark on an empty square without any turn or game-over
    /// checks. This is the setup primitive used by the position macro, the
    /// notation parser, and tests; `apply` is the move path.
    pub fn put(&mut self, square: Square, mark: Mark) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied { square });
        }

        self.cells[square.index()] = Some(mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Returns the player to move, derived from the mark counts: X when the
    /// counts are equal, O when X leads by one. Meaningful only while the
    /// game is in play; callers facing a possibly-finished board check
    /// `evaluate::game_ending` first.
    pub fn turn(&self) -> Mark {
        if self.mark_count(Mark::X) > self.mark_count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns every empty square. Scan order happens to be row-major, but
    /// callers must not depend on it; the searcher applies its own
    /// tie-break rule when several moves are equally good.
    pub fn legal_moves(&self) -> MoveList {
        ALL_SQUARES
            .iter()
            .copied()
            .filter(|&square| !self.is_occupied(square))
            .collect()
    }

    /// Plays the current player's mark on the given square, returning the
    /// successor board. The input board is left unchanged. Fails with
    /// `GameOver` when the game has already ended and `SquareOccupied` when
    /// the target cell is taken; an illegal move is always surfaced, never
    /// corrected.
    pub fn apply(&self, square: Square) -> Result<Board, BoardError> {
        if evaluate::game_ending(self)?.is_some() {
            return Err(BoardError::GameOver);
        }

        let mut next = *self;
        next.put(square, self.turn())?;
        Ok(next)
    }
}
