use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::mark::Mark;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate;


#[derive(Error, Debug)]
pub enum SearchError {
    #[error("the game is already over")]
    GameOver,
    #[error("search reached an inconsistent position: {board_error:?}")]
    InvalidPosition { board_error: BoardError },
}

impl From<BoardError> for SearchError {
    fn from(board_error: BoardError) -> Self {
        SearchError::InvalidPosition { board_error }
    }
}

/// Exhaustive minimax searcher. The game tree is explored to full depth
/// with no pruning and no memoization; the state space is small enough
/// (at most 9! move sequences) that a complete traversal stays cheap.
///
/// Ties between equally-valued moves resolve to the lexicographically
/// smallest (row, col) square, so results are reproducible regardless of
/// how the candidate list was ordered.
pub struct Searcher {
    parallel: bool,
    searched_position_count: AtomicUsize,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            parallel: false,
            searched_position_count: AtomicUsize::new(0),
        }
    }

    /// A searcher that evaluates the root moves on the rayon thread pool.
    /// Each successor board is an independent value, so the subtrees share
    /// nothing but the position counter.
    pub fn new_parallel() -> Self {
        Self {
            parallel: true,
            searched_position_count: AtomicUsize::new(0),
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count.load(Ordering::Relaxed)
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count.store(0, Ordering::Relaxed);
    }

    /// Returns the optimal move for the player whose turn it is: the move
    /// whose value after the opponent's best reply is greatest when X is to
    /// move, smallest when O is. Fails with `GameOver` on a finished board.
    pub fn search(&mut self, board: &Board) -> Result<Square, SearchError> {
        self.reset_stats();

        if evaluate::game_ending(board)?.is_some() {
            return Err(SearchError::GameOver);
        }

        let current_turn = board.turn();
        let mut candidates = board.legal_moves();
        // Lowest (row, col) first, so equal values resolve to the smallest square.
        candidates.sort_unstable();

        let searcher = &*self;
        let values: Vec<(Square, i8)> = if self.parallel {
            candidates
                .as_slice()
                .par_iter()
                .map(|&square| Ok((square, searcher.reply_value(board, square, current_turn)?)))
                .collect::<Result<_, SearchError>>()?
        } else {
            candidates
                .iter()
                .map(|&square| Ok((square, searcher.reply_value(board, square, current_turn)?)))
                .collect::<Result<_, SearchError>>()?
        };

        let maximizing = current_turn.maximizes_score();
        let (mut best_square, mut best_value) = values[0];
        for &(square, value) in values.iter().skip(1) {
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_square = square;
                best_value = value;
            }
        }

        debug!(
            "{} plays {} with value {} after searching {} positions",
            current_turn,
            best_square,
            best_value,
            self.searched_position_count()
        );
        Ok(best_square)
    }

    /// Value of playing `square`, assuming the opponent answers optimally.
    fn reply_value(
        &self,
        board: &Board,
        square: Square,
        current_turn: Mark,
    ) -> Result<i8, SearchError> {
        let next = board.apply(square)?;
        let value = if current_turn.maximizes_score() {
            self.min_value(&next)?
        } else {
            self.max_value(&next)?
        };
        debug!("candidate {}: value {}", square, value);
        Ok(value)
    }

    fn max_value(&self, board: &Board) -> Result<i8, SearchError> {
        self.searched_position_count.fetch_add(1, Ordering::Relaxed);

        if let Some(ending) = evaluate::game_ending(board)? {
            return Ok(evaluate::ending_score(ending));
        }

        // nothing scores below a lost game
        let mut best = evaluate::O_WINS;
        for square in board.legal_moves() {
            let value = self.min_value(&board.apply(square)?)?;
            best = best.max(value);
        }
        Ok(best)
    }

    fn min_value(&self, board: &Board) -> Result<i8, SearchError> {
        self.searched_position_count.fetch_add(1, Ordering::Relaxed);

        if let Some(ending) = evaluate::game_ending(board)? {
            return Ok(evaluate::ending_score(ending));
        }

        let mut best = evaluate::X_WINS;
        for square in board.legal_moves() {
            let value = self.max_value(&board.apply(square)?)?;
            best = best.min(value);
        }
        Ok(best)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
