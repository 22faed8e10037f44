use std::fmt;

use thiserror::Error;

use super::types::{Mark, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfBounds,
    CellOccupied,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "position out of bounds"),
            IllegalMoveReason::CellOccupied => write!(f, "cell is already marked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicTacToeError {
    #[error("Illegal move at {position}: {reason}")]
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },
    #[error("Not your turn: {0} is to move")]
    NotYourTurn(Mark),
    #[error("Game is already over")]
    GameAlreadyFinished,
}

impl TicTacToeError {
    pub fn out_of_bounds(position: Position) -> Self {
        Self::IllegalMove {
            position,
            reason: IllegalMoveReason::OutOfBounds,
        }
    }

    pub fn cell_occupied(position: Position) -> Self {
        Self::IllegalMove {
            position,
            reason: IllegalMoveReason::CellOccupied,
        }
    }
}
