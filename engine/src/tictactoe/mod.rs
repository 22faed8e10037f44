mod board;
mod bot_controller;
mod error;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, calculate_heuristic_move, calculate_move, calculate_random_move,
};
pub use error::{IllegalMoveReason, TicTacToeError};
pub use minimax::{calculate_minimax_move, evaluate_moves};
pub use session::{AppliedMove, TicTacToeSession, TicTacToeSessionState};
pub use types::{
    BOARD_SIZE, COMPUTER_MARK, Cell, Difficulty, GameMode, GameStatus, Mark, Position,
    WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate_status};
