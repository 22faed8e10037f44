use crate::session_rng::SessionRng;
use super::board::Board;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, Mark, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self { board, current_mark }
    }
}

/// Picks a move for `input.current_mark`. Returns `None` only when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Random => calculate_random_move(&input, rng),
        Difficulty::Heuristic => calculate_heuristic_move(&input, rng),
        Difficulty::Optimal => calculate_minimax_move(&input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.legal_moves();
    rng.choose(&available_moves).copied()
}

pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let bot_mark = input.current_mark;
    let available_moves = input.board.legal_moves();

    if available_moves.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(&input.board, bot_mark, &available_moves) {
        return Some(pos);
    }

    // Only the first threat in scan order is blocked, even when the opponent has two.
    if let Some(pos) = find_winning_move(&input.board, bot_mark.opponent(), &available_moves) {
        return Some(pos);
    }

    calculate_random_move(input, rng)
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    moves.iter().copied().find(|pos| {
        let mut board = *board;
        board.place(pos.row, pos.col, mark).is_ok() && check_win(&board) == Some(mark)
    })
}
