use std::collections::HashMap;

use super::board::Board;
use super::bot_controller::BotInput;
use super::types::{Mark, Position};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Full-depth minimax with a transposition table keyed by board fingerprint.
///
/// Scores are relative to the root position: a win `depth` plies after the root is worth
/// `WIN_SCORE - depth`, a loss `depth - WIN_SCORE`, a draw `0`. The side to move and the
/// depth both follow from the number of filled cells, so the fingerprint alone is a valid
/// cache key for the lifetime of one search.
struct MinimaxSearch {
    bot_mark: Mark,
    root_filled: usize,
    cache: HashMap<u32, i32>,
}

impl MinimaxSearch {
    fn new(bot_mark: Mark, root: &Board) -> Self {
        Self {
            bot_mark,
            root_filled: root.filled_count(),
            cache: HashMap::new(),
        }
    }

    fn score(&mut self, board: &Board, to_move: Mark) -> i32 {
        let depth = (board.filled_count() - self.root_filled) as i32;

        if let Some(winner) = check_win(board) {
            return if winner == self.bot_mark {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }

        if board.is_full() {
            return 0;
        }

        let key = board.fingerprint();
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let is_maximizing = to_move == self.bot_mark;
        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

        for pos in board.legal_moves() {
            let mut next = *board;
            if next.place(pos.row, pos.col, to_move).is_err() {
                continue;
            }
            let eval = self.score(&next, to_move.opponent());
            best = if is_maximizing { best.max(eval) } else { best.min(eval) };
        }

        self.cache.insert(key, best);
        best
    }
}

/// Minimax value of every legal move for `input.current_mark`, in row-major order.
pub fn evaluate_moves(input: &BotInput) -> Vec<(Position, i32)> {
    let bot_mark = input.current_mark;
    let mut search = MinimaxSearch::new(bot_mark, &input.board);

    input
        .board
        .legal_moves()
        .into_iter()
        .filter_map(|pos| {
            let mut board = input.board;
            board.place(pos.row, pos.col, bot_mark).ok()?;
            Some((pos, search.score(&board, bot_mark.opponent())))
        })
        .collect()
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (pos, score) in evaluate_moves(input) {
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}
