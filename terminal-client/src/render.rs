use tictactoe_engine::tictactoe::{Board, Cell, GameMode, GameStatus, Position, TicTacToeSession, WinningLine};

fn render_cell(cell: Cell, position: Position, highlight: Option<WinningLine>, last_move: Option<Position>) -> String {
    let symbol = match cell.mark() {
        Some(mark) => mark.to_string(),
        None => " ".to_string(),
    };

    if highlight.is_some_and(|line| line.contains(position)) {
        format!("[{}]", symbol)
    } else if last_move == Some(position) {
        format!("({})", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

/// Winning cells are drawn as `[X]`, the last move as `(X)`.
pub fn render_board(
    board: &Board,
    highlight: Option<WinningLine>,
    last_move: Option<Position>,
    show_coordinates: bool,
) -> String {
    let margin = if show_coordinates { "  " } else { "" };
    let mut out = String::new();

    if show_coordinates {
        out.push_str("   0   1   2\n");
    }

    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            out.push_str(margin);
            out.push_str("---+---+---\n");
        }
        if show_coordinates {
            out.push_str(&format!("{} ", row));
        }
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| render_cell(cell, Position::new(row, col), highlight, last_move))
            .collect();
        out.push_str(&rendered.join("|"));
        out.push('\n');
    }

    out
}

pub fn status_text(session: &TicTacToeSession) -> String {
    match session.status() {
        GameStatus::Won { mark, .. } => format!("Winner: {}!", mark),
        GameStatus::Drawn => "Draw!".to_string(),
        GameStatus::InProgress => match session.current_mark() {
            Some(mark) if session.is_computer_turn() => format!("Computer ({}) is thinking...", mark),
            Some(mark) => format!("{} to move", mark),
            None => String::new(),
        },
    }
}

pub fn mode_text(mode: GameMode) -> String {
    match mode {
        GameMode::TwoPlayer => "Two players".to_string(),
        GameMode::VsComputer(difficulty) => format!("You (X) vs computer (O), {}", difficulty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::Difficulty;

    #[test]
    fn test_render_empty_board_with_coordinates() {
        let expected = "   0   1   2\n\
                        0    |   |   \n  \
                        ---+---+---\n\
                        1    |   |   \n  \
                        ---+---+---\n\
                        2    |   |   \n";
        assert_eq!(render_board(&Board::empty(), None, None, true), expected);
    }

    #[test]
    fn test_render_marks_last_move_and_winning_line() {
        let mut session = TicTacToeSession::with_seed(GameMode::TwoPlayer, 1);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.submit_move(row, col).unwrap();
        }
        let rendered = render_board(&session.board(), session.winning_line(), session.last_move(), false);
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "[X]|[X]|[X]");
        assert_eq!(rendered.lines().nth(2).unwrap(), " O | O |   ");
    }

    #[test]
    fn test_render_last_move_in_progress() {
        let mut session = TicTacToeSession::with_seed(GameMode::TwoPlayer, 1);
        session.submit_move(1, 1).unwrap();
        let rendered = render_board(&session.board(), session.winning_line(), session.last_move(), false);
        assert_eq!(rendered.lines().nth(2).unwrap(), "   |(X)|   ");
    }

    #[test]
    fn test_status_text() {
        let mut session = TicTacToeSession::with_seed(GameMode::VsComputer(Difficulty::Optimal), 1);
        assert_eq!(status_text(&session), "X to move");
        session.submit_move(0, 0).unwrap();
        assert_eq!(status_text(&session), "Computer (O) is thinking...");

        let mut two = TicTacToeSession::with_seed(GameMode::TwoPlayer, 1);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            two.submit_move(row, col).unwrap();
        }
        assert_eq!(status_text(&two), "Winner: X!");
    }
}
