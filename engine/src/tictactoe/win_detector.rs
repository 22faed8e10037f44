use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

const fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// Rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Mark> {
    let [first, second, third] = line.map(|p| board.cell(p.row, p.col));
    let mark = first?.mark()?;
    if second?.mark() == Some(mark) && third?.mark() == Some(mark) {
        Some(mark)
    } else {
        None
    }
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    LINES.iter().find_map(|line| {
        line_owner(board, line).map(|mark| (mark, WinningLine::new(*line)))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some((mark, line)) = check_win_with_line(board) {
        return GameStatus::Won { mark, line };
    }

    if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_reachable(board: Board, mark: Mark, out: &mut HashSet<Board>) {
        if !out.insert(board) || evaluate_status(&board).is_terminal() {
            return;
        }
        for position in board.legal_moves() {
            let mut next = board;
            next.place(position.row, position.col, mark).unwrap();
            collect_reachable(next, mark.opponent(), out);
        }
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(check_win_with_line(&Board::empty()), None);
        assert_eq!(evaluate_status(&Board::empty()), GameStatus::InProgress);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_moves(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]).unwrap();
        let status = evaluate_status(&board);
        assert_eq!(
            status,
            GameStatus::Won {
                mark: Mark::X,
                line: WinningLine::new([pos(0, 0), pos(1, 1), pos(2, 2)]),
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let board = Board::from_moves(&[
            (0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2),
        ])
        .unwrap();
        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate_status(&board), GameStatus::Drawn);
    }

    #[test]
    fn test_column_win_for_o() {
        let board = Board::from_moves(&[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]).unwrap();
        let (mark, line) = check_win_with_line(&board).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(line.start(), pos(0, 2));
        assert_eq!(line.end(), pos(2, 2));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X completes the anti-diagonal with the ninth move.
        let board = Board::from_moves(&[
            (0, 1), (0, 0), (1, 0), (1, 2), (0, 2), (2, 1), (1, 1), (2, 2), (2, 0),
        ])
        .unwrap();
        assert!(board.is_full());
        let status = evaluate_status(&board);
        assert_eq!(status.winner(), Some(Mark::X));
        assert_eq!(status.winning_line().unwrap().cells, LINES[7]);
    }

    #[test]
    fn test_rows_are_reported_before_columns() {
        // X fills row 0 and column 0 at once; the row comes first in scan order.
        let board = Board::from_moves(&[
            (0, 1), (1, 1), (0, 2), (1, 2), (1, 0), (2, 1), (2, 0), (2, 2), (0, 0),
        ])
        .unwrap();
        let (mark, line) = check_win_with_line(&board).unwrap();
        assert_eq!(mark, Mark::X);
        assert_eq!(line.cells, LINES[0]);
    }

    #[test]
    fn test_reachable_boards_never_have_two_winning_marks() {
        let mut boards = HashSet::new();
        collect_reachable(Board::empty(), Mark::X, &mut boards);
        assert_eq!(boards.len(), 5478);

        for board in boards {
            let x_lines = LINES.iter().filter(|l| line_owner(&board, l) == Some(Mark::X)).count();
            let o_lines = LINES.iter().filter(|l| line_owner(&board, l) == Some(Mark::O)).count();
            assert!(x_lines == 0 || o_lines == 0, "both marks win on {:?}", board);

            let x_count = board.count(Mark::X);
            let o_count = board.count(Mark::O);
            assert!(x_count == o_count || x_count == o_count + 1);
        }
    }
}
