use super::error::TicTacToeError;
use super::types::{BOARD_SIZE, Cell, Mark, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replays `moves` alternately as X and O, starting with X.
    pub fn from_moves(moves: &[(usize, usize)]) -> Result<Self, TicTacToeError> {
        let mut board = Self::empty();
        let mut mark = Mark::X;
        for &(row, col) in moves {
            board.place(row, col, mark)?;
            mark = mark.opponent();
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), TicTacToeError> {
        let position = Position::new(row, col);
        if !position.is_on_board() {
            return Err(TicTacToeError::out_of_bounds(position));
        }

        if !self.cells[row][col].is_empty() {
            return Err(TicTacToeError::cell_occupied(position));
        }

        self.cells[row][col] = Cell::from(mark);
        Ok(())
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Base-3 encoding of the cells in row-major order (Empty = 0, X = 1, O = 2).
    pub fn fingerprint(&self) -> u32 {
        self.cells.iter().flatten().fold(0, |acc, cell| {
            acc * 3
                + match cell {
                    Cell::Empty => 0,
                    Cell::X => 1,
                    Cell::O => 2,
                }
        })
    }
}
