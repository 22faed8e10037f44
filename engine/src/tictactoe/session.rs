use crate::log;
use crate::session_rng::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::TicTacToeError;
use super::types::{GameMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector::evaluate_status;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeSessionState {
    AwaitingMove(Mark),
    Finished(GameStatus),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub position: Position,
    pub mark: Mark,
    pub status: GameStatus,
}

/// One game of tic-tac-toe driven by a single presentation layer.
///
/// Every mutating call is atomic: on `Err` the board, the turn and the status are left
/// exactly as they were.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    board: Board,
    state: TicTacToeSessionState,
    mode: GameMode,
    rng: SessionRng,
    last_move: Option<Position>,
}

impl TicTacToeSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, SessionRng::from_random())
    }

    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, SessionRng::new(seed))
    }

    fn with_rng(mode: GameMode, rng: SessionRng) -> Self {
        log!("[session:{}] New game, mode: {}", rng.seed(), mode);
        Self {
            board: Board::empty(),
            state: TicTacToeSessionState::AwaitingMove(Mark::X),
            mode,
            rng,
            last_move: None,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn state(&self) -> TicTacToeSessionState {
        self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Mark to move, or `None` once the game is over.
    pub fn current_mark(&self) -> Option<Mark> {
        match self.state {
            TicTacToeSessionState::AwaitingMove(mark) => Some(mark),
            TicTacToeSessionState::Finished(_) => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.state {
            TicTacToeSessionState::AwaitingMove(_) => GameStatus::InProgress,
            TicTacToeSessionState::Finished(status) => status,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status().winning_line()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_mark()
            .is_some_and(|mark| self.mode.is_computer(mark))
    }

    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<AppliedMove, TicTacToeError> {
        let result = self
            .human_mark()
            .and_then(|mark| self.apply_move(Position::new(row, col), mark));

        if let Err(ref e) = result {
            log!("[session:{}] Rejected move at ({}, {}): {}", self.seed(), row, col, e);
        }
        result
    }

    pub fn request_computer_move(&mut self) -> Result<AppliedMove, TicTacToeError> {
        let mark = self.mark_to_move()?;
        let difficulty = match self.mode {
            GameMode::VsComputer(difficulty) if self.mode.is_computer(mark) => difficulty,
            _ => {
                log!("[session:{}] Computer move requested on {}'s human turn", self.seed(), mark);
                return Err(TicTacToeError::NotYourTurn(mark));
            }
        };

        let input = BotInput::new(self.board, mark);
        let position = calculate_move(difficulty, input, &mut self.rng)
            .ok_or(TicTacToeError::GameAlreadyFinished)?;

        log!("[session:{}] Computer ({}) chose {}", self.seed(), difficulty, position);
        self.apply_move(position, mark)
    }

    /// Starts a new game with the same mode. The random stream continues from where it was.
    pub fn restart(&mut self) {
        self.board = Board::empty();
        self.state = TicTacToeSessionState::AwaitingMove(Mark::X);
        self.last_move = None;
        log!("[session:{}] Restarted, mode: {}", self.seed(), self.mode);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    fn mark_to_move(&self) -> Result<Mark, TicTacToeError> {
        self.current_mark().ok_or(TicTacToeError::GameAlreadyFinished)
    }

    fn human_mark(&self) -> Result<Mark, TicTacToeError> {
        let mark = self.mark_to_move()?;
        if self.mode.is_computer(mark) {
            return Err(TicTacToeError::NotYourTurn(mark));
        }
        Ok(mark)
    }

    fn apply_move(&mut self, position: Position, mark: Mark) -> Result<AppliedMove, TicTacToeError> {
        self.board.place(position.row, position.col, mark)?;
        self.last_move = Some(position);

        let status = evaluate_status(&self.board);
        self.state = match status {
            GameStatus::InProgress => TicTacToeSessionState::AwaitingMove(mark.opponent()),
            finished => TicTacToeSessionState::Finished(finished),
        };

        match status {
            GameStatus::Won { mark, line } => {
                log!("[session:{}] {} won from {} to {}", self.seed(), mark, line.start(), line.end())
            }
            GameStatus::Drawn => log!("[session:{}] Draw", self.seed()),
            GameStatus::InProgress => log!("[session:{}] {} played {}", self.seed(), mark, position),
        }

        Ok(AppliedMove { position, mark, status })
    }
}
