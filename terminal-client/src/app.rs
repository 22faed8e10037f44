use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::TicTacToeSession;

use crate::config::ClientConfig;
use crate::input::{Command, HELP_TEXT, MODE_MENU_TEXT, parse_command, parse_mode_choice};
use crate::render::{mode_text, render_board, status_text};

pub struct TerminalApp<R: BufRead, W: Write> {
    session: TicTacToeSession,
    config: ClientConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(session: TicTacToeSession, config: ClientConfig, input: R, output: W) -> Self {
        Self {
            session,
            config,
            input,
            output,
        }
    }

    pub fn session(&self) -> &TicTacToeSession {
        &self.session
    }

    /// Runs until the player quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", mode_text(self.session.mode()))?;
        writeln!(self.output, "Type help for the list of commands.")?;
        self.draw()?;

        loop {
            if self.session.is_computer_turn() {
                self.play_computer_turn()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match parse_command(&line) {
                Ok(Command::Move { row, col }) => match self.session.submit_move(row, col) {
                    Ok(_) => self.draw()?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
                Ok(Command::Restart) => {
                    self.session.restart();
                    self.draw()?;
                }
                Ok(Command::Menu) => self.choose_mode()?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(Command::Quit) => break,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        log!("Terminal session finished: {}", status_text(&self.session));
        Ok(())
    }

    fn play_computer_turn(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", status_text(&self.session))?;
        if self.config.computer_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.computer_delay_ms));
        }

        match self.session.request_computer_move() {
            Ok(applied) => {
                writeln!(self.output, "Computer played {}", applied.position)?;
                self.draw()
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn choose_mode(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", MODE_MENU_TEXT)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        match parse_mode_choice(&line) {
            Ok(mode) => {
                self.session.set_mode(mode);
                self.config.mode = mode;
                writeln!(self.output, "{}", mode_text(mode))?;
                self.draw()
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let board = render_board(
            &self.session.board(),
            self.session.winning_line(),
            self.session.last_move(),
            self.config.show_coordinates,
        );
        write!(self.output, "\n{}", board)?;
        writeln!(self.output, "{}", status_text(&self.session))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::tictactoe::{Board, Difficulty, GameMode, GameStatus, Mark};

    fn run_script(mode: GameMode, script: &str) -> (TicTacToeSession, String) {
        let config = ClientConfig {
            mode,
            computer_delay_ms: 0,
            show_coordinates: true,
        };
        let session = TicTacToeSession::with_seed(mode, 17);
        let mut output = Vec::new();
        let session = {
            let mut app = TerminalApp::new(session, config, Cursor::new(script.to_string()), &mut output);
            app.run().unwrap();
            app.session().clone()
        };
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_two_player_game_to_win() {
        let (session, output) = run_script(GameMode::TwoPlayer, "0 0\n1 0\n0 1\n1 1\n0 2\n");
        assert_eq!(session.status().winner(), Some(Mark::X));
        assert!(output.contains("Winner: X!"));
        assert!(output.contains("[X]|[X]|[X]"));
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let (session, output) = run_script(GameMode::TwoPlayer, "1 1\n1 1\n3 0\nfoo\n");
        assert_eq!(session.board().filled_count(), 1);
        assert!(output.contains("cell is already marked"));
        assert!(output.contains("position out of bounds"));
        assert!(output.contains("Unknown command: foo"));
    }

    #[test]
    fn test_computer_replies_after_human_move() {
        let (session, output) = run_script(GameMode::VsComputer(Difficulty::Optimal), "0 0\n");
        assert_eq!(session.board().count(Mark::O), 1);
        assert_eq!(session.last_move(), Some(tictactoe_engine::tictactoe::Position::new(1, 1)));
        assert!(output.contains("Computer played (1, 1)"));
    }

    #[test]
    fn test_restart_and_menu() {
        let (session, output) = run_script(GameMode::TwoPlayer, "1 1\nrestart\nmenu\n3\nquit\n1 1\n");
        assert_eq!(session.board(), Board::empty());
        assert_eq!(session.mode(), GameMode::VsComputer(Difficulty::Heuristic));
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(output.contains("You (X) vs computer (O), heuristic"));
    }
}
