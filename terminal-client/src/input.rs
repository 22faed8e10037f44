use tictactoe_engine::tictactoe::{Difficulty, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { row: usize, col: usize },
    Restart,
    Menu,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>   place your mark, rows and columns are numbered 0..2
  restart       start the game again in the same mode
  menu          choose another game mode
  help          show this help
  quit          leave the game";

pub const MODE_MENU_TEXT: &str = "\
Choose game mode:
  1) two players
  2) vs computer, easy (random)
  3) vs computer, medium (heuristic)
  4) vs computer, hard (optimal)";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err("Enter a move like \"1 2\" or type help".to_string()),
        "r" | "restart" => return Ok(Command::Restart),
        "m" | "menu" => return Ok(Command::Menu),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Invalid row: {}", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Invalid column: {}", col))?;
            Ok(Command::Move { row, col })
        }
        _ => Err(format!("Unknown command: {}", line)),
    }
}

pub fn parse_mode_choice(line: &str) -> Result<GameMode, String> {
    match line.trim() {
        "1" => Ok(GameMode::TwoPlayer),
        "2" => Ok(GameMode::VsComputer(Difficulty::Random)),
        "3" => Ok(GameMode::VsComputer(Difficulty::Heuristic)),
        "4" => Ok(GameMode::VsComputer(Difficulty::Optimal)),
        other => Err(format!("Unknown mode: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_command("1 2"), Ok(Command::Move { row: 1, col: 2 }));
        assert_eq!(parse_command("  0,0 "), Ok(Command::Move { row: 0, col: 0 }));
        assert_eq!(parse_command("2, 1"), Ok(Command::Move { row: 2, col: 1 }));
    }

    #[test]
    fn test_out_of_range_numbers_are_left_to_the_engine() {
        assert_eq!(parse_command("5 9"), Ok(Command::Move { row: 5, col: 9 }));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("R"), Ok(Command::Restart));
        assert_eq!(parse_command("menu"), Ok(Command::Menu));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("-1 0").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("jump").is_err());
    }

    #[test]
    fn test_parse_mode_choice() {
        assert_eq!(parse_mode_choice("1"), Ok(GameMode::TwoPlayer));
        assert_eq!(parse_mode_choice(" 4\n"), Ok(GameMode::VsComputer(Difficulty::Optimal)));
        assert!(parse_mode_choice("5").is_err());
    }
}
