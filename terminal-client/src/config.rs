use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::{Difficulty, GameMode};

pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub mode: GameMode,
    pub computer_delay_ms: u64,
    pub show_coordinates: bool,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer(Difficulty::Optimal),
            computer_delay_ms: 400,
            show_coordinates: true,
        }
    }
}
