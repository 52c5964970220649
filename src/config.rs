//! Match configuration: who plays whom, and how long the computer pauses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Difficulty, Player};

const DEFAULT_AI_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsComputer {
        #[serde(default)]
        difficulty: Difficulty,
        #[serde(default = "default_computer")]
        computer: Player,
    },
}

impl GameMode {
    /// The computer's side and strength, if a computer plays.
    pub fn computer(self) -> Option<(Player, Difficulty)> {
        match self {
            Self::HumanVsHuman => None,
            Self::HumanVsComputer {
                difficulty,
                computer,
            } => Some((computer, difficulty)),
        }
    }
}

fn default_computer() -> Player {
    Player::White
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();

        assert_eq!(config, GameConfig::default());
        assert_eq!(config.mode.computer(), None);
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn computer_mode_parses_with_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            ai_delay_ms = 0

            [mode]
            kind = "human_vs_computer"
            difficulty = "professional"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.mode.computer(),
            Some((Player::White, Difficulty::Professional))
        );
        assert_eq!(config.ai_delay(), Duration::ZERO);
    }

    #[test]
    fn computer_can_play_black() {
        let config = GameConfig::from_toml_str(
            r#"
            mode = { kind = "human_vs_computer", computer = "black" }
            "#,
        )
        .unwrap();

        assert_eq!(
            config.mode.computer(),
            Some((Player::Black, Difficulty::Beginner))
        );
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let err = GameConfig::from_toml_str(
            r#"
            [mode]
            kind = "human_vs_computer"
            difficulty = "grandmaster"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("invalid game config"));
    }
}
