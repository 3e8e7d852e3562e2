use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{FirstPlayerMode, Mark};

const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub human_mark: Mark,
    pub first_player: FirstPlayerMode,
    /// Pause before the computer answers, so its move does not land instantly.
    pub thinking_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn computer_mark(&self) -> Option<Mark> {
        self.human_mark.opponent()
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::Cow,
            first_player: FirstPlayerMode::Human,
            thinking_delay_ms: 500,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be Cow or Milk".to_string());
        }
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms ({}) cannot exceed {}",
                self.thinking_delay_ms, MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }
}
