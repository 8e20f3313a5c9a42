use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::connect_four::{BoardDimensions, ReminderSettings, SessionSettings};

pub const MAX_COLUMNS: usize = 10;
pub const MAX_ROWS: usize = 20;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub reminder: ReminderConfig,
    /// Senders allowed to talk to the bot. Empty means everyone.
    pub allowed_users: Vec<String>,
}

impl GameConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            dimensions: BoardDimensions {
                rows: self.board.rows,
                columns: self.board.columns,
                run_length: self.board.run_length,
            },
            reminder: self.reminder.enabled.then(|| ReminderSettings {
                wait: Duration::from_secs(self.reminder.wait_secs),
                poll: Duration::from_secs(self.reminder.poll_secs),
            }),
        }
    }

    pub fn is_allowed(&self, user: &str) -> bool {
        self.allowed_users.is_empty() || self.allowed_users.iter().any(|allowed| allowed == user)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.reminder.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    pub run_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            run_length: 4,
        }
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rows < 2 || self.rows > MAX_ROWS {
            return Err(format!("rows must be between 2 and {}", MAX_ROWS));
        }
        if self.columns < 2 || self.columns > MAX_COLUMNS {
            return Err(format!("columns must be between 2 and {}", MAX_COLUMNS));
        }
        if self.run_length < 2 {
            return Err("run_length must be at least 2".to_string());
        }
        let max_dimension = self.rows.max(self.columns);
        if self.run_length > max_dimension {
            return Err(format!(
                "run_length ({}) cannot exceed the largest board dimension ({})",
                self.run_length, max_dimension
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReminderConfig {
    pub enabled: bool,
    pub wait_secs: u64,
    pub poll_secs: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wait_secs: 300,
            poll_secs: 20,
        }
    }
}

impl Validate for ReminderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.poll_secs == 0 {
            return Err("poll_secs must be greater than 0".to_string());
        }
        if self.wait_secs == 0 {
            return Err("wait_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
