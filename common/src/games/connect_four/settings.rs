use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDimensions {
    pub rows: usize,
    pub columns: usize,
    pub run_length: usize,
}

impl BoardDimensions {
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            run_length: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSettings {
    /// Idle time after a turn starts before the player is nudged.
    pub wait: Duration,
    /// How often the reminder loop wakes to check the deadline.
    pub poll: Duration,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            wait: Duration::from_secs(300),
            poll: Duration::from_secs(20),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub dimensions: BoardDimensions,
    /// `None` disables reminders entirely.
    pub reminder: Option<ReminderSettings>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            dimensions: BoardDimensions::default(),
            reminder: Some(ReminderSettings::default()),
        }
    }
}
