use crate::games::connect_four::Slot;

/// Why the board refused a chip. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("column {column} is outside 1..={columns}")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell at row {row}, column {column} is already occupied")]
    CellOccupied { row: usize, column: usize },
}

/// Rejected session input. The session stays exactly where it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no game is in progress")]
    NotInProgress,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("setup has not started")]
    NotSetUp,

    #[error("it is not this player's turn")]
    OutOfTurn,

    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("{slot} is already taken")]
    DuplicateRegistration { slot: Slot },

    #[error("sender is not a player in this game")]
    UnknownPlayer,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("transport failed to deliver message: {0}")]
    Delivery(String),

    #[error("message {0} can no longer be edited")]
    StaleHandle(crate::MessageHandle),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
