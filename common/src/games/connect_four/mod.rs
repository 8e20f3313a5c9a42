mod board;
mod event;
mod messages;
mod reminder;
mod render;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use event::{InboundEvent, PlayerAction};
pub use messages::REMINDER_TEMPLATES;
pub use reminder::Reminder;
pub use render::render_board;
pub use session::{ConnectFourSession, PlayerSlot, SessionPhase};
pub use settings::{BoardDimensions, ReminderSettings, SessionSettings};
pub use types::{Axis, Cell, PlaceOutcome, Position, Slot};
pub use win_detector::{WinningRun, find_win};
