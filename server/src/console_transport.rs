use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use common::config::GameConfig;
use common::games::Notifier;
use common::games::connect_four::{InboundEvent, PlayerAction, Slot};
use common::{ChannelId, UserId, debug_log, log};

use crate::session_registry::SessionRegistry;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected '<channel> <user_id> <display_name> <command>', got {0:?}")]
    Malformed(String),
}

/// Parsed input line: who sent it and what it asks for.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedLine {
    pub sender: UserId,
    pub event: Option<InboundEvent>,
}

/// Splits `<channel> <user_id> <display_name> <command>`.
///
/// Unknown commands parse to `event: None` and are dropped like any chat
/// message that is not meant for the bot.
pub fn parse_line(line: &str) -> Result<ParsedLine, LineError> {
    let mut parts = line.split_whitespace();
    let (Some(channel), Some(user), Some(name), Some(command)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(LineError::Malformed(line.to_string()));
    };

    let sender = UserId::new(user);
    let action = match command {
        "/start_game" => Some(PlayerAction::BeginSetup),
        "/p1" | "/p2" => Some(PlayerAction::Register {
            slot: if command == "/p1" { Slot::First } else { Slot::Second },
            user: sender.clone(),
            display_name: name.to_string(),
        }),
        "/quit" => Some(PlayerAction::Quit {
            user: sender.clone(),
        }),
        digits => digits
            .parse::<usize>()
            .ok()
            .filter(|column| *column > 0)
            .map(|column| PlayerAction::Move {
                user: sender.clone(),
                column,
            }),
    };

    Ok(ParsedLine {
        sender,
        event: action.map(|action| InboundEvent::new(ChannelId::new(channel), action)),
    })
}

/// Reads chat lines from a text stream and feeds them to the registry.
pub struct ConsoleTransport<N: Notifier> {
    registry: SessionRegistry<N>,
    config: GameConfig,
}

impl<N: Notifier> ConsoleTransport<N> {
    pub fn new(registry: SessionRegistry<N>, config: GameConfig) -> Self {
        Self { registry, config }
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&self, reader: R) -> std::io::Result<()> {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            self.handle_line(&line).await;
        }
        log!("Input closed");
        Ok(())
    }

    pub async fn handle_line(&self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let parsed = match parse_line(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                log!("Ignoring input: {}", e);
                return;
            }
        };

        if !self.config.is_allowed(parsed.sender.as_str()) {
            debug_log!(
                "Dropping message from sender {} not on the allow list",
                parsed.sender
            );
            return;
        }

        let Some(event) = parsed.event else {
            return;
        };

        let channel = event.channel.clone();
        if let Err(e) = self.registry.dispatch(event).await {
            debug_log!("[channel:{}] Rejected: {}", channel, e);
        }
    }
}
