use super::types::Slot;
use crate::{ChannelId, UserId};

/// Something a participant did in a channel, already authorised by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    BeginSetup,
    Register {
        slot: Slot,
        user: UserId,
        display_name: String,
    },
    Move {
        user: UserId,
        column: usize,
    },
    Quit {
        user: UserId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub channel: ChannelId,
    pub action: PlayerAction,
}

impl InboundEvent {
    pub fn new(channel: ChannelId, action: PlayerAction) -> Self {
        Self { channel, action }
    }
}
