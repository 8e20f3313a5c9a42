use std::future::Future;

use crate::{ChannelId, MessageHandle, NotifyError};

/// Interactive controls attached to an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// Plain text, nothing attached.
    None,
    /// One tappable control per column, labelled 1..=columns.
    Columns(usize),
    /// Strip previously attached controls (game over).
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub controls: Controls,
}

impl Notification {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            controls: Controls::None,
        }
    }

    pub fn with_controls(text: impl Into<String>, controls: Controls) -> Self {
        Self {
            text: text.into(),
            controls,
        }
    }
}

/// Outbound side of the chat transport.
///
/// `edit` replaces the message behind a handle previously returned by `send`
/// for the same channel.
pub trait Notifier: Send + Sync + Clone + 'static {
    fn send(
        &self,
        channel: &ChannelId,
        notification: Notification,
    ) -> impl Future<Output = Result<MessageHandle, NotifyError>> + Send;

    fn edit(
        &self,
        channel: &ChannelId,
        handle: MessageHandle,
        notification: Notification,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
