use std::collections::HashMap;
use std::io::{Stdout, Write};
use std::sync::{Arc, Mutex};

use common::games::{Controls, Notification, Notifier};
use common::{ChannelId, MessageHandle, NotifyError};

struct ConsoleOutput<W> {
    writer: W,
    next_handle: u64,
    issued: HashMap<MessageHandle, ChannelId>,
}

/// Prints outbound messages as indented text blocks, one per send or edit.
pub struct ConsoleNotifier<W> {
    output: Arc<Mutex<ConsoleOutput<W>>>,
}

impl<W> Clone for ConsoleNotifier<W> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
        }
    }
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send + 'static> ConsoleNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self {
            output: Arc::new(Mutex::new(ConsoleOutput {
                writer,
                next_handle: 1,
                issued: HashMap::new(),
            })),
        }
    }

    fn write_message(
        &self,
        channel: &ChannelId,
        edit: Option<MessageHandle>,
        notification: &Notification,
    ) -> Result<MessageHandle, NotifyError> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| NotifyError::Delivery("console output lock poisoned".to_string()))?;

        let handle = match edit {
            Some(handle) => {
                if output.issued.get(&handle) != Some(channel) {
                    return Err(NotifyError::StaleHandle(handle));
                }
                handle
            }
            None => {
                let handle = MessageHandle::new(output.next_handle);
                output.next_handle += 1;
                output.issued.insert(handle, channel.clone());
                handle
            }
        };

        let header = match edit {
            Some(_) => format!("[{}] edit {}:", channel, handle),
            None => format!("[{}] {}:", channel, handle),
        };
        let mut block = vec![header];
        block.extend(notification.text.lines().map(|line| format!("    {}", line)));
        match notification.controls {
            Controls::Columns(columns) => {
                let buttons: Vec<String> = (1..=columns).map(|c| format!("[{}]", c)).collect();
                block.push(format!("    {}", buttons.join(" ")));
            }
            Controls::Remove => block.push("    (controls removed)".to_string()),
            Controls::None => {}
        }

        let delivery = |e: std::io::Error| NotifyError::Delivery(e.to_string());
        writeln!(output.writer, "{}", block.join("\n")).map_err(delivery)?;
        output.writer.flush().map_err(delivery)?;
        Ok(handle)
    }
}

impl<W: Write + Send + 'static> Notifier for ConsoleNotifier<W> {
    async fn send(
        &self,
        channel: &ChannelId,
        notification: Notification,
    ) -> Result<MessageHandle, NotifyError> {
        self.write_message(channel, None, &notification)
    }

    async fn edit(
        &self,
        channel: &ChannelId,
        handle: MessageHandle,
        notification: Notification,
    ) -> Result<(), NotifyError> {
        self.write_message(channel, Some(handle), &notification).map(|_| ())
    }
}

#[cfg(test)]
impl ConsoleNotifier<Vec<u8>> {
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    pub fn contents(&self) -> String {
        let output = self.output.lock().unwrap();
        String::from_utf8_lossy(&output.writer).into_owned()
    }
}
