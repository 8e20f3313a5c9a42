use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::messages::{REMINDER_TEMPLATES, reminder};
use super::settings::ReminderSettings;
use crate::games::{Notification, Notifier, SessionRng};
use crate::{ChannelId, debug_log, log};

enum ReminderCommand {
    Arm { player: String },
    Stop,
}

struct PendingReminder {
    deadline: Instant,
    player: String,
}

/// Background task that nudges the player on the clock after an idle period.
///
/// Deadline and player live inside the task and only change through the
/// command channel, so the loop never sees half of an update.
pub struct Reminder {
    commands: mpsc::UnboundedSender<ReminderCommand>,
    task: JoinHandle<()>,
}

impl Reminder {
    /// Spawns a disarmed reminder loop. Must be called inside a tokio runtime.
    pub fn spawn<N: Notifier>(
        channel: ChannelId,
        notifier: N,
        settings: ReminderSettings,
        rng: SessionRng,
    ) -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_reminder_loop(channel, notifier, settings, rng, receiver));
        Self { commands, task }
    }

    /// Starts a fresh wait window for `player`, replacing any pending one.
    pub fn arm(&self, player: &str) {
        let command = ReminderCommand::Arm {
            player: player.to_string(),
        };
        if self.commands.send(command).is_err() {
            log!("Reminder loop is gone, cannot arm for {}", player);
        }
    }

    /// Stops the loop and waits for it to exit. Nothing fires after this returns.
    pub async fn stop(self) {
        let _ = self.commands.send(ReminderCommand::Stop);
        if let Err(e) = self.task.await {
            log!("Reminder loop ended abnormally: {}", e);
        }
    }
}

async fn run_reminder_loop<N: Notifier>(
    channel: ChannelId,
    notifier: N,
    settings: ReminderSettings,
    mut rng: SessionRng,
    mut commands: mpsc::UnboundedReceiver<ReminderCommand>,
) {
    debug_log!("[channel:{}] reminder loop starting (seed {})", channel, rng.seed());
    let mut ticker = tokio::time::interval(settings.poll);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut pending: Option<PendingReminder> = None;

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => match command {
                Some(ReminderCommand::Arm { player }) => {
                    pending = Some(PendingReminder {
                        deadline: Instant::now() + settings.wait,
                        player,
                    });
                }
                Some(ReminderCommand::Stop) | None => break,
            },

            _ = ticker.tick() => {
                let due = pending
                    .as_ref()
                    .is_some_and(|reminder| Instant::now() >= reminder.deadline);
                if !due {
                    continue;
                }
                let Some(PendingReminder { player, .. }) = pending.take() else {
                    continue;
                };
                let Some(template) = rng.pick(&REMINDER_TEMPLATES) else {
                    continue;
                };

                log!("[channel:{}] Sending reminder to {}", channel, player);
                let text = reminder(template, &player);
                if let Err(e) = notifier.send(&channel, Notification::text(text)).await {
                    log!("[channel:{}] Failed to send reminder: {}", channel, e);
                }
            }
        }
    }

    debug_log!("[channel:{}] reminder loop stopped", channel);
}
