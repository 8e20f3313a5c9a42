use super::board::Board;
use super::event::PlayerAction;
use super::messages;
use super::reminder::Reminder;
use super::render::render_board;
use super::settings::SessionSettings;
use super::types::{PlaceOutcome, Slot};
use crate::games::{Controls, Notification, Notifier, SessionRng};
use crate::{ChannelId, InvalidMove, MessageHandle, SessionError, UserId, debug_log, log};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlot {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingPlayers,
    InProgress,
}

/// One game of Connect Four in one channel.
///
/// Operations take `&mut self`; whoever owns the session serializes events
/// for it. Every rejected input is reported through the notifier and leaves
/// the session where it was.
pub struct ConnectFourSession<N: Notifier> {
    channel: ChannelId,
    settings: SessionSettings,
    notifier: N,
    board: Board,
    players: [Option<PlayerSlot>; 2],
    current: Slot,
    setup_started: bool,
    game_started: bool,
    game_message: Option<MessageHandle>,
    reminder: Option<Reminder>,
    reminder_seed: Option<u64>,
}

impl<N: Notifier> ConnectFourSession<N> {
    pub fn new(channel: ChannelId, settings: SessionSettings, notifier: N) -> Self {
        Self {
            channel,
            settings,
            notifier,
            board: Board::new(settings.dimensions),
            players: [None, None],
            current: Slot::First,
            setup_started: false,
            game_started: false,
            game_message: None,
            reminder: None,
            reminder_seed: None,
        }
    }

    /// Fixes the seed reminders use to pick their message.
    pub fn with_reminder_seed(mut self, seed: u64) -> Self {
        self.reminder_seed = Some(seed);
        self
    }

    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_started {
            SessionPhase::InProgress
        } else if self.setup_started {
            SessionPhase::AwaitingPlayers
        } else {
            SessionPhase::Idle
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_slot(&self) -> Slot {
        self.current
    }

    pub fn player(&self, slot: Slot) -> Option<&PlayerSlot> {
        self.players[slot.index()].as_ref()
    }

    pub fn has_reminder(&self) -> bool {
        self.reminder.is_some()
    }

    pub async fn apply(&mut self, action: PlayerAction) -> Result<(), SessionError> {
        match action {
            PlayerAction::BeginSetup => {
                self.begin_setup().await;
                Ok(())
            }
            PlayerAction::Register {
                slot,
                user,
                display_name,
            } => self.register_player(slot, user, display_name).await,
            PlayerAction::Move { user, column } => {
                self.submit_move(&user, column).await.map(|_| ())
            }
            PlayerAction::Quit { user } => self.quit(&user).await,
        }
    }

    pub async fn begin_setup(&mut self) {
        let text = match self.phase() {
            SessionPhase::Idle => {
                self.setup_started = true;
                log!("[channel:{}] Setup started", self.channel);
                messages::welcome()
            }
            SessionPhase::AwaitingPlayers => {
                let missing = Slot::ALL
                    .into_iter()
                    .find(|slot| self.player(*slot).is_none())
                    .unwrap_or(Slot::First);
                messages::still_needs_player(missing)
            }
            SessionPhase::InProgress => messages::already_started(),
        };
        self.say(text).await;
    }

    /// Claims `slot` for `user`. The game starts as soon as both slots are filled.
    pub async fn register_player(
        &mut self,
        slot: Slot,
        user: UserId,
        display_name: String,
    ) -> Result<(), SessionError> {
        if self.game_started {
            debug_log!("[channel:{}] {} tried to register mid-game", self.channel, user);
            return Err(SessionError::AlreadyStarted);
        }

        if let Some(existing) = self.player(slot) {
            let text = messages::already_player(&existing.name, slot);
            self.say(text).await;
            return Err(SessionError::DuplicateRegistration { slot });
        }

        self.setup_started = true;
        log!("[channel:{}] {} ({}) registered as {}", self.channel, display_name, user, slot);
        let text = messages::player_set(&display_name, slot);
        self.players[slot.index()] = Some(PlayerSlot {
            id: user,
            name: display_name,
        });
        self.say(text).await;

        if self.players.iter().all(Option::is_some) {
            self.start_game().await;
        }
        Ok(())
    }

    pub async fn submit_move(
        &mut self,
        user: &UserId,
        column: usize,
    ) -> Result<PlaceOutcome, SessionError> {
        if !self.game_started {
            debug_log!(
                "[channel:{}] Ignoring move from {} before the game started",
                self.channel,
                user
            );
            return Err(SessionError::NotInProgress);
        }
        let Some(current) = self.player(self.current).cloned() else {
            return Err(SessionError::NotInProgress);
        };

        // Out-of-range columns from anyone but the player on turn are dropped silently.
        let columns = self.board.columns();
        if current.id != *user && !(1..=columns).contains(&column) {
            debug_log!(
                "[channel:{}] Ignoring column {} from {} while it is {}'s turn",
                self.channel,
                column,
                user,
                current.name
            );
            return Err(InvalidMove::ColumnOutOfRange { column, columns }.into());
        }

        if current.id != *user {
            let text = messages::not_your_turn(&current.name, &render_board(&self.board));
            self.show_board(text, self.column_controls()).await;
            return Err(SessionError::OutOfTurn);
        }

        let outcome = match self.board.place_chip(self.current, column) {
            Ok(outcome) => outcome,
            Err(invalid) => {
                debug_log!(
                    "[channel:{}] {} made an invalid move: {}",
                    self.channel,
                    current.name,
                    invalid
                );
                let text = messages::try_again(&render_board(&self.board));
                self.show_board(text, self.column_controls()).await;
                self.arm_reminder();
                return Err(invalid.into());
            }
        };

        let board_text = render_board(&self.board);
        match outcome {
            PlaceOutcome::Placed => {
                self.current = self.current.other();
                let next = self.player(self.current).map(|p| p.name.clone()).unwrap_or_default();
                self.show_board(messages::turn(&next, &board_text), self.column_controls()).await;
                self.arm_reminder();
            }
            PlaceOutcome::Won(axis) => {
                log!("[channel:{}] {} won along the {} axis", self.channel, current.name, axis);
                self.show_board(messages::wins(&current.name, &board_text), Controls::Remove).await;
                self.reset().await;
            }
            PlaceOutcome::Tied => {
                log!("[channel:{}] Game tied", self.channel);
                self.show_board(messages::tie(&board_text), Controls::Remove).await;
                self.reset().await;
            }
        }
        Ok(outcome)
    }

    /// Abandons setup, or forfeits the game for `user` if one is running.
    pub async fn quit(&mut self, user: &UserId) -> Result<(), SessionError> {
        if !self.setup_started {
            self.say(messages::cannot_quit_unstarted()).await;
            return Err(SessionError::NotSetUp);
        }

        if !self.game_started {
            log!("[channel:{}] Setup abandoned by {}", self.channel, user);
            self.say(messages::setup_reset()).await;
            self.reset().await;
            return Ok(());
        }

        let Some(quitter) = Slot::ALL
            .into_iter()
            .find(|slot| self.player(*slot).is_some_and(|p| p.id == *user))
        else {
            debug_log!("[channel:{}] Ignoring quit from non-player {}", self.channel, user);
            return Err(SessionError::UnknownPlayer);
        };

        let quitter_name = self.player(quitter).map(|p| p.name.clone()).unwrap_or_default();
        let winner_name = self.player(quitter.other()).map(|p| p.name.clone()).unwrap_or_default();
        log!("[channel:{}] {} quit, {} wins", self.channel, quitter_name, winner_name);

        let text = messages::quitter(&quitter_name, &winner_name, &render_board(&self.board));
        self.show_board(text, Controls::Remove).await;
        self.reset().await;
        Ok(())
    }

    /// Back to an empty board with no players. Waits for the reminder loop to exit.
    pub async fn reset(&mut self) {
        if let Some(reminder) = self.reminder.take() {
            reminder.stop().await;
        }
        self.board.reset();
        self.players = [None, None];
        self.current = Slot::First;
        self.setup_started = false;
        self.game_started = false;
        self.game_message = None;
        debug_log!("[channel:{}] Session reset", self.channel);
    }

    async fn start_game(&mut self) {
        self.game_started = true;
        self.current = Slot::First;
        log!("[channel:{}] Game started", self.channel);

        self.say(messages::games_begin()).await;

        let first = self.player(Slot::First).map(|p| p.name.clone()).unwrap_or_default();
        let text = messages::turn(&first, &render_board(&self.board));
        let notification = Notification::with_controls(text, self.column_controls());
        match self.notifier.send(&self.channel, notification).await {
            Ok(handle) => self.game_message = Some(handle),
            Err(e) => log!("[channel:{}] Failed to send board: {}", self.channel, e),
        }

        if let Some(settings) = self.settings.reminder {
            if let Some(stale) = self.reminder.take() {
                stale.stop().await;
            }
            let rng = match self.reminder_seed {
                Some(seed) => SessionRng::new(seed),
                None => SessionRng::from_random(),
            };
            self.reminder = Some(Reminder::spawn(
                self.channel.clone(),
                self.notifier.clone(),
                settings,
                rng,
            ));
        }
        self.arm_reminder();
    }

    fn arm_reminder(&self) {
        let Some(reminder) = &self.reminder else {
            return;
        };
        if let Some(player) = self.player(self.current) {
            reminder.arm(&player.name);
        }
    }

    fn column_controls(&self) -> Controls {
        Controls::Columns(self.board.columns())
    }

    async fn say(&self, text: String) {
        if let Err(e) = self.notifier.send(&self.channel, Notification::text(text)).await {
            log!("[channel:{}] Failed to send message: {}", self.channel, e);
        }
    }

    /// Updates the board message in place, or sends a new one if there is none.
    async fn show_board(&mut self, text: String, controls: Controls) {
        let notification = Notification::with_controls(text, controls);
        let result = match self.game_message {
            Some(handle) => self.notifier.edit(&self.channel, handle, notification).await,
            None => match self.notifier.send(&self.channel, notification).await {
                Ok(handle) => {
                    self.game_message = Some(handle);
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };
        if let Err(e) = result {
            log!("[channel:{}] Failed to update board: {}", self.channel, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::games::connect_four::{Axis, BoardDimensions, REMINDER_TEMPLATES, ReminderSettings};
    use crate::games::testing::{RecordingNotifier, Sent};

    fn alice() -> UserId {
        UserId::new("100")
    }

    fn bob() -> UserId {
        UserId::new("200")
    }

    fn session_with(
        settings: SessionSettings,
    ) -> (ConnectFourSession<RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let session = ConnectFourSession::new(ChannelId::new("room"), settings, notifier.clone())
            .with_reminder_seed(11);
        (session, notifier)
    }

    fn quiet_session() -> (ConnectFourSession<RecordingNotifier>, RecordingNotifier) {
        session_with(SessionSettings {
            dimensions: BoardDimensions::default(),
            reminder: None,
        })
    }

    async fn start(session: &mut ConnectFourSession<RecordingNotifier>) {
        session.register_player(Slot::First, alice(), "Alice".to_string()).await.unwrap();
        session.register_player(Slot::Second, bob(), "Bob".to_string()).await.unwrap();
    }

    fn reminding_session() -> (ConnectFourSession<RecordingNotifier>, RecordingNotifier) {
        session_with(SessionSettings {
            dimensions: BoardDimensions::default(),
            reminder: Some(ReminderSettings {
                wait: Duration::from_secs(300),
                poll: Duration::from_secs(20),
            }),
        })
    }

    fn is_reminder_for(text: &str, player: &str) -> bool {
        REMINDER_TEMPLATES
            .iter()
            .any(|template| template.replace("{}", player) == text)
    }

    fn reminders(notifier: &RecordingNotifier) -> Vec<String> {
        notifier
            .texts()
            .into_iter()
            .filter(|t| is_reminder_for(t, "Alice") || is_reminder_for(t, "Bob"))
            .collect()
    }

    #[tokio::test]
    async fn test_begin_setup_reports_progress() {
        let (mut session, notifier) = quiet_session();

        session.begin_setup().await;
        assert_eq!(session.phase(), SessionPhase::AwaitingPlayers);
        assert!(notifier.texts()[0].starts_with("~~~~ Welcome to Connect 4! ~~~~"));

        session.begin_setup().await;
        assert_eq!(notifier.texts()[1], "Player 1 still needs to be set. Use /p1 to do so.");

        session.register_player(Slot::First, alice(), "Alice".to_string()).await.unwrap();
        session.begin_setup().await;
        assert_eq!(
            notifier.last().unwrap().notification().text,
            "Player 2 still needs to be set. Use /p2 to do so."
        );

        session.register_player(Slot::Second, bob(), "Bob".to_string()).await.unwrap();
        session.begin_setup().await;
        assert_eq!(
            notifier.last().unwrap().notification().text,
            "The game has already started silly goose!"
        );
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[tokio::test]
    async fn test_registration_in_any_order_starts_game() {
        let (mut session, notifier) = quiet_session();

        session.register_player(Slot::Second, bob(), "Bob".to_string()).await.unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingPlayers);
        session.register_player(Slot::First, alice(), "Alice".to_string()).await.unwrap();

        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.current_slot(), Slot::First);

        let texts = notifier.texts();
        assert_eq!(texts[0], "Bob has been set as Player 2.");
        assert_eq!(texts[1], "Alice has been set as Player 1.");
        assert_eq!(texts[2], "Let the games begin!");
        assert!(texts[3].starts_with("Alice's turn!\n"));
        assert_eq!(notifier.last().unwrap().notification().controls, Controls::Columns(7));
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_rejected() {
        let (mut session, notifier) = quiet_session();
        session.register_player(Slot::First, alice(), "Alice".to_string()).await.unwrap();

        let result = session.register_player(Slot::First, bob(), "Bob".to_string()).await;

        assert_eq!(result, Err(SessionError::DuplicateRegistration { slot: Slot::First }));
        assert_eq!(notifier.last().unwrap().notification().text, "Alice is already Player 1!");
        assert_eq!(session.player(Slot::First).unwrap().id, alice());
        assert!(session.player(Slot::Second).is_none());
    }

    #[tokio::test]
    async fn test_registration_after_start_is_silent() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;
        let sent = notifier.len();

        let result = session
            .register_player(Slot::Second, UserId::new("300"), "Carol".to_string())
            .await;

        assert_eq!(result, Err(SessionError::AlreadyStarted));
        assert_eq!(notifier.len(), sent);
        assert_eq!(session.player(Slot::Second).unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn test_move_before_start_is_silent_no_op() {
        let (mut session, notifier) = quiet_session();
        session.register_player(Slot::First, alice(), "Alice".to_string()).await.unwrap();
        let sent = notifier.len();

        assert_eq!(session.submit_move(&alice(), 4).await, Err(SessionError::NotInProgress));
        assert_eq!(notifier.len(), sent);
        assert_eq!(session.board().move_count(), 0);
    }

    #[tokio::test]
    async fn test_out_of_turn_move_changes_nothing() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;

        let result = session.submit_move(&bob(), 4).await;

        assert_eq!(result, Err(SessionError::OutOfTurn));
        assert_eq!(session.board().move_count(), 0);
        assert_eq!(session.current_slot(), Slot::First);
        let last = notifier.last().unwrap();
        assert!(last.is_edit());
        assert!(last.notification().text.starts_with("It's not your turn! It's Alice's turn."));
    }

    #[tokio::test]
    async fn test_accepted_move_passes_turn_and_edits_board() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;
        let board_handle = match notifier.last().unwrap() {
            Sent::New { handle, .. } => handle,
            Sent::Edit { .. } => panic!("board should be a new message"),
        };

        assert_eq!(session.submit_move(&alice(), 4).await, Ok(PlaceOutcome::Placed));

        assert_eq!(session.current_slot(), Slot::Second);
        match notifier.last().unwrap() {
            Sent::Edit { handle, notification, .. } => {
                assert_eq!(handle, board_handle);
                assert!(notification.text.starts_with("Bob's turn!\n"));
                assert_eq!(notification.controls, Controls::Columns(7));
            }
            Sent::New { .. } => panic!("move should edit the board message"),
        }
    }

    #[tokio::test]
    async fn test_invalid_move_keeps_turn() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;

        let result = session.submit_move(&alice(), 9).await;

        assert!(matches!(result, Err(SessionError::InvalidMove(_))));
        assert_eq!(session.current_slot(), Slot::First);
        assert_eq!(session.board().move_count(), 0);
        assert!(
            notifier
                .last()
                .unwrap()
                .notification()
                .text
                .starts_with("You can't place a chip there! Try again.")
        );
    }

    #[tokio::test]
    async fn test_bad_column_from_waiting_player_is_silent() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;
        let sent = notifier.len();

        let result = session.submit_move(&bob(), 99).await;

        assert_eq!(
            result,
            Err(SessionError::InvalidMove(InvalidMove::ColumnOutOfRange {
                column: 99,
                columns: 7,
            }))
        );
        assert_eq!(notifier.len(), sent);
        assert_eq!(session.current_slot(), Slot::First);

        assert_eq!(session.submit_move(&bob(), 3).await, Err(SessionError::OutOfTurn));
    }

    #[tokio::test]
    async fn test_vertical_win_announces_and_resets() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;

        for _ in 0..3 {
            assert_eq!(session.submit_move(&alice(), 4).await, Ok(PlaceOutcome::Placed));
            assert_eq!(session.submit_move(&bob(), 1).await, Ok(PlaceOutcome::Placed));
        }
        let outcome = session.submit_move(&alice(), 4).await;

        assert_eq!(outcome, Ok(PlaceOutcome::Won(Axis::Vertical)));
        let last = notifier.last().unwrap();
        assert!(last.notification().text.starts_with("Alice wins!\n"));
        assert!(last.notification().text.contains("🟥"));
        assert_eq!(last.notification().controls, Controls::Remove);

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.board().move_count(), 0);
        assert!(session.player(Slot::First).is_none());
        assert!(session.player(Slot::Second).is_none());
    }

    #[tokio::test]
    async fn test_full_board_without_winner_ties() {
        let (mut session, notifier) = session_with(SessionSettings {
            dimensions: BoardDimensions {
                rows: 2,
                columns: 2,
                run_length: 3,
            },
            reminder: None,
        });
        start(&mut session).await;

        assert_eq!(session.submit_move(&alice(), 1).await, Ok(PlaceOutcome::Placed));
        assert_eq!(session.submit_move(&bob(), 1).await, Ok(PlaceOutcome::Placed));
        assert_eq!(session.submit_move(&alice(), 2).await, Ok(PlaceOutcome::Placed));
        assert_eq!(session.submit_move(&bob(), 2).await, Ok(PlaceOutcome::Tied));

        let last = notifier.last().unwrap();
        assert!(last.notification().text.starts_with("Well... it's a tie... good job... I guess."));
        assert_eq!(last.notification().controls, Controls::Remove);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn test_quit_before_setup_is_informational() {
        let (mut session, notifier) = quiet_session();

        assert_eq!(session.quit(&alice()).await, Err(SessionError::NotSetUp));
        assert!(
            notifier.texts()[0].starts_with("You can't quit a game that hasn't even started yet...")
        );
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn test_quit_during_setup_clears_everything() {
        let (mut session, notifier) = quiet_session();
        session.register_player(Slot::Second, bob(), "Bob".to_string()).await.unwrap();

        assert_eq!(session.quit(&UserId::new("999")).await, Ok(()));

        assert_eq!(notifier.last().unwrap().notification().text, "Resetting setup.");
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.player(Slot::Second).is_none());
    }

    #[tokio::test]
    async fn test_quit_mid_game_forfeits_to_opponent() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;
        session.submit_move(&alice(), 3).await.unwrap();

        assert_eq!(session.quit(&bob()).await, Ok(()));

        let last = notifier.last().unwrap();
        assert!(last.is_edit());
        assert!(last.notification().text.starts_with("Bob is a quitter! Alice wins!\n"));
        assert_eq!(last.notification().controls, Controls::Remove);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn test_quit_from_stranger_is_ignored() {
        let (mut session, notifier) = quiet_session();
        start(&mut session).await;
        let sent = notifier.len();

        assert_eq!(session.quit(&UserId::new("999")).await, Err(SessionError::UnknownPlayer));
        assert_eq!(notifier.len(), sent);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[tokio::test]
    async fn test_apply_dispatches_actions() {
        let (mut session, _notifier) = quiet_session();

        session.apply(PlayerAction::BeginSetup).await.unwrap();
        session
            .apply(PlayerAction::Register {
                slot: Slot::First,
                user: alice(),
                display_name: "Alice".to_string(),
            })
            .await
            .unwrap();
        session
            .apply(PlayerAction::Register {
                slot: Slot::Second,
                user: bob(),
                display_name: "Bob".to_string(),
            })
            .await
            .unwrap();
        session
            .apply(PlayerAction::Move {
                user: alice(),
                column: 2,
            })
            .await
            .unwrap();

        assert_eq!(session.board().move_count(), 1);
        assert_eq!(
            session
                .apply(PlayerAction::Move {
                    user: alice(),
                    column: 2,
                })
                .await,
            Err(SessionError::OutOfTurn)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reminder_follows_turns() {
        let (mut session, notifier) = reminding_session();
        start(&mut session).await;
        assert!(session.has_reminder());

        tokio::time::sleep(Duration::from_secs(200)).await;
        session.submit_move(&alice(), 4).await.unwrap();

        tokio::time::sleep(Duration::from_secs(200)).await;
        assert!(reminders(&notifier).is_empty());

        tokio::time::sleep(Duration::from_secs(125)).await;
        let reminders = reminders(&notifier);
        assert_eq!(reminders.len(), 1);
        assert!(is_reminder_for(&reminders[0], "Bob"));

        session.reset().await;
        assert!(!session.has_reminder());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_move_restarts_reminder_window() {
        let (mut session, notifier) = reminding_session();
        start(&mut session).await;

        tokio::time::sleep(Duration::from_secs(250)).await;
        let result = session.submit_move(&alice(), 99).await;
        assert!(matches!(result, Err(SessionError::InvalidMove(_))));
        assert_eq!(session.current_slot(), Slot::First);

        // The original window would have closed at 300s.
        tokio::time::sleep(Duration::from_secs(100)).await;
        assert!(reminders(&notifier).is_empty());

        tokio::time::sleep(Duration::from_secs(225)).await;
        let reminders = reminders(&notifier);
        assert_eq!(reminders.len(), 1);
        assert!(is_reminder_for(&reminders[0], "Alice"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reminder_after_game_ends() {
        let (mut session, notifier) = session_with(SessionSettings::default());
        start(&mut session).await;
        session.quit(&alice()).await.unwrap();
        assert!(!session.has_reminder());
        notifier.clear();

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(notifier.len(), 0);
    }
}
