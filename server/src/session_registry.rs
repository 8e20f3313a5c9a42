use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use common::games::Notifier;
use common::games::connect_four::{
    ConnectFourSession, InboundEvent, SessionPhase, SessionSettings,
};
use common::{ChannelId, SessionError, debug_log, log};

type SharedSession<N> = Arc<Mutex<ConnectFourSession<N>>>;

/// Live sessions keyed by channel.
///
/// The map lock is only held to look a session up; events for one channel are
/// serialized by that session's own lock, so channels never wait on each other.
/// A session that is back to idle after an event is dropped from the map.
pub struct SessionRegistry<N: Notifier> {
    sessions: Arc<Mutex<HashMap<ChannelId, SharedSession<N>>>>,
    notifier: N,
    settings: SessionSettings,
}

impl<N: Notifier> Clone for SessionRegistry<N> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            notifier: self.notifier.clone(),
            settings: self.settings,
        }
    }
}

impl<N: Notifier> SessionRegistry<N> {
    pub fn new(notifier: N, settings: SessionSettings) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            notifier,
            settings,
        }
    }

    pub async fn dispatch(&self, event: InboundEvent) -> Result<(), SessionError> {
        let session = self.session_for(&event.channel).await;
        let (result, phase) = {
            let mut guard = session.lock().await;
            let result = guard.apply(event.action).await;
            (result, guard.phase())
        };

        if phase == SessionPhase::Idle {
            self.evict_if_idle(&event.channel, session).await;
        }
        result
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Resets every session so no reminder outlives the registry.
    pub async fn shutdown(&self) {
        let sessions: Vec<(ChannelId, SharedSession<N>)> =
            self.sessions.lock().await.drain().collect();

        for (channel, session) in sessions {
            session.lock().await.reset().await;
            log!("[channel:{}] Session closed on shutdown", channel);
        }
    }

    // Clones of a session are only handed out under the map lock, so a count
    // of two (map + ours) means no other event is queued on it.
    async fn evict_if_idle(&self, channel: &ChannelId, session: SharedSession<N>) {
        let mut sessions = self.sessions.lock().await;
        let Some(stored) = sessions.get(channel) else {
            return;
        };
        if !Arc::ptr_eq(stored, &session) || Arc::strong_count(&session) != 2 {
            return;
        }
        let idle = session
            .try_lock()
            .is_ok_and(|guard| guard.phase() == SessionPhase::Idle);
        if idle {
            sessions.remove(channel);
            debug_log!("[channel:{}] Idle session evicted", channel);
        }
    }

    async fn session_for(&self, channel: &ChannelId) -> SharedSession<N> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(channel.clone())
            .or_insert_with(|| {
                log!("[channel:{}] Session created", channel);
                Arc::new(Mutex::new(ConnectFourSession::new(
                    channel.clone(),
                    self.settings,
                    self.notifier.clone(),
                )))
            })
            .clone()
    }

    #[cfg(test)]
    pub async fn with_session<R>(
        &self,
        channel: &ChannelId,
        f: impl FnOnce(&ConnectFourSession<N>) -> R,
    ) -> Option<R> {
        let session = self.sessions.lock().await.get(channel).cloned()?;
        let session = session.lock().await;
        Some(f(&session))
    }
}
