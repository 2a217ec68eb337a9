use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::watch;

use crate::{api::EmailClassifierClient, config::OverlapPolicy, domain::ClassificationRequest};

use super::state::SessionState;

/// Overlapping `submit` calls are not serialized; `policy` decides which outcome sticks.
pub struct ClassificationSession {
    client: Arc<EmailClassifierClient>,
    policy: OverlapPolicy,
    generation: AtomicU64,
    state: watch::Sender<SessionState>,
}

impl ClassificationSession {
    pub fn new(client: Arc<EmailClassifierClient>, policy: OverlapPolicy) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            client,
            policy,
            generation: AtomicU64::new(0),
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub async fn submit(&self, request: &ClassificationRequest) {
        let ticket = self.begin(SessionState::Loading);
        tracing::debug!(target: "session", ticket, "classification started");

        let next = match self.client.classify(request).await {
            Ok(result) => SessionState::Success(result),
            Err(err) => {
                tracing::debug!(
                    target: "session",
                    ticket,
                    status = ?err.status(),
                    error = %err,
                    "classification failed"
                );
                SessionState::Failure(err.to_string())
            }
        };
        self.settle(ticket, next);
    }

    pub fn reset(&self) {
        let ticket = self.begin(SessionState::Idle);
        tracing::debug!(target: "session", ticket, "session reset");
    }

    // Generation and state change together under the channel lock.
    fn begin(&self, state: SessionState) -> u64 {
        let mut ticket = 0;
        self.state.send_modify(|current| {
            ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = state;
        });
        ticket
    }

    fn settle(&self, ticket: u64, next: SessionState) {
        self.state.send_if_modified(|current| {
            if self.policy == OverlapPolicy::LatestSubmitted {
                let latest = self.generation.load(Ordering::SeqCst);
                if latest != ticket {
                    tracing::debug!(
                        target: "session",
                        ticket,
                        latest,
                        "discarding stale classification outcome"
                    );
                    return false;
                }
            }
            *current = next;
            true
        });
    }
}
