use crate::modules::rewards::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::rewards::adapters::outbound::user_directory::UserDirectory;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::evolve::evolve;
use crate::modules::rewards::core::state::{account_stream_id, AccountSnapshot, RewardAccountState};
use crate::modules::rewards::use_cases::award_points::command::AwardPoints;
use crate::modules::rewards::use_cases::award_points::decide::decide_award;
use crate::modules::rewards::use_cases::award_points::decision::AwardDecision;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Losing a versioned append means another writer mutated the account; the
/// whole load-fold-decide sequence reruns, so retries are idempotency-safe.
pub const MAX_APPEND_ATTEMPTS: u32 = 3;
pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum AwardError {
    #[error("account not resolvable for user {user_id}")]
    AccountNotResolvable { user_id: String },

    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("user directory error: {0}")]
    Directory(String),

    #[error("event store operation timed out")]
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardOutcome {
    Applied {
        account: AccountSnapshot,
        points_awarded: i64,
    },
    AlreadyAwarded {
        account: AccountSnapshot,
    },
}

pub struct AwardPointsHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RewardEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    directory: Arc<dyn UserDirectory>,
}

impl<TEventStore, TOutbox> AwardPointsHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RewardEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        directory: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            directory,
        }
    }

    pub async fn handle(&self, command: AwardPoints) -> Result<AwardOutcome, AwardError> {
        let resolved = self
            .directory
            .display_name(&command.user_id)
            .await
            .map_err(|e| AwardError::Directory(e.to_string()))?;
        if resolved.is_none() {
            return Err(AwardError::AccountNotResolvable {
                user_id: command.user_id,
            });
        }

        let stream_id = account_stream_id(&command.user_id);
        let mut attempt = 0;
        loop {
            attempt += 1;

            let stream = timeout(STORE_TIMEOUT, self.event_store.load(&stream_id))
                .await
                .map_err(|_| AwardError::Timeout)??;
            let state = stream
                .events
                .iter()
                .cloned()
                .fold(RewardAccountState::None, evolve);

            match decide_award(&state, command.clone()) {
                AwardDecision::AlreadyAwarded => {
                    return Ok(AwardOutcome::AlreadyAwarded {
                        account: state.snapshot(&command.user_id),
                    });
                }
                AwardDecision::Accepted { events, intents } => {
                    let append = timeout(
                        STORE_TIMEOUT,
                        self.event_store.append(&stream_id, stream.version, &events),
                    )
                    .await
                    .map_err(|_| AwardError::Timeout)?;
                    match append {
                        Ok(()) => {
                            dispatch_intents(
                                &*self.outbox,
                                &stream_id,
                                stream.version,
                                &self.topic,
                                intents,
                            )
                            .await?;

                            let points_awarded = events
                                .iter()
                                .filter_map(|event| match event {
                                    RewardEvent::PointsAwardedV1(e) => Some(e.points),
                                    _ => None,
                                })
                                .sum();
                            let state = events.into_iter().fold(state, evolve);
                            let account = state.snapshot(&command.user_id);
                            tracing::info!(
                                user_id = %command.user_id,
                                report_ref = %command.report_ref,
                                balance = account.balance,
                                "points awarded"
                            );
                            return Ok(AwardOutcome::Applied {
                                points_awarded,
                                account,
                            });
                        }
                        Err(EventStoreError::VersionMismatch { expected, actual })
                            if attempt < MAX_APPEND_ATTEMPTS =>
                        {
                            tracing::debug!(
                                %stream_id,
                                expected,
                                actual,
                                attempt,
                                "award lost the append race, retrying"
                            );
                        }
                        Err(e) => return Err(AwardError::Store(e)),
                    }
                }
            }
        }
    }
}
