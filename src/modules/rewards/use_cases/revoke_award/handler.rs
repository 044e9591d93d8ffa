use crate::modules::rewards::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::evolve::evolve;
use crate::modules::rewards::core::state::{account_stream_id, AccountSnapshot, RewardAccountState};
use crate::modules::rewards::use_cases::award_points::handler::{
    MAX_APPEND_ATTEMPTS, STORE_TIMEOUT,
};
use crate::modules::rewards::use_cases::revoke_award::command::RevokeAward;
use crate::modules::rewards::use_cases::revoke_award::decide::decide_revoke;
use crate::modules::rewards::use_cases::revoke_award::decision::{
    RevokeDecideError, RevokeDecision,
};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::timeout;

#[derive(Debug, Error)]
pub enum RevokeError {
    /// Surfaced for manual reconciliation, never clamped away.
    #[error(transparent)]
    Domain(#[from] RevokeDecideError),

    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("event store operation timed out")]
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevokeOutcome {
    Applied {
        account: AccountSnapshot,
        points_revoked: i64,
    },
    NothingToRevoke {
        account: AccountSnapshot,
    },
}

pub struct RevokeAwardHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RewardEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> RevokeAwardHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RewardEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(&self, command: RevokeAward) -> Result<RevokeOutcome, RevokeError> {
        let stream_id = account_stream_id(&command.user_id);
        let mut attempt = 0;
        loop {
            attempt += 1;

            let stream = timeout(STORE_TIMEOUT, self.event_store.load(&stream_id))
                .await
                .map_err(|_| RevokeError::Timeout)??;
            let state = stream
                .events
                .iter()
                .cloned()
                .fold(RewardAccountState::None, evolve);

            match decide_revoke(&state, command.clone()) {
                RevokeDecision::NothingToRevoke => {
                    return Ok(RevokeOutcome::NothingToRevoke {
                        account: state.snapshot(&command.user_id),
                    });
                }
                RevokeDecision::Rejected { reason } => {
                    tracing::warn!(
                        user_id = %command.user_id,
                        report_ref = %command.report_ref,
                        %reason,
                        "revoke refused, flagging for manual reconciliation"
                    );
                    return Err(RevokeError::Domain(reason));
                }
                RevokeDecision::Accepted { events, intents } => {
                    let append = timeout(
                        STORE_TIMEOUT,
                        self.event_store.append(&stream_id, stream.version, &events),
                    )
                    .await
                    .map_err(|_| RevokeError::Timeout)?;
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

                            let points_revoked = events
                                .iter()
                                .filter_map(|event| match event {
                                    RewardEvent::AwardRevokedV1(e) => Some(e.points),
                                    _ => None,
                                })
                                .sum();
                            let state = events.into_iter().fold(state, evolve);
                            let account = state.snapshot(&command.user_id);
                            tracing::info!(
                                user_id = %command.user_id,
                                report_ref = %command.report_ref,
                                balance = account.balance,
                                "award revoked"
                            );
                            return Ok(RevokeOutcome::Applied {
                                points_revoked,
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
                                "revoke lost the append race, retrying"
                            );
                        }
                        Err(e) => return Err(RevokeError::Store(e)),
                    }
                }
            }
        }
    }
}
