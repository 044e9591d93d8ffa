use crate::modules::rewards::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::evolve::evolve;
use crate::modules::rewards::core::state::{account_stream_id, AccountSnapshot, RewardAccountState};
use crate::modules::rewards::use_cases::award_points::handler::{
    MAX_APPEND_ATTEMPTS, STORE_TIMEOUT,
};
use crate::modules::rewards::use_cases::redeem_points::command::RedeemPoints;
use crate::modules::rewards::use_cases::redeem_points::decide::decide_redeem;
use crate::modules::rewards::use_cases::redeem_points::decision::{
    RedeemDecideError, RedeemDecision,
};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::timeout;

#[derive(Debug, Error)]
pub enum RedeemError {
    /// Precondition violations, surfaced to the user as is and never retried.
    #[error(transparent)]
    Domain(#[from] RedeemDecideError),

    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("event store operation timed out")]
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemReceipt {
    pub account: AccountSnapshot,
    pub points_redeemed: i64,
    pub cash_cents_credited: i64,
    pub redemption_id: String,
}

pub struct RedeemPointsHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RewardEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> RedeemPointsHandler<TEventStore, TOutbox>
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

    pub async fn handle(&self, command: RedeemPoints) -> Result<RedeemReceipt, RedeemError> {
        let stream_id = account_stream_id(&command.user_id);
        let mut attempt = 0;
        loop {
            attempt += 1;

            let stream = timeout(STORE_TIMEOUT, self.event_store.load(&stream_id))
                .await
                .map_err(|_| RedeemError::Timeout)??;
            let state = stream
                .events
                .iter()
                .cloned()
                .fold(RewardAccountState::None, evolve);

            match decide_redeem(&state, command.clone()) {
                RedeemDecision::Rejected { reason } => return Err(RedeemError::Domain(reason)),
                RedeemDecision::Accepted { events, intents } => {
                    let append = timeout(
                        STORE_TIMEOUT,
                        self.event_store.append(&stream_id, stream.version, &events),
                    )
                    .await
                    .map_err(|_| RedeemError::Timeout)?;
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

                            let (points_redeemed, cash_cents_credited, redemption_id) = events
                                .iter()
                                .filter_map(|event| match event {
                                    RewardEvent::PointsRedeemedV1(e) => {
                                        Some((e.points, e.cash_cents, e.redemption_id.clone()))
                                    }
                                    _ => None,
                                })
                                .next()
                                .unwrap_or((0, 0, String::new()));
                            let state = events.into_iter().fold(state, evolve);
                            let account = state.snapshot(&command.user_id);
                            tracing::info!(
                                user_id = %command.user_id,
                                points_redeemed,
                                balance = account.balance,
                                "points redeemed"
                            );
                            return Ok(RedeemReceipt {
                                account,
                                points_redeemed,
                                cash_cents_credited,
                                redemption_id,
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
                                "redeem lost the append race, retrying"
                            );
                        }
                        Err(e) => return Err(RedeemError::Store(e)),
                    }
                }
            }
        }
    }
}
