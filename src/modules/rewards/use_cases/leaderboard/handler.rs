// Projector: translates applied events into read model mutations and
// advances the watermark. The inbound adapters replay the stream right
// after an append commits so queries see fresh rows immediately; a failed
// projection is recoverable by replaying the stream, which is why the
// history repository tolerates replayed entry ids.

use crate::modules::rewards::adapters::outbound::projections::{
    RewardProjectionRepository, WatermarkRepository,
};
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::projections::{apply, Mutation};
use crate::modules::rewards::core::state::RewardAccountState;
use std::sync::Arc;

pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: RewardProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: RewardProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark_repository: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &RewardEvent,
        state_after: &RewardAccountState,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event, state_after) {
            match mutation {
                Mutation::UpsertSummary(row) => self.repository.upsert_summary(row).await?,
                Mutation::AppendHistory(row) => self.repository.append_history(row).await?,
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    /// Replay a whole stream through the projections. Mutations are
    /// idempotent by entry id, so running this after every append is safe
    /// even when two writers interleave.
    pub async fn replay(&self, stream_id: &str, events: &[RewardEvent]) -> anyhow::Result<()> {
        let mut state = RewardAccountState::None;
        for (i, event) in events.iter().enumerate() {
            state = crate::modules::rewards::core::evolve::evolve(state, event.clone());
            self.apply_one(stream_id, i as i64 + 1, event, &state).await?;
        }
        Ok(())
    }
}
