use crate::modules::rewards::core::projections::{AccountSummaryRow, RewardHistoryRow};
use async_trait::async_trait;

#[async_trait]
pub trait RewardProjectionRepository: Send + Sync {
    async fn upsert_summary(&self, row: AccountSummaryRow) -> anyhow::Result<()>;
    async fn append_history(&self, row: RewardHistoryRow) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
