use crate::modules::rewards::core::projections::{AccountSummaryRow, RewardHistoryRow};
use async_trait::async_trait;

#[async_trait]
pub trait RewardHistoryQueries: Send + Sync {
    async fn account_summary(&self, user_id: &str) -> anyhow::Result<Option<AccountSummaryRow>>;

    /// Newest-first page of the user's ledger entries.
    async fn history_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<RewardHistoryRow>>;
}
