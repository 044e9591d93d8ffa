use crate::modules::rewards::core::projections::AccountSummaryRow;
use async_trait::async_trait;

#[async_trait]
pub trait LeaderboardQueries: Send + Sync {
    /// Accounts with a positive balance, ordered by balance descending,
    /// ties broken by account creation order.
    async fn top_by_balance(&self, limit: u64) -> anyhow::Result<Vec<AccountSummaryRow>>;
}
