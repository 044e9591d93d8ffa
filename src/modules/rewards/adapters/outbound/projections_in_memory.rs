// In-memory projection store: repositories, watermark tracking, and the
// query ports, all over the same rows. Used by tests and the standalone
// shell.

use crate::modules::rewards::adapters::outbound::projections::{
    RewardProjectionRepository, WatermarkRepository,
};
use crate::modules::rewards::core::projections::{AccountSummaryRow, RewardHistoryRow};
use crate::modules::rewards::use_cases::leaderboard::queries_port::LeaderboardQueries;
use crate::modules::rewards::use_cases::list_reward_history::queries_port::RewardHistoryQueries;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    summaries: RwLock<HashMap<String, AccountSummaryRow>>,
    history: RwLock<Vec<RewardHistoryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl RewardProjectionRepository for InMemoryProjections {
    async fn upsert_summary(&self, row: AccountSummaryRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        self.summaries
            .write()
            .await
            .insert(row.user_id.clone(), row);
        Ok(())
    }

    async fn append_history(&self, row: RewardHistoryRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.history.write().await;
        // Idempotent replay: the entry id is stable per stream version.
        if guard.iter().any(|existing| existing.entry_id == row.entry_id) {
            return Ok(());
        }
        guard.push(row);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl LeaderboardQueries for InMemoryProjections {
    async fn top_by_balance(&self, limit: u64) -> anyhow::Result<Vec<AccountSummaryRow>> {
        let guard = self.summaries.read().await;

        let mut rows: Vec<AccountSummaryRow> = guard
            .values()
            .filter(|row| row.balance > 0)
            .cloned()
            .collect();

        // Ties keep account creation order, matching the stable ordering a
        // sequential table scan would produce.
        rows.sort_by_key(|row| (Reverse(row.balance), row.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl RewardHistoryQueries for InMemoryProjections {
    async fn account_summary(&self, user_id: &str) -> anyhow::Result<Option<AccountSummaryRow>> {
        Ok(self.summaries.read().await.get(user_id).cloned())
    }

    async fn history_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<RewardHistoryRow>> {
        let guard = self.history.read().await;

        let mut rows: Vec<RewardHistoryRow> = guard
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.reverse(); // newest first; rows append in stream order

        let start = offset as usize;
        if start >= rows.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(limit as usize).min(rows.len());
        Ok(rows[start..end].to_vec())
    }
}
