// Leaderboard read path: projections -> ranked entries joined with display
// names, behind the pluggable cache.

use crate::modules::rewards::adapters::outbound::user_directory::UserDirectory;
use crate::modules::rewards::use_cases::leaderboard::cache::LeaderboardCache;
use crate::modules::rewards::use_cases::leaderboard::queries_port::LeaderboardQueries;
use std::sync::Arc;

pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings_cents: i64,
}

pub struct LeaderboardReader {
    queries: Arc<dyn LeaderboardQueries>,
    directory: Arc<dyn UserDirectory>,
    cache: Arc<dyn LeaderboardCache>,
}

impl LeaderboardReader {
    pub fn new(
        queries: Arc<dyn LeaderboardQueries>,
        directory: Arc<dyn UserDirectory>,
        cache: Arc<dyn LeaderboardCache>,
    ) -> Self {
        Self {
            queries,
            directory,
            cache,
        }
    }

    pub async fn top(&self, limit: Option<u64>) -> anyhow::Result<Vec<LeaderboardEntry>> {
        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);

        if let Some(cached) = self.cache.get(limit).await {
            return Ok(cached);
        }

        let rows = self.queries.top_by_balance(limit).await?;
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let display_name = self
                .directory
                .display_name(&row.user_id)
                .await?
                .unwrap_or_else(|| row.user_id.clone());
            entries.push(LeaderboardEntry {
                user_id: row.user_id,
                display_name,
                balance: row.balance,
                total_reports_rewarded: row.total_reports_rewarded,
                lifetime_earnings_cents: row.lifetime_earnings_cents,
            });
        }

        self.cache.put(limit, entries.clone()).await;
        Ok(entries)
    }
}
