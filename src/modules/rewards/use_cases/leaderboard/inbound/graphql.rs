use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::use_cases::leaderboard::reader::LeaderboardEntry;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings: f64,
}

impl From<LeaderboardEntry> for GqlLeaderboardEntry {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            user_id: entry.user_id,
            display_name: entry.display_name,
            balance: entry.balance,
            total_reports_rewarded: entry.total_reports_rewarded,
            lifetime_earnings: currency_units(entry.lifetime_earnings_cents),
        }
    }
}

#[derive(Default)]
pub struct LeaderboardQuery;

#[Object]
impl LeaderboardQuery {
    async fn leaderboard(
        &self,
        context: &Context<'_>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlLeaderboardEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state
            .leaderboard
            .top(limit.map(|l| l.max(0) as u64))
            .await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
