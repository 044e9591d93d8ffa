use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::core::projections::RewardHistoryRow;
use crate::modules::rewards::use_cases::list_reward_history::queries_port::RewardHistoryQueries;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRewardHistoryEntry {
    pub entry_id: String,
    pub points_delta: i64,
    pub cash_delta: f64,
    pub report_ref: Option<String>,
    pub description: String,
    pub created_at: i64,
}

impl From<RewardHistoryRow> for GqlRewardHistoryEntry {
    fn from(row: RewardHistoryRow) -> Self {
        Self {
            entry_id: row.entry_id,
            points_delta: row.points_delta,
            cash_delta: currency_units(row.cash_delta_cents),
            report_ref: row.report_ref,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(Default)]
pub struct RewardHistoryQuery;

#[Object]
impl RewardHistoryQuery {
    async fn reward_history_by_user_id(
        &self,
        context: &Context<'_>,
        user_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlRewardHistoryEntry>> {
        let state = context.data_unchecked::<AppState>();
        let rows = state
            .history_queries
            .history_by_user_id(
                &user_id,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(20).max(0) as u64,
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
