use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::core::projections::{AccountSummaryRow, RewardHistoryRow};
use crate::modules::rewards::use_cases::list_reward_history::queries_port::RewardHistoryQueries;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RewardHistoryParams {
    pub user_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Serialize)]
pub struct RewardHistoryEntry {
    pub entry_id: String,
    pub points_delta: i64,
    pub cash_delta: f64,
    pub report_ref: Option<String>,
    pub description: String,
    pub created_at: i64,
}

#[derive(Serialize)]
pub struct AccountSummary {
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings: f64,
}

#[derive(Serialize)]
pub struct RewardHistoryResponse {
    pub account: AccountSummary,
    pub entries: Vec<RewardHistoryEntry>,
}

impl From<RewardHistoryRow> for RewardHistoryEntry {
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

impl From<Option<AccountSummaryRow>> for AccountSummary {
    fn from(row: Option<AccountSummaryRow>) -> Self {
        match row {
            Some(row) => Self {
                balance: row.balance,
                total_reports_rewarded: row.total_reports_rewarded,
                lifetime_earnings: currency_units(row.lifetime_earnings_cents),
            },
            // Lazily created accounts read as zeroed summaries.
            None => Self {
                balance: 0,
                total_reports_rewarded: 0,
                lifetime_earnings: 0.0,
            },
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<RewardHistoryParams>,
) -> impl IntoResponse {
    let summary = state.history_queries.account_summary(&params.user_id).await;
    let entries = state
        .history_queries
        .history_by_user_id(
            &params.user_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20),
        )
        .await;

    match (summary, entries) {
        (Ok(summary), Ok(entries)) => Json(RewardHistoryResponse {
            account: summary.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
