use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::use_cases::leaderboard::reader::LeaderboardEntry;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<u64>,
}

#[derive(Serialize)]
pub struct LeaderboardRow {
    pub user_id: String,
    pub display_name: String,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings: f64,
}

impl From<LeaderboardEntry> for LeaderboardRow {
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

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> impl IntoResponse {
    match state.leaderboard.top(params.limit).await {
        Ok(entries) => Json(
            entries
                .into_iter()
                .map(LeaderboardRow::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod leaderboard_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::wire_in_memory;

    use super::handle;

    fn app(state: crate::shell::state::AppState) -> Router {
        Router::new()
            .route("/rewards/leaderboard", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_an_empty_list_when_no_account_exists() {
        let wiring = wire_in_memory();
        let response = app(wiring.state)
            .oneshot(
                Request::get("/rewards/leaderboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_rank_awarded_accounts_by_balance() {
        use crate::modules::rewards::adapters::outbound::projections::RewardProjectionRepository;
        use crate::modules::rewards::core::projections::AccountSummaryRow;

        let wiring = wire_in_memory();
        for (user_id, balance, created_at) in
            [("u-low", 10, 1), ("u-high", 50, 2), ("u-mid", 30, 3)]
        {
            wiring
                .projections
                .upsert_summary(AccountSummaryRow {
                    user_id: user_id.to_string(),
                    balance,
                    total_reports_rewarded: 1,
                    lifetime_earnings_cents: balance * 10,
                    created_at,
                    updated_at: created_at,
                })
                .await
                .unwrap();
        }

        let response = app(wiring.state)
            .oneshot(
                Request::get("/rewards/leaderboard?limit=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let balances: Vec<i64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["balance"].as_i64().unwrap())
            .collect();
        assert_eq!(balances, vec![50, 30, 10]);
    }
}
