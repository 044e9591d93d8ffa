use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::core::state::account_stream_id;
use crate::modules::rewards::use_cases::award_points::command::AwardPoints;
use crate::modules::rewards::use_cases::award_points::handler::{AwardError, AwardOutcome};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AwardPointsBody {
    pub user_id: String,
    pub report_ref: String,
}

#[derive(Serialize)]
pub struct AwardPointsResponse {
    pub applied: bool,
    pub points_awarded: i64,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AwardPointsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AwardPoints {
        user_id: body.user_id.clone(),
        report_ref: body.report_ref,
        awarded_at: Utc::now().timestamp_millis(),
    };

    match state.award_handler.handle(command).await {
        Ok(outcome) => {
            let (applied, points_awarded, account) = match outcome {
                AwardOutcome::Applied {
                    account,
                    points_awarded,
                } => (true, points_awarded, account),
                AwardOutcome::AlreadyAwarded { account } => (false, 0, account),
            };

            if applied {
                // Inline projection so leaderboard and history queries see
                // the new row immediately.
                let stream_id = account_stream_id(&body.user_id);
                if let Ok(loaded) = state.event_store.load(&stream_id).await {
                    if let Err(err) = state.projector.replay(&stream_id, &loaded.events).await {
                        tracing::warn!(error = %err, "projection replay failed");
                    }
                }
            }

            Json(AwardPointsResponse {
                applied,
                points_awarded,
                balance: account.balance,
                total_reports_rewarded: account.total_reports_rewarded,
                lifetime_earnings: currency_units(account.lifetime_earnings_cents),
            })
            .into_response()
        }
        Err(AwardError::AccountNotResolvable { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(AwardError::Store(EventStoreError::VersionMismatch { .. })) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
