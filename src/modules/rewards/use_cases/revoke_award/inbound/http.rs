use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::core::state::account_stream_id;
use crate::modules::rewards::use_cases::revoke_award::command::RevokeAward;
use crate::modules::rewards::use_cases::revoke_award::handler::{RevokeError, RevokeOutcome};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RevokeAwardBody {
    pub user_id: String,
    pub report_ref: String,
}

#[derive(Serialize)]
pub struct RevokeAwardResponse {
    pub applied: bool,
    pub points_revoked: i64,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings: f64,
}

#[derive(Serialize)]
pub struct RevokeRejection {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RevokeAwardBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RevokeAward {
        user_id: body.user_id.clone(),
        report_ref: body.report_ref,
        revoked_at: Utc::now().timestamp_millis(),
    };

    match state.revoke_handler.handle(command).await {
        Ok(outcome) => {
            let (applied, points_revoked, account) = match outcome {
                RevokeOutcome::Applied {
                    account,
                    points_revoked,
                } => (true, points_revoked, account),
                RevokeOutcome::NothingToRevoke { account } => (false, 0, account),
            };

            if applied {
                let stream_id = account_stream_id(&body.user_id);
                if let Ok(loaded) = state.event_store.load(&stream_id).await {
                    if let Err(err) = state.projector.replay(&stream_id, &loaded.events).await {
                        tracing::warn!(error = %err, "projection replay failed");
                    }
                }
            }

            Json(RevokeAwardResponse {
                applied,
                points_revoked,
                balance: account.balance,
                total_reports_rewarded: account.total_reports_rewarded,
                lifetime_earnings: currency_units(account.lifetime_earnings_cents),
            })
            .into_response()
        }
        Err(RevokeError::Domain(reason)) => (
            StatusCode::CONFLICT,
            Json(RevokeRejection {
                error: reason.to_string(),
            }),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod revoke_award_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::wire_in_memory;

    use super::handle;

    fn app(state: crate::shell::state::AppState) -> Router {
        Router::new()
            .route("/rewards/revoke", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_a_noop_body_when_nothing_was_awarded() {
        let wiring = wire_in_memory();
        let response = app(wiring.state)
            .oneshot(
                Request::post("/rewards/revoke")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"user_id":"u-1","report_ref":"report-1"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["applied"], serde_json::json!(false));
        assert_eq!(json["points_revoked"], serde_json::json!(0));
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let wiring = wire_in_memory();
        let response = app(wiring.state)
            .oneshot(
                Request::post("/rewards/revoke")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
