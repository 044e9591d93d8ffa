use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::core::state::account_stream_id;
use crate::modules::rewards::use_cases::redeem_points::command::RedeemPoints;
use crate::modules::rewards::use_cases::redeem_points::handler::RedeemError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RedeemPointsBody {
    pub user_id: String,
    pub points: i64,
}

#[derive(Serialize)]
pub struct RedeemPointsResponse {
    pub redemption_id: String,
    pub points_redeemed: i64,
    pub cash_credited: f64,
    pub balance: i64,
    pub lifetime_earnings: f64,
    pub message: String,
}

#[derive(Serialize)]
pub struct RedeemRejection {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RedeemPointsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RedeemPoints {
        user_id: body.user_id.clone(),
        points: body.points,
        redemption_id: Uuid::now_v7().to_string(),
        redeemed_at: Utc::now().timestamp_millis(),
    };

    match state.redeem_handler.handle(command).await {
        Ok(receipt) => {
            let stream_id = account_stream_id(&body.user_id);
            if let Ok(loaded) = state.event_store.load(&stream_id).await {
                if let Err(err) = state.projector.replay(&stream_id, &loaded.events).await {
                    tracing::warn!(error = %err, "projection replay failed");
                }
            }

            let cash_credited = currency_units(receipt.cash_cents_credited);
            Json(RedeemPointsResponse {
                redemption_id: receipt.redemption_id,
                points_redeemed: receipt.points_redeemed,
                cash_credited,
                balance: receipt.account.balance,
                lifetime_earnings: currency_units(receipt.account.lifetime_earnings_cents),
                message: format!(
                    "Redeemed {} points for {cash_credited:.2} in cash credit",
                    receipt.points_redeemed
                ),
            })
            .into_response()
        }
        Err(RedeemError::Domain(reason)) => (
            StatusCode::CONFLICT,
            Json(RedeemRejection {
                error: reason.to_string(),
            }),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod redeem_points_http_inbound_tests {
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
            .route("/rewards/redeem", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_balance_is_insufficient() {
        let wiring = wire_in_memory();
        let response = app(wiring.state)
            .oneshot(
                Request::post("/rewards/redeem")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":"u-1","points":50}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .contains("balance 0 is less than the requested 50 points")
        );
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_amount_is_not_positive() {
        let wiring = wire_in_memory();
        let response = app(wiring.state)
            .oneshot(
                Request::post("/rewards/redeem")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":"u-1","points":0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let wiring = wire_in_memory();
        let response = app(wiring.state)
            .oneshot(
                Request::post("/rewards/redeem")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
