use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::rewards::use_cases::award_points::inbound::http as award_http;
use crate::modules::rewards::use_cases::leaderboard::inbound::http as leaderboard_http;
use crate::modules::rewards::use_cases::list_reward_history::inbound::http as history_http;
use crate::modules::rewards::use_cases::redeem_points::inbound::http as redeem_http;
use crate::modules::rewards::use_cases::revoke_award::inbound::http as revoke_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rewards/award", post(award_http::handle))
        .route("/rewards/revoke", post(revoke_http::handle))
        .route("/rewards/redeem", post(redeem_http::handle))
        .route("/rewards/leaderboard", get(leaderboard_http::handle))
        .route("/rewards/history", get(history_http::handle))
        .with_state(state)
}
