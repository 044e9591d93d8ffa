use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::intents::RewardIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RedeemDecideError {
    #[error("points to redeem must be positive, got {requested}")]
    InvalidAmount { requested: i64 },

    #[error("balance {available} is less than the requested {requested} points")]
    InsufficientBalance { available: i64, requested: i64 },
}

pub enum RedeemDecision {
    Accepted {
        events: Vec<RewardEvent>,
        intents: Vec<RewardIntent>,
    },
    Rejected {
        reason: RedeemDecideError,
    },
}
