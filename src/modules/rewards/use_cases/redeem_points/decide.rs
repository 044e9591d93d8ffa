use crate::modules::rewards::core::events::v1::points_redeemed::PointsRedeemedV1;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::intents::RewardIntent;
use crate::modules::rewards::core::policy::cash_cents_for_points;
use crate::modules::rewards::core::state::RewardAccountState;
use crate::modules::rewards::use_cases::redeem_points::command::RedeemPoints;
use crate::modules::rewards::use_cases::redeem_points::decision::{
    RedeemDecideError, RedeemDecision,
};

pub fn decide_redeem(state: &RewardAccountState, command: RedeemPoints) -> RedeemDecision {
    if command.points <= 0 {
        return RedeemDecision::Rejected {
            reason: RedeemDecideError::InvalidAmount {
                requested: command.points,
            },
        };
    }

    let available = state.balance();
    if command.points > available {
        return RedeemDecision::Rejected {
            reason: RedeemDecideError::InsufficientBalance {
                available,
                requested: command.points,
            },
        };
    }

    let event = PointsRedeemedV1 {
        user_id: command.user_id,
        points: command.points,
        cash_cents: cash_cents_for_points(command.points),
        redemption_id: command.redemption_id,
        redeemed_at: command.redeemed_at,
    };
    RedeemDecision::Accepted {
        events: vec![RewardEvent::PointsRedeemedV1(event.clone())],
        intents: vec![RewardIntent::PublishPointsRedeemed { payload: event }],
    }
}
