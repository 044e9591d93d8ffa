use crate::modules::rewards::core::events::v1::points_awarded::PointsAwardedV1;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::intents::RewardIntent;
use crate::modules::rewards::core::policy::{cash_cents_for_points, POINTS_PER_REPORT};
use crate::modules::rewards::core::state::RewardAccountState;
use crate::modules::rewards::use_cases::award_points::command::AwardPoints;
use crate::modules::rewards::use_cases::award_points::decision::AwardDecision;

pub fn decide_award(state: &RewardAccountState, command: AwardPoints) -> AwardDecision {
    // The idempotency gate: an unrevoked credit for this report means the
    // award already happened, no matter how often the lifecycle signal is
    // replayed.
    if state.rewarded_report(&command.report_ref).is_some() {
        return AwardDecision::AlreadyAwarded;
    }

    let points = POINTS_PER_REPORT;
    let event = PointsAwardedV1 {
        user_id: command.user_id,
        report_ref: command.report_ref,
        points,
        cash_cents: cash_cents_for_points(points),
        awarded_at: command.awarded_at,
    };
    AwardDecision::Accepted {
        events: vec![RewardEvent::PointsAwardedV1(event.clone())],
        intents: vec![RewardIntent::PublishPointsAwarded { payload: event }],
    }
}
