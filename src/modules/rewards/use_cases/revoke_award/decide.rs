use crate::modules::rewards::core::events::v1::award_revoked::AwardRevokedV1;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::intents::RewardIntent;
use crate::modules::rewards::core::state::RewardAccountState;
use crate::modules::rewards::use_cases::revoke_award::command::RevokeAward;
use crate::modules::rewards::use_cases::revoke_award::decision::{
    RevokeDecideError, RevokeDecision,
};

pub fn decide_revoke(state: &RewardAccountState, command: RevokeAward) -> RevokeDecision {
    let Some(credit) = state.rewarded_report(&command.report_ref) else {
        // No positive entry for this report that is still unoffset.
        return RevokeDecision::NothingToRevoke;
    };

    if state.balance() < credit.points {
        return RevokeDecision::Rejected {
            reason: RevokeDecideError::InsufficientBalanceForRevoke {
                available: state.balance(),
                required: credit.points,
            },
        };
    }

    // Reverse the original award's amounts, not today's policy values.
    let event = AwardRevokedV1 {
        user_id: command.user_id,
        report_ref: command.report_ref,
        points: credit.points,
        cash_cents: credit.cash_cents,
        revoked_at: command.revoked_at,
    };
    RevokeDecision::Accepted {
        events: vec![RewardEvent::AwardRevokedV1(event.clone())],
        intents: vec![RewardIntent::PublishAwardRevoked { payload: event }],
    }
}
