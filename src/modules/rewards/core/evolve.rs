use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::state::{RewardAccountState, RewardedReport};

pub fn evolve(state: RewardAccountState, event: RewardEvent) -> RewardAccountState {
    match (state, event) {
        (RewardAccountState::None, RewardEvent::PointsAwardedV1(e)) => RewardAccountState::Active {
            user_id: e.user_id,
            balance: e.points,
            total_reports_rewarded: 1,
            lifetime_earnings_cents: e.cash_cents,
            rewarded_reports: vec![RewardedReport {
                report_ref: e.report_ref,
                points: e.points,
                cash_cents: e.cash_cents,
            }],
            created_at: e.awarded_at,
            last_updated: e.awarded_at,
        },
        (
            RewardAccountState::Active {
                user_id,
                balance,
                total_reports_rewarded,
                lifetime_earnings_cents,
                mut rewarded_reports,
                created_at,
                ..
            },
            RewardEvent::PointsAwardedV1(e),
        ) => {
            rewarded_reports.push(RewardedReport {
                report_ref: e.report_ref,
                points: e.points,
                cash_cents: e.cash_cents,
            });
            RewardAccountState::Active {
                user_id,
                balance: balance + e.points,
                total_reports_rewarded: total_reports_rewarded + 1,
                lifetime_earnings_cents: lifetime_earnings_cents + e.cash_cents,
                rewarded_reports,
                created_at,
                last_updated: e.awarded_at,
            }
        }
        (
            RewardAccountState::Active {
                user_id,
                balance,
                total_reports_rewarded,
                lifetime_earnings_cents,
                mut rewarded_reports,
                created_at,
                ..
            },
            RewardEvent::AwardRevokedV1(e),
        ) => {
            rewarded_reports.retain(|r| r.report_ref != e.report_ref);
            RewardAccountState::Active {
                user_id,
                balance: balance - e.points,
                total_reports_rewarded: total_reports_rewarded - 1,
                lifetime_earnings_cents: lifetime_earnings_cents - e.cash_cents,
                rewarded_reports,
                created_at,
                last_updated: e.revoked_at,
            }
        }
        (
            RewardAccountState::Active {
                user_id,
                balance,
                total_reports_rewarded,
                lifetime_earnings_cents,
                rewarded_reports,
                created_at,
                ..
            },
            RewardEvent::PointsRedeemedV1(e),
        ) => RewardAccountState::Active {
            user_id,
            balance: balance - e.points,
            total_reports_rewarded,
            lifetime_earnings_cents: lifetime_earnings_cents + e.cash_cents,
            rewarded_reports,
            created_at,
            last_updated: e.redeemed_at,
        },
        // Revoke or redeem against a stream with no award yet: the decider
        // never emits these, so an unknown interleaving leaves state as is.
        (state, _) => state,
    }
}
