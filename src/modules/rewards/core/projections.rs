// Read model rows and the pure event-to-mutation mapping.
//
// Two projections: one summary row per account (the leaderboard source) and
// an append-only history row per ledger entry (the profile rewards view).
// entry_id is "{stream_id}:{version}" so a rebuilt projection produces the
// same identities and upserts stay idempotent.

use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::state::RewardAccountState;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountSummaryRow {
    pub user_id: String,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings_cents: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RewardHistoryRow {
    pub entry_id: String,
    pub user_id: String,
    pub points_delta: i64,
    pub cash_delta_cents: i64,
    pub report_ref: Option<String>,
    pub description: String,
    pub created_at: i64,
}

pub enum Mutation {
    UpsertSummary(AccountSummaryRow),
    AppendHistory(RewardHistoryRow),
}

/// Map one applied event to its read model mutations. `state_after` is the
/// aggregate folded up to and including this event; the summary row is a
/// straight copy of it, which keeps the projection re-derivable from the
/// stream alone.
pub fn apply(
    stream_id: &str,
    version: i64,
    event: &RewardEvent,
    state_after: &RewardAccountState,
) -> Vec<Mutation> {
    let entry_id = format!("{stream_id}:{version}");

    let history = match event {
        RewardEvent::PointsAwardedV1(e) => RewardHistoryRow {
            entry_id,
            user_id: e.user_id.clone(),
            points_delta: e.points,
            cash_delta_cents: e.cash_cents,
            report_ref: Some(e.report_ref.clone()),
            description: format!("Points for resolved report {}", e.report_ref),
            created_at: e.awarded_at,
        },
        RewardEvent::AwardRevokedV1(e) => RewardHistoryRow {
            entry_id,
            user_id: e.user_id.clone(),
            points_delta: -e.points,
            cash_delta_cents: -e.cash_cents,
            report_ref: Some(e.report_ref.clone()),
            description: format!("Award revoked for report {}", e.report_ref),
            created_at: e.revoked_at,
        },
        RewardEvent::PointsRedeemedV1(e) => RewardHistoryRow {
            entry_id,
            user_id: e.user_id.clone(),
            points_delta: -e.points,
            cash_delta_cents: e.cash_cents,
            report_ref: None,
            description: format!("Redeemed {} points", e.points),
            created_at: e.redeemed_at,
        },
    };

    let mut mutations = vec![Mutation::AppendHistory(history)];

    if let RewardAccountState::Active {
        user_id,
        balance,
        total_reports_rewarded,
        lifetime_earnings_cents,
        created_at,
        last_updated,
        ..
    } = state_after
    {
        mutations.push(Mutation::UpsertSummary(AccountSummaryRow {
            user_id: user_id.clone(),
            balance: *balance,
            total_reports_rewarded: *total_reports_rewarded,
            lifetime_earnings_cents: *lifetime_earnings_cents,
            created_at: *created_at,
            updated_at: *last_updated,
        }));
    }

    mutations
}
