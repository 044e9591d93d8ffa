// RewardAccountState is the account aggregate after folding the stream.
//
// The aggregate is never stored; every handler refolds it from the events,
// so balance, report count, and lifetime earnings can always be re-derived
// and audited against the history. rewarded_reports tracks which report
// credits have not been offset by a revoke — membership in that list is the
// idempotency gate for awards.

/// Ledger stream identity for a user's account.
pub fn account_stream_id(user_id: &str) -> String {
    format!("RewardAccount-{user_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardedReport {
    pub report_ref: String,
    pub points: i64,
    pub cash_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardAccountState {
    None,
    Active {
        user_id: String,
        balance: i64,
        total_reports_rewarded: i64,
        lifetime_earnings_cents: i64,
        rewarded_reports: Vec<RewardedReport>,
        created_at: i64,
        last_updated: i64,
    },
}

/// Plain view of the aggregate, returned to callers after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AccountSnapshot {
    pub user_id: String,
    pub balance: i64,
    pub total_reports_rewarded: i64,
    pub lifetime_earnings_cents: i64,
    pub last_updated: i64,
}

impl RewardAccountState {
    pub fn balance(&self) -> i64 {
        match self {
            RewardAccountState::None => 0,
            RewardAccountState::Active { balance, .. } => *balance,
        }
    }

    pub fn rewarded_report(&self, report_ref: &str) -> Option<&RewardedReport> {
        match self {
            RewardAccountState::None => None,
            RewardAccountState::Active {
                rewarded_reports, ..
            } => rewarded_reports.iter().find(|r| r.report_ref == report_ref),
        }
    }

    /// Snapshot for `user_id`; a fresh zeroed account if no event was ever
    /// applied (accounts exist lazily).
    pub fn snapshot(&self, user_id: &str) -> AccountSnapshot {
        match self {
            RewardAccountState::None => AccountSnapshot {
                user_id: user_id.to_string(),
                balance: 0,
                total_reports_rewarded: 0,
                lifetime_earnings_cents: 0,
                last_updated: 0,
            },
            RewardAccountState::Active {
                user_id,
                balance,
                total_reports_rewarded,
                lifetime_earnings_cents,
                last_updated,
                ..
            } => AccountSnapshot {
                user_id: user_id.clone(),
                balance: *balance,
                total_reports_rewarded: *total_reports_rewarded,
                lifetime_earnings_cents: *lifetime_earnings_cents,
                last_updated: *last_updated,
            },
        }
    }
}
