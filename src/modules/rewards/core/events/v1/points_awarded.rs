// Event payload: PointsAwardedV1.
//
// Records that one resolved report was credited to a contributor. The event
// snapshots the points and cash that applied at award time so the ledger
// stays auditable if the policy constants ever change. Timestamps are epoch
// milliseconds, cash amounts are integer cents.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PointsAwardedV1 {
    pub user_id: String,
    pub report_ref: String,
    pub points: i64,
    pub cash_cents: i64,
    pub awarded_at: i64,
}
