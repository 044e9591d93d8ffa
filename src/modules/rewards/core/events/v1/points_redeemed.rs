// Event payload: PointsRedeemedV1.
//
// Converts held points into cash-equivalent credit. Not tied to any report,
// which is why there is no report_ref here: redemption entries must be
// distinguishable from award and revoke entries in the history.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PointsRedeemedV1 {
    pub user_id: String,
    pub points: i64,
    pub cash_cents: i64,
    pub redemption_id: String,
    pub redeemed_at: i64,
}
