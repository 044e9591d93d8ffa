// Event payload: AwardRevokedV1.
//
// Reverses a previously applied award, e.g. because the report's resolution
// was overturned. Carries the original award's amounts, not today's policy
// values.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct AwardRevokedV1 {
    pub user_id: String,
    pub report_ref: String,
    pub points: i64,
    pub cash_cents: i64,
    pub revoked_at: i64,
}
