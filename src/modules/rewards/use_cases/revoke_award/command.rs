/// Reverse the credit for `report_ref`, e.g. because its resolution was
/// overturned or the report was dismissed after review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeAward {
    pub user_id: String,
    pub report_ref: String,
    pub revoked_at: i64,
}
