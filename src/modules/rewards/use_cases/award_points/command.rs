/// Intent of the report-lifecycle collaborator: credit `user_id` for the
/// resolved report `report_ref`. Transport-independent; `awarded_at` is
/// stamped by the inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardPoints {
    pub user_id: String,
    pub report_ref: String,
    pub awarded_at: i64,
}
