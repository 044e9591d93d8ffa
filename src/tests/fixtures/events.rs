use crate::modules::rewards::core::events::v1::points_awarded::PointsAwardedV1;

pub fn make_points_awarded_v1_event() -> PointsAwardedV1 {
    PointsAwardedV1 {
        user_id: "user-fixed-0001".to_string(),
        report_ref: "report-fixed-0001".to_string(),
        points: 50,
        cash_cents: 500,
        awarded_at: 1_700_000_000_000,
    }
}
