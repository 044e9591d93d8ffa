/// User-initiated cash-out of held points. Independent of any report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemPoints {
    pub user_id: String,
    pub points: i64,
    /// Reference handed to the payout collaborator, generated at the edge.
    pub redemption_id: String,
    pub redeemed_at: i64,
}
