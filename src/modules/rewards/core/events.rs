pub mod v1 {
    pub mod award_revoked;
    pub mod points_awarded;
    pub mod points_redeemed;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RewardEvent {
    PointsAwardedV1(v1::points_awarded::PointsAwardedV1),
    AwardRevokedV1(v1::award_revoked::AwardRevokedV1),
    PointsRedeemedV1(v1::points_redeemed::PointsRedeemedV1),
}
