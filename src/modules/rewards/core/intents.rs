use crate::modules::rewards::core::events::v1::award_revoked::AwardRevokedV1;
use crate::modules::rewards::core::events::v1::points_awarded::PointsAwardedV1;
use crate::modules::rewards::core::events::v1::points_redeemed::PointsRedeemedV1;

/// Side effects the decider asks the application layer to carry out after
/// the append commits. Today these all publish to the rewards topic for
/// downstream consumers (the notification mailer, most importantly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardIntent {
    PublishPointsAwarded { payload: PointsAwardedV1 },
    PublishAwardRevoked { payload: AwardRevokedV1 },
    PublishPointsRedeemed { payload: PointsRedeemedV1 },
}
