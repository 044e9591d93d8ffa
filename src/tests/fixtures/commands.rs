// Shared command builders with fixed, deterministic defaults. Tests adjust
// single fields through the setters instead of repeating whole commands.

use crate::modules::rewards::use_cases::award_points::command::AwardPoints;
use crate::modules::rewards::use_cases::redeem_points::command::RedeemPoints;
use crate::modules::rewards::use_cases::revoke_award::command::RevokeAward;

pub const FIXED_USER_ID: &str = "user-fixed-0001";
pub const FIXED_REPORT_REF: &str = "report-fixed-0001";
pub const FIXED_TIMESTAMP: i64 = 1_700_000_000_000;

pub struct AwardPointsBuilder {
    inner: AwardPoints,
}

impl Default for AwardPointsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AwardPointsBuilder {
    pub fn new() -> Self {
        Self {
            inner: AwardPoints {
                user_id: FIXED_USER_ID.to_string(),
                report_ref: FIXED_REPORT_REF.to_string(),
                awarded_at: FIXED_TIMESTAMP,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn report_ref(mut self, v: impl Into<String>) -> Self {
        self.inner.report_ref = v.into();
        self
    }

    pub fn awarded_at(mut self, v: i64) -> Self {
        self.inner.awarded_at = v;
        self
    }

    pub fn build(self) -> AwardPoints {
        self.inner
    }
}

pub struct RevokeAwardBuilder {
    inner: RevokeAward,
}

impl Default for RevokeAwardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RevokeAwardBuilder {
    pub fn new() -> Self {
        Self {
            inner: RevokeAward {
                user_id: FIXED_USER_ID.to_string(),
                report_ref: FIXED_REPORT_REF.to_string(),
                revoked_at: FIXED_TIMESTAMP + 60_000,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn report_ref(mut self, v: impl Into<String>) -> Self {
        self.inner.report_ref = v.into();
        self
    }

    pub fn revoked_at(mut self, v: i64) -> Self {
        self.inner.revoked_at = v;
        self
    }

    pub fn build(self) -> RevokeAward {
        self.inner
    }
}

pub struct RedeemPointsBuilder {
    inner: RedeemPoints,
}

impl Default for RedeemPointsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RedeemPointsBuilder {
    pub fn new() -> Self {
        Self {
            inner: RedeemPoints {
                user_id: FIXED_USER_ID.to_string(),
                points: 50,
                redemption_id: "redemption-fixed-0001".to_string(),
                redeemed_at: FIXED_TIMESTAMP + 120_000,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn points(mut self, v: i64) -> Self {
        self.inner.points = v;
        self
    }

    pub fn redemption_id(mut self, v: impl Into<String>) -> Self {
        self.inner.redemption_id = v.into();
        self
    }

    pub fn redeemed_at(mut self, v: i64) -> Self {
        self.inner.redeemed_at = v;
        self
    }

    pub fn build(self) -> RedeemPoints {
        self.inner
    }
}
