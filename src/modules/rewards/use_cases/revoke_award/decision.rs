use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::intents::RewardIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RevokeDecideError {
    /// The points were already redeemed; clamping the balance would lose the
    /// debt from the ledger, so the revoke is refused and handled manually.
    #[error("balance {available} cannot absorb a revoke of {required} points")]
    InsufficientBalanceForRevoke { available: i64, required: i64 },
}

pub enum RevokeDecision {
    Accepted {
        events: Vec<RewardEvent>,
        intents: Vec<RewardIntent>,
    },
    NothingToRevoke,
    Rejected {
        reason: RevokeDecideError,
    },
}
