use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::intents::RewardIntent;

/// Award has no domain rejection: either the report earns its one credit or
/// it was already credited, which is a success no-op the caller must be
/// able to tell apart from a failure.
pub enum AwardDecision {
    Accepted {
        events: Vec<RewardEvent>,
        intents: Vec<RewardIntent>,
    },
    AlreadyAwarded,
}
