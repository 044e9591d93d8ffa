use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::rewards::use_cases::leaderboard::inbound::graphql::LeaderboardQuery;
pub use crate::modules::rewards::use_cases::list_reward_history::inbound::graphql::RewardHistoryQuery;
pub use crate::modules::rewards::use_cases::redeem_points::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(LeaderboardQuery, RewardHistoryQuery);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;
