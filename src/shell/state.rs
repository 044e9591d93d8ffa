use crate::modules::rewards::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::rewards::adapters::outbound::user_directory::InMemoryUserDirectory;
use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::use_cases::award_points::handler::AwardPointsHandler;
use crate::modules::rewards::use_cases::leaderboard::cache::InMemoryTtlCache;
use crate::modules::rewards::use_cases::leaderboard::handler::Projector;
use crate::modules::rewards::use_cases::leaderboard::reader::LeaderboardReader;
use crate::modules::rewards::use_cases::list_reward_history::queries_port::RewardHistoryQueries;
use crate::modules::rewards::use_cases::redeem_points::handler::RedeemPointsHandler;
use crate::modules::rewards::use_cases::revoke_award::handler::RevokeAwardHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub const REWARDS_TOPIC: &str = "rewards.v1";

#[derive(Clone)]
pub struct AppState {
    pub award_handler:
        Arc<AwardPointsHandler<InMemoryEventStore<RewardEvent>, InMemoryDomainOutbox>>,
    pub revoke_handler:
        Arc<RevokeAwardHandler<InMemoryEventStore<RewardEvent>, InMemoryDomainOutbox>>,
    pub redeem_handler:
        Arc<RedeemPointsHandler<InMemoryEventStore<RewardEvent>, InMemoryDomainOutbox>>,
    pub leaderboard: Arc<LeaderboardReader>,
    pub history_queries: Arc<dyn RewardHistoryQueries + Send + Sync>,
    pub event_store: Arc<InMemoryEventStore<RewardEvent>>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
}

/// Everything the shell (and the end-to-end tests) need a handle on after
/// wiring the service over in-memory adapters.
pub struct InMemoryWiring {
    pub state: AppState,
    pub directory: Arc<InMemoryUserDirectory>,
    pub projections: Arc<InMemoryProjections>,
    pub outbox: Arc<InMemoryDomainOutbox>,
}

pub fn wire_in_memory() -> InMemoryWiring {
    let event_store = Arc::new(InMemoryEventStore::<RewardEvent>::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let directory = Arc::new(InMemoryUserDirectory::new());
    let cache = Arc::new(InMemoryTtlCache::default());

    let projector = Arc::new(Projector::new(
        "reward_summary",
        projections.clone(),
        projections.clone(),
    ));
    let leaderboard = Arc::new(LeaderboardReader::new(
        projections.clone(),
        directory.clone(),
        cache,
    ));

    let state = AppState {
        award_handler: Arc::new(AwardPointsHandler::new(
            REWARDS_TOPIC,
            event_store.clone(),
            outbox.clone(),
            directory.clone(),
        )),
        revoke_handler: Arc::new(RevokeAwardHandler::new(
            REWARDS_TOPIC,
            event_store.clone(),
            outbox.clone(),
        )),
        redeem_handler: Arc::new(RedeemPointsHandler::new(
            REWARDS_TOPIC,
            event_store.clone(),
            outbox.clone(),
        )),
        leaderboard,
        history_queries: projections.clone(),
        event_store,
        projector,
    };

    InMemoryWiring {
        state,
        directory,
        projections,
        outbox,
    }
}
