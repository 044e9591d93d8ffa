// Pluggable leaderboard cache. The ranking is rebuilt from projections at
// most once per TTL window per limit; a profile mutation on the same key
// space calls clear() to force the next read through.

use crate::modules::rewards::use_cases::leaderboard::reader::LeaderboardEntry;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

pub const LEADERBOARD_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[async_trait]
pub trait LeaderboardCache: Send + Sync {
    async fn get(&self, limit: u64) -> Option<Vec<LeaderboardEntry>>;
    async fn put(&self, limit: u64, entries: Vec<LeaderboardEntry>);
    async fn clear(&self);
}

pub struct InMemoryTtlCache {
    ttl: Duration,
    inner: RwLock<HashMap<u64, (Instant, Vec<LeaderboardEntry>)>>,
}

impl InMemoryTtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTtlCache {
    fn default() -> Self {
        Self::new(LEADERBOARD_CACHE_TTL)
    }
}

#[async_trait]
impl LeaderboardCache for InMemoryTtlCache {
    async fn get(&self, limit: u64) -> Option<Vec<LeaderboardEntry>> {
        let guard = self.inner.read().await;
        let (stored_at, entries) = guard.get(&limit)?;
        if stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entries.clone())
    }

    async fn put(&self, limit: u64, entries: Vec<LeaderboardEntry>) {
        self.inner
            .write()
            .await
            .insert(limit, (Instant::now(), entries));
    }

    async fn clear(&self) {
        self.inner.write().await.clear();
    }
}
