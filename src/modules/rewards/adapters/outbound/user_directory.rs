// Port to the platform's user store. The ledger only needs two things from
// it: whether a user id resolves to a real identity (the award gate) and
// the display name to show on the leaderboard.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>>;
}

#[derive(Default)]
pub struct InMemoryUserDirectory {
    names: RwLock<HashMap<String, String>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user_id: impl Into<String>, display_name: impl Into<String>) {
        self.names
            .write()
            .await
            .insert(user_id.into(), display_name.into());
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>> {
        Ok(self.names.read().await.get(user_id).cloned())
    }
}
