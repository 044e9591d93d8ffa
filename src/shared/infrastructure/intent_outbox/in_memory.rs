use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod reward_in_memory_domain_outbox_tests {
    use super::*;
    use rstest::rstest;

    fn make_row(stream_version: i64) -> OutboxRow {
        OutboxRow {
            topic: "rewards.v1".to_string(),
            event_type: "PointsAwarded".to_string(),
            event_version: 1,
            stream_id: "RewardAccount-user-fixed-0001".to_string(),
            stream_version,
            occurred_at: 1_700_000_000_000,
            payload: serde_json::json!({ "points": 50 }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_the_row() {
        let outbox = InMemoryDomainOutbox::new();
        assert!(outbox.enqueue(make_row(1)).await.is_ok());
        assert_eq!(outbox.rows.lock().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_enqueue_a_duplicate_row() {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(make_row(1)).await.expect("first enqueue failed");

        let result = outbox.enqueue(make_row(1)).await;
        assert!(matches!(
            result,
            Err(OutboxError::Duplicate {
                stream_id: _,
                stream_version: 1,
            })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_distinct_versions_of_the_same_stream() {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(make_row(1)).await.expect("enqueue v1 failed");
        outbox.enqueue(make_row(2)).await.expect("enqueue v2 failed");
        assert_eq!(outbox.rows.lock().await.len(), 2);
    }
}
