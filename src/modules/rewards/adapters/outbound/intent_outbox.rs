use crate::modules::rewards::core::intents::RewardIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<RewardIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let (event_type, occurred_at, payload) = match intent {
            RewardIntent::PublishPointsAwarded { payload } => (
                "PointsAwarded",
                payload.awarded_at,
                serde_json::to_value(payload).map_err(|e| OutboxError::Backend(e.to_string()))?,
            ),
            RewardIntent::PublishAwardRevoked { payload } => (
                "AwardRevoked",
                payload.revoked_at,
                serde_json::to_value(payload).map_err(|e| OutboxError::Backend(e.to_string()))?,
            ),
            RewardIntent::PublishPointsRedeemed { payload } => (
                "PointsRedeemed",
                payload.redeemed_at,
                serde_json::to_value(payload).map_err(|e| OutboxError::Backend(e.to_string()))?,
            ),
        };
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod reward_intent_outbox_tests {
    use super::*;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::events::make_points_awarded_v1_event;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_one_row_per_intent_with_sequential_versions() {
        let outbox = InMemoryDomainOutbox::new();
        let payload = make_points_awarded_v1_event();
        let intents = vec![
            RewardIntent::PublishPointsAwarded {
                payload: payload.clone(),
            },
            RewardIntent::PublishPointsAwarded {
                payload: {
                    let mut second = payload;
                    second.report_ref = "report-fixed-0002".to_string();
                    second
                },
            },
        ];

        dispatch_intents(&outbox, "RewardAccount-user-fixed-0001", 3, "rewards.v1", intents)
            .await
            .expect("dispatch failed");

        let rows = outbox.rows.lock().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].stream_version, 4);
        assert_eq!(rows[1].stream_version, 5);
        assert_eq!(rows[0].event_type, "PointsAwarded");
        assert_eq!(rows[0].topic, "rewards.v1");
    }
}
