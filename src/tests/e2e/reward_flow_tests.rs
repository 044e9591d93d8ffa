// End-to-end scenarios over the fully wired in-memory service: the whole
// award / redeem / revoke lifecycle, ledger reconstruction, and the ranked
// read path.

use crate::modules::rewards::core::events::RewardEvent;
use crate::modules::rewards::core::state::account_stream_id;
use crate::modules::rewards::use_cases::award_points::handler::AwardOutcome;
use crate::modules::rewards::use_cases::revoke_award::decision::RevokeDecideError;
use crate::modules::rewards::use_cases::revoke_award::handler::RevokeError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::{wire_in_memory, InMemoryWiring};
use crate::tests::fixtures::commands::{
    AwardPointsBuilder, RedeemPointsBuilder, RevokeAwardBuilder, FIXED_USER_ID,
};
use rstest::{fixture, rstest};

#[fixture]
fn wiring() -> InMemoryWiring {
    dotenvy::dotenv().ok();
    wire_in_memory()
}

#[rstest]
#[tokio::test]
async fn it_should_run_the_full_reward_lifecycle(wiring: InMemoryWiring) {
    wiring.directory.insert(FIXED_USER_ID, "Fixed User").await;

    // Award R1: 50 points, 5.00 lifetime earnings.
    let outcome = wiring
        .state
        .award_handler
        .handle(AwardPointsBuilder::new().report_ref("R1").build())
        .await
        .expect("award failed");
    let account = match outcome {
        AwardOutcome::Applied { account, .. } => account,
        other => panic!("expected Applied, got {other:?}"),
    };
    assert_eq!(account.balance, 50);
    assert_eq!(account.total_reports_rewarded, 1);
    assert_eq!(account.lifetime_earnings_cents, 500);

    // Award R1 again: explicit no-op, nothing moves.
    let outcome = wiring
        .state
        .award_handler
        .handle(AwardPointsBuilder::new().report_ref("R1").build())
        .await
        .expect("duplicate award failed");
    match outcome {
        AwardOutcome::AlreadyAwarded { account } => {
            assert_eq!(account.balance, 50);
            assert_eq!(account.lifetime_earnings_cents, 500);
        }
        other => panic!("expected AlreadyAwarded, got {other:?}"),
    }

    // Redeem the 50 points: balance 0, lifetime earnings 10.00.
    let receipt = wiring
        .state
        .redeem_handler
        .handle(RedeemPointsBuilder::new().points(50).build())
        .await
        .expect("redeem failed");
    assert_eq!(receipt.account.balance, 0);
    assert_eq!(receipt.account.lifetime_earnings_cents, 1000);
    assert_eq!(receipt.cash_cents_credited, 500);
    assert_eq!(receipt.redemption_id, "redemption-fixed-0001");

    // Revoking R1 now would drive the balance negative: refused.
    let result = wiring
        .state
        .revoke_handler
        .handle(RevokeAwardBuilder::new().report_ref("R1").build())
        .await;
    assert!(matches!(
        result,
        Err(RevokeError::Domain(
            RevokeDecideError::InsufficientBalanceForRevoke {
                available: 0,
                required: 50,
            }
        ))
    ));
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_balance_equal_to_the_sum_of_point_deltas(wiring: InMemoryWiring) {
    wiring.directory.insert(FIXED_USER_ID, "Fixed User").await;

    for report_ref in ["R1", "R2", "R3"] {
        wiring
            .state
            .award_handler
            .handle(AwardPointsBuilder::new().report_ref(report_ref).build())
            .await
            .expect("award failed");
    }
    wiring
        .state
        .revoke_handler
        .handle(RevokeAwardBuilder::new().report_ref("R2").build())
        .await
        .expect("revoke failed");
    let receipt = wiring
        .state
        .redeem_handler
        .handle(RedeemPointsBuilder::new().points(30).build())
        .await
        .expect("redeem failed");

    let stream = wiring
        .state
        .event_store
        .load(&account_stream_id(FIXED_USER_ID))
        .await
        .expect("load failed");
    let sum_of_deltas: i64 = stream
        .events
        .iter()
        .map(|event| match event {
            RewardEvent::PointsAwardedV1(e) => e.points,
            RewardEvent::AwardRevokedV1(e) => -e.points,
            RewardEvent::PointsRedeemedV1(e) => -e.points,
        })
        .sum();

    assert_eq!(receipt.account.balance, 70);
    assert_eq!(
        sum_of_deltas, receipt.account.balance,
        "the aggregate must stay re-derivable from the history"
    );
}

#[rstest]
#[tokio::test]
async fn it_should_rank_contributors_after_awards_flow_through_projections(
    wiring: InMemoryWiring,
) {
    for (user_id, reports) in [("u-bronze", 1), ("u-gold", 5), ("u-silver", 3)] {
        wiring.directory.insert(user_id, user_id).await;
        for n in 0..reports {
            let outcome = wiring
                .state
                .award_handler
                .handle(
                    AwardPointsBuilder::new()
                        .user_id(user_id)
                        .report_ref(format!("{user_id}-report-{n}"))
                        .build(),
                )
                .await
                .expect("award failed");
            assert!(matches!(outcome, AwardOutcome::Applied { .. }));
        }
        // Project the stream the way the inbound adapters do after a write.
        let stream_id = account_stream_id(user_id);
        let loaded = wiring
            .state
            .event_store
            .load(&stream_id)
            .await
            .expect("load failed");
        wiring
            .state
            .projector
            .replay(&stream_id, &loaded.events)
            .await
            .expect("projection replay failed");
    }

    let top = wiring
        .state
        .leaderboard
        .top(Some(3))
        .await
        .expect("leaderboard read failed");
    let ranked: Vec<(&str, i64)> = top
        .iter()
        .map(|entry| (entry.user_id.as_str(), entry.balance))
        .collect();
    assert_eq!(
        ranked,
        vec![("u-gold", 250), ("u-silver", 150), ("u-bronze", 50)]
    );

    let outbox_rows = wiring.outbox.rows.lock().await;
    assert_eq!(outbox_rows.len(), 9, "one integration event per applied award");
}
