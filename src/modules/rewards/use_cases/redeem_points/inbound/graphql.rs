use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::rewards::core::policy::currency_units;
use crate::modules::rewards::core::state::account_stream_id;
use crate::modules::rewards::use_cases::redeem_points::command::RedeemPoints;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject)]
pub struct GqlRedeemReceipt {
    pub redemption_id: String,
    pub points_redeemed: i64,
    pub cash_credited: f64,
    pub balance: i64,
    pub lifetime_earnings: f64,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn redeem_points(
        &self,
        context: &Context<'_>,
        user_id: String,
        points: i64,
    ) -> GqlResult<GqlRedeemReceipt> {
        let state = context.data_unchecked::<AppState>();

        let command = RedeemPoints {
            user_id: user_id.clone(),
            points,
            redemption_id: Uuid::now_v7().to_string(),
            redeemed_at: Utc::now().timestamp_millis(),
        };

        let receipt = state
            .redeem_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        // Inline projection so queries see the new balance immediately.
        let stream_id = account_stream_id(&user_id);
        let loaded = state
            .event_store
            .load(&stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        state
            .projector
            .replay(&stream_id, &loaded.events)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlRedeemReceipt {
            redemption_id: receipt.redemption_id,
            points_redeemed: receipt.points_redeemed,
            cash_credited: currency_units(receipt.cash_cents_credited),
            balance: receipt.account.balance,
            lifetime_earnings: currency_units(receipt.account.lifetime_earnings_cents),
        })
    }
}
