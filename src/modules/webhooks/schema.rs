use serde::Deserialize;
use uuid::Uuid;

/// The one event kind that changes state; everything else is acknowledged and ignored.
pub const USER_UPGRADED: &str = "user.upgraded";

#[derive(Debug, Deserialize)]
pub struct BillingEvent {
    pub event: String,
    pub data: BillingEventData,
}

#[derive(Debug, Deserialize)]
pub struct BillingEventData {
    pub user_id: Uuid,
}
