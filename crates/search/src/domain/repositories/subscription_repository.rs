use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use crate::domain::value_objects::SubscriptionStatus;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn fetch_status(&self, user_id: &AccountId) -> Result<Option<SubscriptionStatus>>;
}
