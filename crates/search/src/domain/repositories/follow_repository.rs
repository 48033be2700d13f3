use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// `follower` suit-il `followee` ?
    async fn exists(&self, follower: &AccountId, followee: &AccountId) -> Result<bool>;
}
