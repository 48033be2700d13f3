use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

#[async_trait]
pub trait BlockRepository: Send + Sync {
    /// `blocker` a-t-il bloqué `blockee` ?
    async fn exists(&self, blocker: &AccountId, blockee: &AccountId) -> Result<bool>;
}
