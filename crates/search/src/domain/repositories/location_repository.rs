use async_trait::async_trait;
use shared_kernel::domain::value_objects::{AccountId, GeoPoint};
use shared_kernel::errors::Result;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Dernière position connue d'un utilisateur
    async fn fetch_coordinates(&self, id: &AccountId) -> Result<Option<GeoPoint>>;
}
