// crates/search/src/domain/repositories/relation_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use crate::domain::entities::RelationEdge;

#[async_trait]
pub trait RelationRepository: Send + Sync {
    /// Arêtes sortantes de `source`, triées par poids décroissant.
    /// Filtre `weight >= min_weight`, exclut les boucles (source == target), au plus `limit`.
    async fn fetch_strongest(
        &self,
        source: &AccountId,
        min_weight: f64,
        limit: usize,
    ) -> Result<Vec<RelationEdge>>;
}
