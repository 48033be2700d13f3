use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use std::sync::Mutex;
use crate::domain::entities::RelationEdge;
use crate::domain::repositories::RelationRepository;
use crate::utils::stub_support::{lock, StubBehavior};

#[derive(Default)]
pub struct RelationRepositoryStub {
    pub edges: Mutex<Vec<RelationEdge>>,
    pub behavior: StubBehavior,
}

#[async_trait]
impl RelationRepository for RelationRepositoryStub {
    async fn fetch_strongest(
        &self,
        source: &AccountId,
        min_weight: f64,
        limit: usize,
    ) -> Result<Vec<RelationEdge>> {
        let mut edges: Vec<RelationEdge> = lock(&self.edges)
            .iter()
            .filter(|e| e.source == *source && e.target != *source && e.weight >= min_weight)
            .copied()
            .collect();
        edges.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        edges.truncate(limit);

        self.behavior.around(|| edges).await
    }
}
