use crate::errors::Result;

/// Port de lecture : un handler par type de requête, sans effet de bord
#[async_trait::async_trait]
pub trait QueryHandler<Q>: Send + Sync {
    type Output;
    async fn handle(&self, query: Q) -> Result<Self::Output>;
}
