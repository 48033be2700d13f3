// crates/search/src/domain/repositories/search_repositories.rs

use std::sync::Arc;
use crate::domain::repositories::{
    BlockRepository, FollowRepository, LocationRepository, RelationRepository,
    SubscriptionRepository, UserRepository,
};

/// Façade regroupant les ports de lecture utilisés par la recherche.
/// Cloner la façade ne clone que les `Arc`.
#[derive(Clone)]
pub struct SearchRepositories {
    pub relations: Arc<dyn RelationRepository>,
    pub users: Arc<dyn UserRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub blocks: Arc<dyn BlockRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
}
