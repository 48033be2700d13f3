mod block_repository;
mod follow_repository;
mod location_repository;
mod relation_repository;
mod search_repositories;
mod subscription_repository;
mod user_repository;

pub use block_repository::BlockRepository;
pub use follow_repository::FollowRepository;
pub use location_repository::LocationRepository;
pub use relation_repository::RelationRepository;
pub use search_repositories::SearchRepositories;
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
