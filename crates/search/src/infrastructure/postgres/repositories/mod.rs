mod postgres_edge_repositories;
mod postgres_location_repository;
mod postgres_relation_repository;
mod postgres_subscription_repository;
mod postgres_user_repository;

pub use postgres_edge_repositories::{PostgresBlockRepository, PostgresFollowRepository};
pub use postgres_location_repository::PostgresLocationRepository;
pub use postgres_relation_repository::PostgresRelationRepository;
pub use postgres_subscription_repository::PostgresSubscriptionRepository;
pub use postgres_user_repository::PostgresUserRepository;
