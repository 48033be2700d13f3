mod candidate_fixtures;
mod relation_repository_stub;
mod relationship_stubs;
mod stub_social_graph;
mod stub_support;
mod user_repository_stub;

pub use candidate_fixtures::hydrated_candidate;
pub use relation_repository_stub::RelationRepositoryStub;
pub use relationship_stubs::{
    BlockRepositoryStub, FollowRepositoryStub, LocationRepositoryStub, SubscriptionRepositoryStub,
};
pub use stub_social_graph::StubSocialGraph;
pub use stub_support::StubBehavior;
pub use user_repository_stub::UserRepositoryStub;
