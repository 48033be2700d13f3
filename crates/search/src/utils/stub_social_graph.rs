// crates/search/src/utils/stub_social_graph.rs

use shared_kernel::domain::value_objects::{AccountId, GeoPoint, Username};
use std::sync::Arc;
use crate::domain::entities::{RelationEdge, UserProfile};
use crate::domain::repositories::SearchRepositories;
use crate::domain::value_objects::SubscriptionStatus;
use crate::utils::stub_support::lock;
use crate::utils::{
    BlockRepositoryStub, FollowRepositoryStub, LocationRepositoryStub, RelationRepositoryStub,
    SubscriptionRepositoryStub, UserRepositoryStub,
};

/// Graphe social en mémoire : un stub par port, partagés via `Arc`.
///
/// Les stubs restent accessibles pour injecter erreurs et latences.
#[derive(Default, Clone)]
pub struct StubSocialGraph {
    pub relations: Arc<RelationRepositoryStub>,
    pub users: Arc<UserRepositoryStub>,
    pub locations: Arc<LocationRepositoryStub>,
    pub follows: Arc<FollowRepositoryStub>,
    pub blocks: Arc<BlockRepositoryStub>,
    pub subscriptions: Arc<SubscriptionRepositoryStub>,
}

impl StubSocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(id: AccountId, username: &str) -> UserProfile {
        UserProfile {
            id,
            username: Username::from_raw(username),
            display_name: username.to_string(),
            verified: false,
            muted: false,
            blocked: false,
            deleted: false,
            follower_count: 0,
            profile_picture: None,
        }
    }

    /// Ajoute un utilisateur avec un profil par défaut
    pub fn add_user(&self, username: &str) -> AccountId {
        let id = AccountId::new();
        self.add_profile(Self::profile(id, username));
        id
    }

    pub fn add_profile(&self, profile: UserProfile) {
        lock(&self.users.profiles).push(profile);
    }

    pub fn update_profile(&self, id: &AccountId, update: impl FnOnce(&mut UserProfile)) {
        if let Some(profile) = lock(&self.users.profiles).iter_mut().find(|p| p.id == *id) {
            update(profile);
        }
    }

    /// Retire le profil mais laisse les arêtes qui pointent vers lui
    pub fn remove_user(&self, id: &AccountId) {
        lock(&self.users.profiles).retain(|p| p.id != *id);
    }

    pub fn relate(&self, source: AccountId, target: AccountId, weight: f64) {
        lock(&self.relations.edges).push(RelationEdge { source, target, weight });
    }

    pub fn follow(&self, follower: AccountId, followee: AccountId) {
        lock(&self.follows.follows).insert((follower, followee));
    }

    pub fn block(&self, blocker: AccountId, blockee: AccountId) {
        lock(&self.blocks.blocks).insert((blocker, blockee));
    }

    pub fn locate(&self, id: AccountId, lat: f64, lon: f64) {
        lock(&self.locations.coordinates).insert(id, GeoPoint::from_raw(lat, lon));
    }

    pub fn subscribe(&self, id: AccountId, status: SubscriptionStatus) {
        lock(&self.subscriptions.statuses).insert(id, status);
    }

    pub fn repositories(&self) -> SearchRepositories {
        SearchRepositories {
            relations: self.relations.clone(),
            users: self.users.clone(),
            locations: self.locations.clone(),
            follows: self.follows.clone(),
            blocks: self.blocks.clone(),
            subscriptions: self.subscriptions.clone(),
        }
    }
}
