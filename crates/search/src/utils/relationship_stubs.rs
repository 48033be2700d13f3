use async_trait::async_trait;
use shared_kernel::domain::value_objects::{AccountId, GeoPoint};
use shared_kernel::errors::Result;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use crate::domain::repositories::{
    BlockRepository, FollowRepository, LocationRepository, SubscriptionRepository,
};
use crate::domain::value_objects::SubscriptionStatus;
use crate::utils::stub_support::{lock, StubBehavior};

#[derive(Default)]
pub struct FollowRepositoryStub {
    /// (follower, followee)
    pub follows: Mutex<HashSet<(AccountId, AccountId)>>,
    pub behavior: StubBehavior,
}

#[async_trait]
impl FollowRepository for FollowRepositoryStub {
    async fn exists(&self, follower: &AccountId, followee: &AccountId) -> Result<bool> {
        let found = lock(&self.follows).contains(&(*follower, *followee));
        self.behavior.around(|| found).await
    }
}

#[derive(Default)]
pub struct BlockRepositoryStub {
    /// (blocker, blockee)
    pub blocks: Mutex<HashSet<(AccountId, AccountId)>>,
    pub behavior: StubBehavior,
}

#[async_trait]
impl BlockRepository for BlockRepositoryStub {
    async fn exists(&self, blocker: &AccountId, blockee: &AccountId) -> Result<bool> {
        let found = lock(&self.blocks).contains(&(*blocker, *blockee));
        self.behavior.around(|| found).await
    }
}

#[derive(Default)]
pub struct LocationRepositoryStub {
    pub coordinates: Mutex<HashMap<AccountId, GeoPoint>>,
    pub behavior: StubBehavior,
}

#[async_trait]
impl LocationRepository for LocationRepositoryStub {
    async fn fetch_coordinates(&self, id: &AccountId) -> Result<Option<GeoPoint>> {
        let point = lock(&self.coordinates).get(id).copied();
        self.behavior.around(|| point).await
    }
}

#[derive(Default)]
pub struct SubscriptionRepositoryStub {
    pub statuses: Mutex<HashMap<AccountId, SubscriptionStatus>>,
    pub behavior: StubBehavior,
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryStub {
    async fn fetch_status(&self, user_id: &AccountId) -> Result<Option<SubscriptionStatus>> {
        let status = lock(&self.statuses).get(user_id).copied();
        self.behavior.around(|| status).await
    }
}
