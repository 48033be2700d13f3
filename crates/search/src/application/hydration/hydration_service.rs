// crates/search/src/application/hydration/hydration_service.rs

//! Enrichissement des candidats bruts : profil, statistiques, relations, distance.
//!
//! Les lectures sont découpées en lots puis en vagues (`WavePlan`) pour borner la charge
//! instantanée sur le data store. Pas de timeout ni de retry ici : la deadline est posée par
//! l'orchestrateur, qui annule le jeton pour empêcher le lancement des vagues suivantes.

use futures::future::try_join_all;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::concurrency::WavePlan;
use tokio_util::sync::CancellationToken;
use crate::config::SearchRules;
use crate::domain::entities::{HydratedCandidate, RawCandidate, Requester, UserProfile};
use crate::domain::repositories::SearchRepositories;
use crate::domain::value_objects::CandidateKind;

pub struct HydrationService {
    repos: SearchRepositories,
    plan: WavePlan,
}

impl HydrationService {
    pub fn new(repos: SearchRepositories, plan: WavePlan) -> Self {
        Self { repos, plan }
    }

    pub fn from_rules(repos: SearchRepositories, rules: &SearchRules) -> Self {
        Self::new(repos, WavePlan::new(rules.batch_size, rules.max_concurrent_batches))
    }

    pub fn plan(&self) -> WavePlan {
        self.plan
    }

    /// Sortie dans l'ordre d'entrée, sans doublon ; les comptes supprimés sont sautés
    pub async fn process(
        &self,
        candidates: &[RawCandidate],
        kind: CandidateKind,
        requester: &Requester,
        cancel: &CancellationToken,
    ) -> Result<Vec<HydratedCandidate>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(
            %kind,
            candidates = candidates.len(),
            batch_size = self.plan.batch_size(),
            max_concurrent_batches = self.plan.max_concurrent_batches(),
            "🚀 Starting hydration"
        );

        let hydrated = match kind {
            CandidateKind::Related => {
                self.plan
                    .run("hydrate_related", candidates, cancel, |batch| {
                        self.hydrate_related_batch(batch, requester)
                    })
                    .await?
            }
            CandidateKind::Unknown => {
                let origin = self.requester_coordinates(requester).await?;
                self.plan
                    .run("hydrate_unknown", candidates, cancel, |batch| {
                        self.hydrate_unknown_batch(batch, requester, origin)
                    })
                    .await?
            }
        };

        let hydrated: Vec<HydratedCandidate> = hydrated.into_iter().flatten().collect();

        tracing::debug!(%kind, hydrated = hydrated.len(), "✅ Hydration completed");
        Ok(hydrated)
    }

    async fn hydrate_related_batch(
        &self,
        batch: &[RawCandidate],
        requester: &Requester,
    ) -> Result<Vec<Option<HydratedCandidate>>> {
        try_join_all(batch.iter().map(|candidate| self.hydrate_related(candidate, requester))).await
    }

    async fn hydrate_unknown_batch(
        &self,
        batch: &[RawCandidate],
        requester: &Requester,
        origin: GeoPoint,
    ) -> Result<Vec<Option<HydratedCandidate>>> {
        try_join_all(batch.iter().map(|candidate| self.hydrate_unknown(candidate, requester, origin))).await
    }

    /// Profil + le demandeur suit-il ce candidat ?
    async fn hydrate_related(
        &self,
        candidate: &RawCandidate,
        requester: &Requester,
    ) -> Result<Option<HydratedCandidate>> {
        let id = &candidate.candidate_id;
        let (profile, requester_follows) = tokio::try_join!(
            self.repos.users.fetch_profile(id),
            self.repos.follows.exists(requester.id(), id),
        )?;

        let Some(profile) = visible_profile(profile, candidate)? else {
            return Ok(None);
        };

        let mut hydrated = base_candidate(profile, candidate, CandidateKind::Related);
        hydrated.requester_follows = Some(requester_follows);
        Ok(Some(hydrated))
    }

    /// Profil, coordonnées, suivi inverse et blocages dans les deux sens
    async fn hydrate_unknown(
        &self,
        candidate: &RawCandidate,
        requester: &Requester,
        origin: GeoPoint,
    ) -> Result<Option<HydratedCandidate>> {
        let id = &candidate.candidate_id;
        let me = requester.id();
        let (profile, coordinates, follows_requester, requester_blocks, candidate_blocks) = tokio::try_join!(
            self.repos.users.fetch_profile(id),
            self.repos.locations.fetch_coordinates(id),
            self.repos.follows.exists(id, me),
            self.repos.blocks.exists(me, id),
            self.repos.blocks.exists(id, me),
        )?;

        let Some(profile) = visible_profile(profile, candidate)? else {
            return Ok(None);
        };

        let coordinates = coordinates.ok_or_else(|| missing_coordinates(candidate))?;

        let mut hydrated = base_candidate(profile, candidate, CandidateKind::Unknown);
        hydrated.follows_requester = Some(follows_requester);
        hydrated.requester_blocks_candidate = Some(requester_blocks);
        hydrated.candidate_blocks_requester = Some(candidate_blocks);
        hydrated.distance_km = Some(origin.distance_km_to(&coordinates));
        Ok(Some(hydrated))
    }

    /// Lue une seule fois par hydratation unknown
    async fn requester_coordinates(&self, requester: &Requester) -> Result<GeoPoint> {
        self.repos
            .locations
            .fetch_coordinates(requester.id())
            .await?
            .ok_or_else(|| {
                tracing::error!(requester = %requester.id(), "💥 Requester has no coordinates");
                DomainError::DataConsistency {
                    entity: "UserCoordinates",
                    id: requester.id().to_string(),
                    reason: "requester has no coordinates".into(),
                }
            })
    }
}

/// Profil absent : incohérence. Profil supprimé : marqueur de saut (`None`).
fn visible_profile(profile: Option<UserProfile>, candidate: &RawCandidate) -> Result<Option<UserProfile>> {
    let profile = profile.ok_or_else(|| {
        tracing::error!(candidate = %candidate.candidate_id, "💥 Candidate user not found");
        DomainError::DataConsistency {
            entity: "User",
            id: candidate.candidate_id.to_string(),
            reason: "candidate user not found".into(),
        }
    })?;

    if profile.deleted {
        tracing::debug!(candidate = %candidate.candidate_id, "Skipping deleted account");
        return Ok(None);
    }
    Ok(Some(profile))
}

fn missing_coordinates(candidate: &RawCandidate) -> DomainError {
    tracing::error!(candidate = %candidate.candidate_id, "💥 Candidate has no coordinates");
    DomainError::DataConsistency {
        entity: "UserCoordinates",
        id: candidate.candidate_id.to_string(),
        reason: "candidate has no coordinates".into(),
    }
}

fn base_candidate(profile: UserProfile, candidate: &RawCandidate, kind: CandidateKind) -> HydratedCandidate {
    HydratedCandidate {
        candidate_id: profile.id,
        kind,
        username: profile.username,
        display_name: profile.display_name,
        verified: profile.verified,
        muted: profile.muted,
        blocked: profile.blocked,
        profile_picture: profile.profile_picture,
        follower_count: profile.follower_count,
        match_weight: candidate.match_weight,
        is_premium_subscriber: candidate.is_premium_subscriber,
        requester_follows: None,
        follows_requester: None,
        requester_blocks_candidate: None,
        candidate_blocks_requester: None,
        distance_km: None,
    }
}
