// crates/search/src/application/search_users/search_users_use_case.rs

use async_trait::async_trait;
use shared_kernel::application::QueryHandler;
use shared_kernel::errors::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use crate::application::discovery::{CandidateDiscovery, RelatedDiscovery, SearchContext, UnknownDiscovery};
use crate::application::hydration::HydrationService;
use crate::application::mixing::{SearchMixer, SecurityFilter};
use crate::application::ranking::CandidateRanker;
use crate::application::search_users::{BranchStatus, SearchOutcome, SearchPhase, SearchUsersQuery};
use crate::application::validate_search_term::SearchTermValidator;
use crate::config::SearchConfig;
use crate::domain::entities::RankedCandidate;
use crate::domain::repositories::SearchRepositories;
use crate::domain::value_objects::SearchTerm;

/// Découverte -> hydratation -> classement, pour une stratégie.
/// Possède tout ce dont elle a besoin pour tourner dans une tâche détachée.
struct BranchPipeline {
    discovery: Arc<dyn CandidateDiscovery>,
    hydration: Arc<HydrationService>,
    ranker: Arc<CandidateRanker>,
}

impl BranchPipeline {
    async fn run(&self, context: &SearchContext, cancel: &CancellationToken) -> Result<Vec<RankedCandidate>> {
        let kind = self.discovery.kind();
        let raw = self.discovery.discover(context).await?;
        let hydrated = self.hydration.process(&raw, kind, &context.requester, cancel).await?;
        Ok(self.ranker.rank(hydrated, kind))
    }
}

pub struct SearchUsersUseCase {
    config: Arc<SearchConfig>,
    validator: SearchTermValidator,
    related: Arc<dyn CandidateDiscovery>,
    unknown: Arc<dyn CandidateDiscovery>,
    hydration: Arc<HydrationService>,
    ranker: Arc<CandidateRanker>,
    mixer: SearchMixer,
    security_filter: SecurityFilter,
}

impl SearchUsersUseCase {
    pub fn new(repos: SearchRepositories, config: Arc<SearchConfig>) -> Self {
        let related = Arc::new(RelatedDiscovery::from_repositories(&repos, config.clone()));
        let unknown = Arc::new(UnknownDiscovery::from_repositories(&repos, config.clone()));
        Self::with_discoveries(repos, config, related, unknown)
    }

    /// Injection explicite des deux stratégies (tests, variantes)
    pub fn with_discoveries(
        repos: SearchRepositories,
        config: Arc<SearchConfig>,
        related: Arc<dyn CandidateDiscovery>,
        unknown: Arc<dyn CandidateDiscovery>,
    ) -> Self {
        Self {
            validator: SearchTermValidator::from_rules(&config.rules),
            hydration: Arc::new(HydrationService::from_rules(repos, &config.rules)),
            ranker: Arc::new(CandidateRanker::new(config.clone())),
            mixer: SearchMixer,
            security_filter: SecurityFilter,
            related,
            unknown,
            config,
        }
    }

    pub async fn execute(&self, query: SearchUsersQuery) -> Result<SearchOutcome> {
        let started = Instant::now();
        let phase = SearchPhase::Created.transition(SearchPhase::Validating)?;

        let term = match self.validator.validate(&query.search_term) {
            Ok(term) => term,
            Err(err) if self.config.rules.reject_invalid_terms => {
                let phase = phase.transition(SearchPhase::Failed)?;
                tracing::info!(code = err.code(), ?phase, "⛔ Search rejected: invalid term");
                return Err(err.into());
            }
            Err(err) => {
                // Pas de filtre textuel plutôt qu'un échec
                tracing::debug!(code = err.code(), "Invalid term, searching without textual filter");
                SearchTerm::empty()
            }
        };

        let phase = phase.transition(SearchPhase::Discovering)?;
        tracing::info!(requester = %query.requester.id(), term = %term, "🔍 Search started");

        let context = Arc::new(SearchContext::new(query.requester, term.clone()));
        let ((related, related_status), (unknown, unknown_status)) = tokio::join!(
            self.run_branch(self.related.clone(), context.clone()),
            self.run_branch(self.unknown.clone(), context.clone()),
        );

        let phase = phase.transition(SearchPhase::Mixing)?;
        let mixed = self.mixer.mix(related, unknown);

        let phase = phase.transition(SearchPhase::Filtering)?;
        let results = self.security_filter.filter(mixed, &context.requester);

        let phase = phase.transition(SearchPhase::Done)?;
        tracing::info!(
            requester = %context.requester.id(),
            results = results.len(),
            related = ?related_status,
            unknown = ?unknown_status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "🏁 Search completed"
        );

        Ok(SearchOutcome {
            term,
            results,
            related: related_status,
            unknown: unknown_status,
            phase,
        })
    }

    /// Timeout "souple" : la branche tourne dans sa propre tâche ; à l'échéance sa valeur est
    /// abandonnée et le jeton est annulé pour que l'hydratation ne lance plus de vague.
    /// Toute erreur ou dépassement devient une contribution vide.
    async fn run_branch(
        &self,
        discovery: Arc<dyn CandidateDiscovery>,
        context: Arc<SearchContext>,
    ) -> (Vec<RankedCandidate>, BranchStatus) {
        let kind = discovery.kind();
        let timeout = self.config.rules.timeout();
        let cancel = CancellationToken::new();

        let pipeline = BranchPipeline {
            discovery,
            hydration: self.hydration.clone(),
            ranker: self.ranker.clone(),
        };
        let task = tokio::spawn({
            let cancel = cancel.clone();
            async move { pipeline.run(&context, &cancel).await }
        });

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(Ok(ranked))) => {
                let count = ranked.len();
                (ranked, BranchStatus::Completed { count })
            }
            Ok(Ok(Err(err))) => {
                tracing::warn!(%kind, error = %err, "⚠️ Search branch failed");
                (Vec::new(), BranchStatus::Failed { reason: err.to_string() })
            }
            Ok(Err(join_err)) => {
                tracing::warn!(%kind, error = %join_err, "⚠️ Search branch task aborted");
                (Vec::new(), BranchStatus::Failed { reason: join_err.to_string() })
            }
            Err(_) => {
                cancel.cancel();
                let after_ms = self.config.rules.timeout_ms;
                tracing::warn!(%kind, after_ms, "⏱️ Search branch timed out");
                (Vec::new(), BranchStatus::TimedOut { after_ms })
            }
        }
    }
}

#[async_trait]
impl QueryHandler<SearchUsersQuery> for SearchUsersUseCase {
    type Output = SearchOutcome;

    async fn handle(&self, query: SearchUsersQuery) -> Result<SearchOutcome> {
        self.execute(query).await
    }
}
