// crates/search/src/config/search_rules.rs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Jeu de règles (rules.json), lu une fois au démarrage puis partagé en lecture seule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRules {
    pub min_search_length: usize,
    pub max_search_length: usize,
    pub min_relation_weight: f64,
    pub max_related_candidates: usize,
    pub max_unknown_candidates: usize,
    #[serde(alias = "max_premium_users")]
    pub max_premium_users_per_page: usize,
    pub max_results_per_page: usize,
    pub batch_size: usize,
    pub max_concurrent_batches: usize,
    pub timeout_ms: u64,

    /// Un terme invalide fait échouer la recherche au lieu de dégrader en terme vide
    #[serde(default)]
    pub reject_invalid_terms: bool,
    #[serde(default = "default_nearby_radius_km")]
    pub nearby_radius_km: f64,
    #[serde(default = "default_popular_follower_threshold")]
    pub popular_follower_threshold: u64,
}

fn default_nearby_radius_km() -> f64 {
    25.0
}

fn default_popular_follower_threshold() -> u64 {
    1000
}

impl SearchRules {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
