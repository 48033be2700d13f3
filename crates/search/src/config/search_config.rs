// crates/search/src/config/search_config.rs

use serde::de::DeserializeOwned;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use std::path::Path;
use crate::config::{SearchRules, WeightTable, WeightTables};

const RULES_FILE: &str = "rules.json";
const RELATED_WEIGHTS_FILE: &str = "related_candidates_weights.json";
const UNKNOWN_WEIGHTS_FILE: &str = "unknown_candidates_weights.json";

const EMBEDDED_RULES: &str = include_str!("../../config/rules.json");
const EMBEDDED_RELATED_WEIGHTS: &str = include_str!("../../config/related_candidates_weights.json");
const EMBEDDED_UNKNOWN_WEIGHTS: &str = include_str!("../../config/unknown_candidates_weights.json");

/// Configuration complète du moteur : règles + tables de poids.
///
/// Construite explicitement au démarrage puis injectée (`Arc<SearchConfig>`) dans le use case.
/// Aucune mutation après chargement.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub rules: SearchRules,
    pub weights: WeightTables,
}

impl SearchConfig {
    pub fn new(rules: SearchRules, weights: WeightTables) -> Self {
        Self { rules, weights }
    }

    /// Documents embarqués dans le binaire (crates/search/config)
    pub fn embedded() -> AppResult<Self> {
        let config = Self {
            rules: parse(RULES_FILE, EMBEDDED_RULES)?,
            weights: WeightTables {
                related: parse(RELATED_WEIGHTS_FILE, EMBEDDED_RELATED_WEIGHTS)?,
                unknown: parse(UNKNOWN_WEIGHTS_FILE, EMBEDDED_UNKNOWN_WEIGHTS)?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Lit les trois documents JSON d'un répertoire
    pub fn load_from_dir(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();

        let config = Self {
            rules: read(&dir.join(RULES_FILE))?,
            weights: WeightTables {
                related: read::<WeightTable>(&dir.join(RELATED_WEIGHTS_FILE))?,
                unknown: read::<WeightTable>(&dir.join(UNKNOWN_WEIGHTS_FILE))?,
            },
        };
        config.validate()?;

        tracing::info!(
            dir = %dir.display(),
            related_criteria = config.weights.related.len(),
            unknown_criteria = config.weights.unknown.len(),
            "⚙️ Search configuration loaded"
        );
        Ok(config)
    }

    /// `SEARCH_CONFIG_DIR` (sinon documents embarqués), puis surcharge `SEARCH_TIMEOUT_MS`
    pub fn from_env() -> AppResult<Self> {
        let mut config = match std::env::var("SEARCH_CONFIG_DIR") {
            Ok(dir) => Self::load_from_dir(dir)?,
            Err(_) => Self::embedded()?,
        };

        if let Ok(raw) = std::env::var("SEARCH_TIMEOUT_MS") {
            config.rules.timeout_ms = raw
                .parse()
                .map_err(|_| AppError::new(ErrorCode::InternalError, "Invalid SEARCH_TIMEOUT_MS"))?;
            config.validate()?;
        }

        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let rules = &self.rules;

        if rules.min_search_length > rules.max_search_length {
            return Err(invalid(format!(
                "min_search_length ({}) exceeds max_search_length ({})",
                rules.min_search_length, rules.max_search_length
            )));
        }
        if rules.batch_size == 0 || rules.max_concurrent_batches == 0 {
            return Err(invalid("batch_size and max_concurrent_batches must be positive"));
        }
        if rules.timeout_ms == 0 {
            return Err(invalid("timeout_ms must be positive"));
        }
        if !rules.min_relation_weight.is_finite() || !rules.nearby_radius_km.is_finite() {
            return Err(invalid("min_relation_weight and nearby_radius_km must be finite"));
        }

        for (kind, table) in [("related", &self.weights.related), ("unknown", &self.weights.unknown)] {
            if let Some((criterion, entry)) = table.iter().find(|(_, entry)| !entry.is_consistent()) {
                return Err(invalid(format!(
                    "{kind} weight for {criterion:?} ({}) contradicts its {:?} sentiment",
                    entry.weight, entry.sentiment
                )));
            }
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::embedded().expect("embedded search configuration is valid")
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> AppResult<T> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::new(ErrorCode::InternalError, format!("Invalid {name}: {e}"))
    })
}

fn read<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::InternalError,
            format!("Cannot read {}: {e}", path.display()),
        )
    })?;
    parse(&path.display().to_string(), &raw)
}

fn invalid(reason: impl Into<String>) -> AppError {
    AppError::new(ErrorCode::InternalError, "Invalid search configuration")
        .with_details(serde_json::json!({ "reason": reason.into() }))
}
