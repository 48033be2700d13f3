// crates/search/src/config/weight_table.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::domain::value_objects::{CandidateKind, Criterion, Sentiment};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub weight: f64,
    pub sentiment: Sentiment,
}

impl CriterionWeight {
    /// Le signe du poids doit suivre le sentiment (0 est accepté des deux côtés)
    pub fn is_consistent(&self) -> bool {
        self.weight.is_finite()
            && match self.sentiment {
                Sentiment::Positive => self.weight >= 0.0,
                Sentiment::Negative => self.weight <= 0.0,
            }
    }
}

/// Critère -> poids, pour un type de candidat.
/// Un critère absent de la table ne compte pas dans le score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable(BTreeMap<Criterion, CriterionWeight>);

impl WeightTable {
    pub fn new(entries: impl IntoIterator<Item = (Criterion, CriterionWeight)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn get(&self, criterion: Criterion) -> Option<&CriterionWeight> {
        self.0.get(&criterion)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &CriterionWeight)> {
        self.0.iter().map(|(criterion, weight)| (*criterion, weight))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTables {
    pub related: WeightTable,
    pub unknown: WeightTable,
}

impl WeightTables {
    pub fn for_kind(&self, kind: CandidateKind) -> &WeightTable {
        match kind {
            CandidateKind::Related => &self.related,
            CandidateKind::Unknown => &self.unknown,
        }
    }
}
