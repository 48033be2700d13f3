use serde::{Deserialize, Serialize};

/// Critère de scoring référencé par les tables de poids.
///
/// Les critères "dérivés" (`Nearby`, `Popular`) sont calculés à partir de la distance et du
/// nombre d'abonnés, avec les seuils du jeu de règles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Verified,
    Muted,
    Blocked,
    YouFollow,
    FollowYou,
    YouBlock,
    BlockYou,
    IsPremium,
    Nearby,
    Popular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}
