use crate::domain::entities::Requester;
use crate::domain::value_objects::SearchTerm;

/// Entrée commune aux deux stratégies de découverte, construite une fois par recherche
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    pub requester: Requester,
    pub term: SearchTerm,
}

impl SearchContext {
    pub fn new(requester: Requester, term: SearchTerm) -> Self {
        Self { requester, term }
    }
}
