// crates/search/src/application/search_users/search_phase.rs

use serde::Serialize;
use shared_kernel::errors::{DomainError, Result};

/// Created -> Validating -> Discovering -> Mixing -> Filtering -> Done, ou Failed depuis
/// n'importe quel état non terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Created,
    Validating,
    Discovering,
    Mixing,
    Filtering,
    Done,
    Failed,
}

impl SearchPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    pub fn can_transition_to(self, next: SearchPhase) -> bool {
        use SearchPhase::*;

        if next == Failed {
            return !self.is_terminal();
        }

        matches!(
            (self, next),
            (Created, Validating)
                | (Validating, Discovering)
                | (Discovering, Mixing)
                | (Mixing, Filtering)
                | (Filtering, Done)
        )
    }

    pub fn transition(self, next: SearchPhase) -> Result<SearchPhase> {
        if !self.can_transition_to(next) {
            return Err(DomainError::Internal(format!(
                "illegal search transition {self:?} -> {next:?}"
            )));
        }
        Ok(next)
    }
}
