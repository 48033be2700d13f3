use serde::{Deserialize, Serialize};
use shared_kernel::errors::DomainError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Pending,
    Canceled,
    Expired,
}

impl SubscriptionStatus {
    /// Seul un abonnement actif donne accès au palier premium
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for SubscriptionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            "expired" => Ok(Self::Expired),
            other => Err(DomainError::Validation {
                field: "subscription_status",
                reason: format!("unknown status '{other}'"),
            }),
        }
    }
}
