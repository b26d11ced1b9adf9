use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SubscriptionTier;

/// Lifecycle of a requested tier change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStatus {
    Pending,
    Applied,
    Abandoned,
}

/// A tier change awaiting payment confirmation.
///
/// The payment provider is opaque to the core; the only signal it delivers is
/// whether payment was confirmed. Until then the learner stays on `from`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierUpgrade {
    pub upgrade_id: Uuid,
    pub from: SubscriptionTier,
    pub to: SubscriptionTier,
    pub status: UpgradeStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl TierUpgrade {
    pub fn request(from: SubscriptionTier, to: SubscriptionTier, now: DateTime<Utc>) -> Self {
        Self {
            upgrade_id: Uuid::new_v4(),
            from,
            to,
            status: UpgradeStatus::Pending,
            requested_at: now,
            resolved_at: None,
        }
    }

    /// Applies or abandons the pending upgrade based on the payment outcome.
    /// Already-resolved upgrades are returned unchanged.
    pub fn confirm_payment(mut self, confirmed: bool, now: DateTime<Utc>) -> Self {
        if self.status != UpgradeStatus::Pending {
            return self;
        }
        self.status = if confirmed {
            UpgradeStatus::Applied
        } else {
            UpgradeStatus::Abandoned
        };
        self.resolved_at = Some(now);
        self
    }

    /// The tier the learner is entitled to after this upgrade record.
    pub fn effective_tier(&self) -> SubscriptionTier {
        match self.status {
            UpgradeStatus::Applied => self.to,
            UpgradeStatus::Pending | UpgradeStatus::Abandoned => self.from,
        }
    }
}
