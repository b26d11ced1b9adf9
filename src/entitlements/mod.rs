//! Static tier-to-capability catalog.
//!
//! Pure lookup tables, no mutable state. Resolution fails closed: an id the
//! catalog does not recognize is treated as the lowest-privilege tier, which
//! is how the rest of the portal already interprets "not entitled".

pub mod upgrade;

pub use upgrade::{TierUpgrade, UpgradeStatus};

use serde::{Deserialize, Serialize};

use crate::cpd::{CpdCategory, CpdRequirement};

/// A named subscription level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Basic,
    Individual,
    Enterprise,
}

impl SubscriptionTier {
    /// Resolves a tier id case-insensitively, failing closed to `Basic`.
    /// `"premium"` is accepted as the legacy alias of `Individual`.
    pub fn resolve(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "individual" | "premium" => SubscriptionTier::Individual,
            "enterprise" => SubscriptionTier::Enterprise,
            _ => SubscriptionTier::Basic,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Individual => "individual",
            SubscriptionTier::Enterprise => "enterprise",
        }
    }
}

/// Immutable capability descriptor for one tier.
#[derive(Debug, Clone, Copy)]
pub struct TierDescriptor {
    pub tier: SubscriptionTier,
    pub display_name: &'static str,
    pub features: &'static [&'static str],
    pub study_guide_access: bool,
    pub practice_exam_access: bool,
    pub tools: &'static [&'static str],
    pub resources: &'static [&'static str],
}

const TIER_DESCRIPTORS: [TierDescriptor; 3] = [
    TierDescriptor {
        tier: SubscriptionTier::Basic,
        display_name: "Basic",
        features: &["course_modules", "final_assessment", "certificate"],
        study_guide_access: false,
        practice_exam_access: false,
        tools: &[],
        resources: &["glossary"],
    },
    TierDescriptor {
        tier: SubscriptionTier::Individual,
        display_name: "Individual",
        features: &[
            "course_modules",
            "final_assessment",
            "certificate",
            "study_guide",
            "practice_exams",
            "cpd_tracking",
        ],
        study_guide_access: true,
        practice_exam_access: true,
        tools: &["risk_calculator", "breach_clock"],
        resources: &["glossary", "regulation_library", "template_pack"],
    },
    TierDescriptor {
        tier: SubscriptionTier::Enterprise,
        display_name: "Enterprise",
        features: &[
            "course_modules",
            "final_assessment",
            "certificate",
            "study_guide",
            "practice_exams",
            "cpd_tracking",
            "cohort_reporting",
            "priority_support",
        ],
        study_guide_access: true,
        practice_exam_access: true,
        tools: &["risk_calculator", "breach_clock", "vendor_review"],
        resources: &[
            "glossary",
            "regulation_library",
            "template_pack",
            "policy_builder",
        ],
    },
];

/// The static descriptor for a known tier.
pub fn descriptor_for(tier: SubscriptionTier) -> &'static TierDescriptor {
    match tier {
        SubscriptionTier::Basic => &TIER_DESCRIPTORS[0],
        SubscriptionTier::Individual => &TIER_DESCRIPTORS[1],
        SubscriptionTier::Enterprise => &TIER_DESCRIPTORS[2],
    }
}

/// Resolves an arbitrary tier id to its descriptor, failing closed.
pub fn resolve_descriptor(tier_id: &str) -> &'static TierDescriptor {
    descriptor_for(SubscriptionTier::resolve(tier_id))
}

/// Whether the given tier id carries a named feature.
pub fn has_feature(tier_id: &str, feature: &str) -> bool {
    resolve_descriptor(tier_id)
        .features
        .iter()
        .any(|name| *name == feature)
}

/// Annual CPD requirement for a tier. `Basic` carries a zero-hour
/// requirement: tracking is a disabled no-op, not an error.
pub fn cpd_requirement_for(tier: SubscriptionTier) -> CpdRequirement {
    match tier {
        SubscriptionTier::Basic => CpdRequirement {
            annual_hours_required: 0.0,
            renewal_period_months: 0,
            category_minimums: Vec::new(),
        },
        SubscriptionTier::Individual => CpdRequirement {
            annual_hours_required: 20.0,
            renewal_period_months: 12,
            category_minimums: vec![(CpdCategory::StructuredLearning, 10.0)],
        },
        SubscriptionTier::Enterprise => CpdRequirement {
            annual_hours_required: 40.0,
            renewal_period_months: 12,
            category_minimums: vec![
                (CpdCategory::StructuredLearning, 20.0),
                (CpdCategory::SelfStudy, 5.0),
            ],
        },
    }
}
