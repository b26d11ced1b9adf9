//! Continuing Professional Development (CPD) hour tracking.
//!
//! Hours accumulate per category inside a renewal period. Categories carry
//! documented annual caps; submissions that would exceed a cap are rejected
//! outright rather than silently clipped.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// Activity category an hour submission is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpdCategory {
    StructuredLearning,
    SelfStudy,
    ThirdParty,
    Conferences,
    Other,
}

impl CpdCategory {
    /// Annual cap for the category, if one is documented.
    pub fn annual_cap(&self) -> Option<f64> {
        match self {
            CpdCategory::ThirdParty | CpdCategory::Conferences => Some(10.0),
            CpdCategory::Other => Some(5.0),
            CpdCategory::StructuredLearning | CpdCategory::SelfStudy => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CpdCategory::StructuredLearning => "structured learning",
            CpdCategory::SelfStudy => "self study",
            CpdCategory::ThirdParty => "third-party training",
            CpdCategory::Conferences => "conferences",
            CpdCategory::Other => "other activities",
        }
    }
}

impl fmt::Display for CpdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Annual requirement a tier imposes on its holders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpdRequirement {
    pub annual_hours_required: f64,
    pub renewal_period_months: u32,
    #[serde(default)]
    pub category_minimums: Vec<(CpdCategory, f64)>,
}

/// A learner's accumulated hours inside one renewal period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpdHours {
    pub total: f64,
    #[serde(default)]
    pub by_category: BTreeMap<CpdCategory, f64>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

impl CpdHours {
    pub fn new_period(period_start: NaiveDate, period_end: NaiveDate) -> Self {
        Self {
            total: 0.0,
            by_category: BTreeMap::new(),
            period_start: Some(period_start),
            period_end: Some(period_end),
        }
    }

    /// Hours already recorded under one category.
    pub fn category_hours(&self, category: CpdCategory) -> f64 {
        self.by_category.get(&category).copied().unwrap_or(0.0)
    }

    /// Records an activity's hours against the total and its category.
    ///
    /// Rejects non-positive hours and any submission that would push the
    /// category past its documented annual cap; the aggregate is unchanged
    /// on error.
    pub fn record_activity(mut self, category: CpdCategory, added_hours: f64) -> PortalResult<Self> {
        if !added_hours.is_finite() || added_hours <= 0.0 {
            return Err(PortalError::InvalidHours(added_hours));
        }
        let recorded = self.category_hours(category);
        if let Some(cap) = category.annual_cap() {
            if recorded + added_hours > cap {
                return Err(PortalError::CategoryCapExceeded {
                    category,
                    cap,
                    recorded,
                    added: added_hours,
                });
            }
        }
        self.total += added_hours;
        *self.by_category.entry(category).or_insert(0.0) += added_hours;
        Ok(self)
    }
}

/// Completion percentage against a requirement.
///
/// A zero-hour requirement reads as fully satisfied: "no requirement" must
/// never become a division by zero.
pub fn progress_percent(hours: &CpdHours, requirement: &CpdRequirement) -> f64 {
    if requirement.annual_hours_required <= 0.0 {
        return 100.0;
    }
    (100.0 * hours.total / requirement.annual_hours_required).min(100.0)
}

/// Hours still owed for the period, clamped at zero.
pub fn remaining_hours(hours: &CpdHours, requirement: &CpdRequirement) -> f64 {
    (requirement.annual_hours_required - hours.total).max(0.0)
}

/// Categories whose recorded hours fall short of the requirement's minimum,
/// with the missing amount. Empty when every minimum is met.
pub fn category_shortfalls(
    hours: &CpdHours,
    requirement: &CpdRequirement,
) -> Vec<(CpdCategory, f64)> {
    requirement
        .category_minimums
        .iter()
        .filter_map(|(category, minimum)| {
            let recorded = hours.category_hours(*category);
            if recorded < *minimum {
                Some((*category, minimum - recorded))
            } else {
                None
            }
        })
        .collect()
}
