//! Read-only cohort reporting for the admin dashboard.
//!
//! The report is a batch aggregation over independently-owned learner
//! records: each snapshot is loaded read-only and folded into totals. There
//! are no live concurrent writers to coordinate with, so loading is simply
//! parallelized across learners.

use anyhow::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::MODULE_COUNT;
use crate::progress::UserProgress;
use crate::storage::LearnerStore;

/// Aggregated, point-in-time view of every learner in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CohortReport {
    pub learner_count: usize,
    /// Completions per module, indexed by module id - 1.
    pub module_completions: [u32; MODULE_COUNT as usize],
    pub final_exam_taken: u32,
    pub final_exam_passed: u32,
    pub average_final_score: Option<f64>,
    pub certificate_eligible: u32,
    /// Learners per subscription tier id, from stored identities.
    pub tier_counts: BTreeMap<String, u32>,
}

struct LearnerSnapshot {
    progress: Option<UserProgress>,
    tier_id: Option<String>,
}

/// Builds the cohort report from every learner currently in the store.
///
/// Learners whose progress document is missing or corrupt still count toward
/// `learner_count`; they just contribute no completions.
pub fn build_cohort_report(store: &LearnerStore) -> Result<CohortReport> {
    let learner_ids = store.list_learners()?;
    let snapshots: Vec<LearnerSnapshot> = learner_ids
        .par_iter()
        .map(|learner_id| LearnerSnapshot {
            progress: store.load_progress(learner_id),
            tier_id: store.load_identity(learner_id).map(|identity| identity.tier_id),
        })
        .collect();

    let mut report = CohortReport {
        learner_count: snapshots.len(),
        ..CohortReport::default()
    };
    let mut score_sum = 0u64;

    for snapshot in &snapshots {
        if let Some(tier_id) = &snapshot.tier_id {
            *report.tier_counts.entry(tier_id.clone()).or_insert(0) += 1;
        }
        let Some(progress) = &snapshot.progress else {
            continue;
        };
        for (slot, module) in progress.modules.iter().enumerate() {
            if module.completed {
                report.module_completions[slot] += 1;
            }
        }
        if let Some(result) = progress.assessment {
            report.final_exam_taken += 1;
            score_sum += u64::from(result.score);
            if result.passed {
                report.final_exam_passed += 1;
            }
        }
        if progress.is_certificate_eligible() {
            report.certificate_eligible += 1;
        }
    }

    if report.final_exam_taken > 0 {
        report.average_final_score = Some(score_sum as f64 / f64::from(report.final_exam_taken));
    }
    Ok(report)
}
