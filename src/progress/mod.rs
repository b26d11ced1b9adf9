//! Per-learner progress aggregate and navigation unlock logic.
//!
//! `UserProgress` is the single owner of a learner's completion state. All
//! mutations are take-and-return transformations, so whatever persistence sits
//! around this module can write the whole aggregate after each step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentResult;
use crate::catalog::MODULE_COUNT;
use crate::error::{PortalError, PortalResult};

/// A navigable stage of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Module(u8),
    FinalAssessment,
}

/// The section that unlocks after completing `module_id`.
///
/// Exposed as its own query so navigation rules stay independently testable.
pub fn next_section_after(module_id: u8) -> PortalResult<Section> {
    if module_id < 1 || module_id > MODULE_COUNT {
        return Err(PortalError::UnknownModule(module_id));
    }
    if module_id < MODULE_COUNT {
        Ok(Section::Module(module_id + 1))
    } else {
        Ok(Section::FinalAssessment)
    }
}

/// Completion state of one curriculum module. Never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub completed: bool,
    pub score: u8,
    pub percent_complete: u8,
}

/// The full per-learner record: module completion, the one-shot final
/// assessment outcome, and the practice-exam attempt ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub modules: [ModuleProgress; MODULE_COUNT as usize],
    #[serde(default)]
    pub assessment: Option<AssessmentResult>,
    #[serde(default)]
    pub practice_attempts: BTreeMap<String, u32>,
}

impl UserProgress {
    /// Fresh all-defaults record for a new learner.
    pub fn new() -> Self {
        Self::default()
    }

    fn module_slot(&mut self, module_id: u8) -> PortalResult<&mut ModuleProgress> {
        if module_id < 1 || module_id > MODULE_COUNT {
            return Err(PortalError::UnknownModule(module_id));
        }
        Ok(&mut self.modules[usize::from(module_id - 1)])
    }

    /// Read access to one module's progress.
    pub fn module(&self, module_id: u8) -> PortalResult<&ModuleProgress> {
        if module_id < 1 || module_id > MODULE_COUNT {
            return Err(PortalError::UnknownModule(module_id));
        }
        Ok(&self.modules[usize::from(module_id - 1)])
    }

    /// Marks a module complete with its quiz score.
    pub fn complete_module(mut self, module_id: u8, score: u8) -> PortalResult<Self> {
        if score > 100 {
            return Err(PortalError::InvalidScore(score));
        }
        let slot = self.module_slot(module_id)?;
        slot.completed = true;
        slot.score = score;
        slot.percent_complete = 100;
        Ok(self)
    }

    /// Records the final-assessment outcome. One-shot: the reference flow has
    /// no final-exam retake, so a second submission is refused.
    pub fn submit_assessment(mut self, result: AssessmentResult) -> PortalResult<Self> {
        if self.assessment.is_some() {
            return Err(PortalError::AlreadySubmitted);
        }
        self.assessment = Some(result);
        Ok(self)
    }

    /// Bumps the attempt counter for a practice exam.
    pub fn record_practice_attempt(mut self, exam_id: &str) -> Self {
        *self.practice_attempts.entry(exam_id.to_string()).or_insert(0) += 1;
        self
    }

    /// Attempts already used for a practice exam.
    pub fn practice_attempts_used(&self, exam_id: &str) -> u32 {
        self.practice_attempts.get(exam_id).copied().unwrap_or(0)
    }

    /// All four modules completed.
    pub fn all_modules_completed(&self) -> bool {
        self.modules.iter().all(|module| module.completed)
    }

    /// A certificate can be issued once the final assessment exists and
    /// passed.
    pub fn is_certificate_eligible(&self) -> bool {
        self.assessment.map(|result| result.passed).unwrap_or(false)
    }

    /// Dashboard roll-up: each module and the final assessment weigh equally.
    pub fn overall_percent(&self) -> u8 {
        let stages = u32::from(MODULE_COUNT) + 1;
        let mut done = self.modules.iter().filter(|m| m.completed).count() as u32;
        if self.assessment.is_some() {
            done += 1;
        }
        ((done * 100) / stages) as u8
    }
}
