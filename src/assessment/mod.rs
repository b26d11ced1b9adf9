//! Randomized assessment engine.
//!
//! Both exam flavors share the same shuffling contract: a uniform permutation
//! of the question set and an independent permutation of each question's
//! options, computed exactly once when the session starts. Re-reading a
//! session never re-shuffles; randomness exists across sessions only.

pub mod practice;
pub mod session;

pub use practice::{PracticeExamSpec, PracticeOutcome, PracticeSession};
pub use session::AssessmentSession;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::QuestionBankEntry;

/// Passing threshold for the single-attempt final assessment.
pub const FINAL_PASSING_SCORE: u8 = 80;

/// Outcome of the one-shot final assessment. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: u8,
    pub passed: bool,
    pub completed_at: DateTime<Utc>,
}

/// Shuffles the question set and, independently, each question's options.
///
/// Returns the ordered questions alongside a parallel vector holding each
/// question's shuffled options.
pub(crate) fn shuffle_bank(
    bank: &[QuestionBankEntry],
) -> (Vec<QuestionBankEntry>, Vec<Vec<String>>) {
    let mut rng = rand::thread_rng();
    let mut ordered: Vec<QuestionBankEntry> = bank.to_vec();
    ordered.shuffle(&mut rng);
    let shuffled_options = ordered
        .iter()
        .map(|question| {
            let mut options = question.options.clone();
            options.shuffle(&mut rng);
            options
        })
        .collect();
    (ordered, shuffled_options)
}

/// Percentage score rounded half-up, as displayed to learners.
pub(crate) fn percent_score(correct: usize, total: usize) -> u8 {
    ((100.0 * correct as f64 / total as f64).round()) as u8
}
