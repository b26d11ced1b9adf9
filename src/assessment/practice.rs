use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::QuestionBankEntry;
use crate::error::{PortalError, PortalResult};

use super::{percent_score, shuffle_bank};

/// Parameters for one practice exam as offered in the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeExamSpec {
    pub exam_id: String,
    pub question_count: usize,
    pub time_limit_minutes: u32,
    pub passing_score: u8,
    pub attempts: u32,
}

/// Result of a finalized practice attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PracticeOutcome {
    pub score: u8,
    pub passed: bool,
    pub answered: usize,
    /// True when the deadline, not the learner, ended the attempt.
    pub expired: bool,
}

/// A timed, retakeable practice sitting over a subset of the bank.
///
/// Unlike the final assessment a practice attempt may end with unanswered
/// questions; they score as wrong. Expiry and manual submission both reach
/// the same terminal state, and only the first trigger scores the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    pub session_id: Uuid,
    pub spec: PracticeExamSpec,
    pub started_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    ordered_questions: Vec<QuestionBankEntry>,
    shuffled_options: Vec<Vec<String>>,
    answers: BTreeMap<usize, String>,
    outcome: Option<PracticeOutcome>,
}

impl PracticeSession {
    /// Starts a practice attempt, enforcing the per-exam attempt limit.
    ///
    /// `attempts_used` comes from the learner's progress ledger; the caller
    /// records the new attempt after a successful start.
    pub fn start(
        bank: &[QuestionBankEntry],
        spec: PracticeExamSpec,
        attempts_used: u32,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Self> {
        if bank.is_empty() {
            anyhow::bail!("Cannot start a practice exam over an empty question bank");
        }
        if spec.question_count == 0 {
            anyhow::bail!("Practice exam '{}' is configured with zero questions", spec.exam_id);
        }
        if attempts_used >= spec.attempts {
            return Err(PortalError::NoAttemptsRemaining {
                exam_id: spec.exam_id.clone(),
                allowed: spec.attempts,
            }
            .into());
        }
        let (mut ordered_questions, mut shuffled_options) = shuffle_bank(bank);
        let keep = spec.question_count.min(ordered_questions.len());
        ordered_questions.truncate(keep);
        shuffled_options.truncate(keep);
        let deadline = now + Duration::minutes(i64::from(spec.time_limit_minutes));
        Ok(Self {
            session_id: Uuid::new_v4(),
            spec,
            started_at: now,
            deadline,
            ordered_questions,
            shuffled_options,
            answers: BTreeMap::new(),
            outcome: None,
        })
    }

    pub fn ordered_questions(&self) -> &[QuestionBankEntry] {
        &self.ordered_questions
    }

    pub fn options_for(&self, index: usize) -> PortalResult<&[String]> {
        self.shuffled_options
            .get(index)
            .map(Vec::as_slice)
            .ok_or(PortalError::QuestionIndexOutOfRange {
                index,
                total: self.ordered_questions.len(),
            })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// Seconds left on the countdown, clamped at zero.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.deadline - now).num_seconds().max(0)
    }

    /// Records (or overwrites) an answer. Refused once the attempt is
    /// finalized or its deadline has passed.
    pub fn record_answer(
        &mut self,
        index: usize,
        chosen_option: &str,
        now: DateTime<Utc>,
    ) -> PortalResult<()> {
        if self.outcome.is_some() {
            return Err(PortalError::AlreadySubmitted);
        }
        if self.is_expired(now) {
            return Err(PortalError::TimeExpired);
        }
        let options = self.options_for(index)?;
        if !options.iter().any(|option| option == chosen_option) {
            return Err(PortalError::InvalidOption {
                index,
                option: chosen_option.to_string(),
            });
        }
        self.answers.insert(index, chosen_option.to_string());
        Ok(())
    }

    /// Ends the attempt and scores whatever is recorded; unanswered questions
    /// count as wrong. Idempotent: the first call (manual submit or expiry
    /// sweep) scores the session, later calls return the stored outcome.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> PracticeOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let correct = self
            .ordered_questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.answers.get(index).map(String::as_str) == Some(question.correct_answer.as_str())
            })
            .count();
        let score = percent_score(correct, self.ordered_questions.len());
        let outcome = PracticeOutcome {
            score,
            passed: score >= self.spec.passing_score,
            answered: self.answers.len(),
            expired: self.is_expired(now),
        };
        self.outcome = Some(outcome);
        outcome
    }

    pub fn outcome(&self) -> Option<&PracticeOutcome> {
        self.outcome.as_ref()
    }
}
