use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::QuestionBankEntry;
use crate::error::{PortalError, PortalResult};

use super::{percent_score, shuffle_bank, AssessmentResult, FINAL_PASSING_SCORE};

/// A single learner's final-assessment sitting.
///
/// The question order and each question's option order are fixed at start.
/// Submitting is terminal: once an outcome exists the session is read-only
/// and every mutating call is refused with `AlreadySubmitted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    ordered_questions: Vec<QuestionBankEntry>,
    shuffled_options: Vec<Vec<String>>,
    answers: BTreeMap<usize, String>,
    outcome: Option<AssessmentResult>,
}

impl AssessmentSession {
    /// Starts a session over `bank`, shuffling questions and options once.
    pub fn start(bank: &[QuestionBankEntry]) -> anyhow::Result<Self> {
        if bank.is_empty() {
            anyhow::bail!("Cannot start an assessment over an empty question bank");
        }
        let (ordered_questions, shuffled_options) = shuffle_bank(bank);
        Ok(Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            ordered_questions,
            shuffled_options,
            answers: BTreeMap::new(),
            outcome: None,
        })
    }

    /// The session's question order. Stable for the session lifetime.
    pub fn ordered_questions(&self) -> &[QuestionBankEntry] {
        &self.ordered_questions
    }

    /// The shuffled options for one question, as presented to the learner.
    pub fn options_for(&self, index: usize) -> PortalResult<&[String]> {
        self.shuffled_options
            .get(index)
            .map(Vec::as_slice)
            .ok_or(PortalError::QuestionIndexOutOfRange {
                index,
                total: self.ordered_questions.len(),
            })
    }

    pub fn question_count(&self) -> usize {
        self.ordered_questions.len()
    }

    /// The answer currently recorded for a question, if any.
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Records (or overwrites) the learner's answer for one question.
    ///
    /// The chosen option must be one of the question's presented options;
    /// correctness is not checked here. Last write wins.
    pub fn record_answer(&mut self, index: usize, chosen_option: &str) -> PortalResult<()> {
        if self.outcome.is_some() {
            return Err(PortalError::AlreadySubmitted);
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

    /// Indices still missing an answer, in presentation order.
    pub fn unanswered(&self) -> Vec<usize> {
        (0..self.ordered_questions.len())
            .filter(|index| !self.answers.contains_key(index))
            .collect()
    }

    /// True once every question has a recorded answer.
    pub fn can_submit(&self) -> bool {
        self.answers.len() == self.ordered_questions.len()
    }

    /// Scores the session against the 80% threshold. Terminal and one-shot:
    /// an incomplete session is refused, and so is a second submission.
    pub fn submit(&mut self) -> PortalResult<AssessmentResult> {
        if self.outcome.is_some() {
            return Err(PortalError::AlreadySubmitted);
        }
        if !self.can_submit() {
            return Err(PortalError::IncompleteAssessment {
                unanswered: self.unanswered().len(),
                total: self.ordered_questions.len(),
            });
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
        let result = AssessmentResult {
            score,
            passed: score >= FINAL_PASSING_SCORE,
            completed_at: Utc::now(),
        };
        self.outcome = Some(result);
        Ok(result)
    }

    /// The recorded outcome, once submitted.
    pub fn outcome(&self) -> Option<&AssessmentResult> {
        self.outcome.as_ref()
    }
}
