use thiserror::Error;

use crate::cpd::CpdCategory;

/// Recoverable refusals surfaced to the portal UI.
///
/// Every variant leaves the operation's state unchanged; callers can retry
/// after correcting the input or navigate elsewhere.
#[derive(Debug, Error, PartialEq)]
pub enum PortalError {
    #[error("question index {index} is out of range for a {total}-question session")]
    QuestionIndexOutOfRange { index: usize, total: usize },

    #[error("'{option}' is not one of the options for question {index}")]
    InvalidOption { index: usize, option: String },

    #[error("{unanswered} of {total} questions are still unanswered")]
    IncompleteAssessment { unanswered: usize, total: usize },

    #[error("this assessment has already been submitted")]
    AlreadySubmitted,

    #[error("the time limit for this practice exam has expired")]
    TimeExpired,

    #[error("no attempts remaining: all {allowed} attempts for '{exam_id}' are used")]
    NoAttemptsRemaining { exam_id: String, allowed: u32 },

    #[error("certificate issuance requires a passed final assessment")]
    NotEligible,

    #[error(
        "{category} hours are capped at {cap} per renewal period \
         ({recorded} recorded, {added} submitted)"
    )]
    CategoryCapExceeded {
        category: CpdCategory,
        cap: f64,
        recorded: f64,
        added: f64,
    },

    #[error("activity hours must be positive, got {0}")]
    InvalidHours(f64),

    #[error("module id {0} is outside the valid range 1..=4")]
    UnknownModule(u8),

    #[error("score {0} is outside the valid range 0..=100")]
    InvalidScore(u8),
}

pub type PortalResult<T> = Result<T, PortalError>;
