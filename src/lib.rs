pub mod assessment;
pub mod assistant;
pub mod catalog;
pub mod certificates;
pub mod cpd;
pub mod entitlements;
pub mod error;
pub mod progress;
pub mod reports;
pub mod storage;

// Re-export commonly used types for convenience.
pub use assessment::{AssessmentResult, AssessmentSession, PracticeExamSpec, PracticeSession};
pub use catalog::{QuestionBankEntry, QuestionCatalog};
pub use error::{PortalError, PortalResult};
pub use progress::{next_section_after, Section, UserProgress};
pub use storage::LearnerStore;
