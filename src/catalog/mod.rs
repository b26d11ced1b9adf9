//! Question-bank catalog for the certification modules.
//!
//! The bank ships as an embedded YAML resource rather than literal structs so
//! content edits never touch engine code. The catalog is parsed and validated
//! once at startup; every consumer works against the validated entries.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Number of curriculum modules a learner completes before the final exam.
pub const MODULE_COUNT: u8 = 4;

/// Answer options carried by every question.
pub const OPTIONS_PER_QUESTION: usize = 4;

const EMBEDDED_BANK: &str = include_str!("question_bank.yaml");

/// A single question as authored in the content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBankEntry {
    pub module_id: u8,
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl QuestionBankEntry {
    /// Checks the authoring invariants for one entry, returning every
    /// violation rather than stopping at the first.
    pub fn validation_issues(&self, position: usize) -> Vec<String> {
        let mut issues = Vec::new();
        if self.module_id < 1 || self.module_id > MODULE_COUNT {
            issues.push(format!(
                "entry {position}: module_id {} outside 1..={MODULE_COUNT}",
                self.module_id
            ));
        }
        if self.prompt.trim().is_empty() {
            issues.push(format!("entry {position}: empty prompt"));
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            issues.push(format!(
                "entry {position}: expected {OPTIONS_PER_QUESTION} options, found {}",
                self.options.len()
            ));
        }
        let mut deduped = self.options.clone();
        deduped.sort();
        deduped.dedup();
        if deduped.len() != self.options.len() {
            issues.push(format!("entry {position}: duplicate options"));
        }
        if !self.options.contains(&self.correct_answer) {
            issues.push(format!(
                "entry {position}: correct answer '{}' not among the options",
                self.correct_answer
            ));
        }
        issues
    }
}

/// Validated, immutable question catalog loaded once per process.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    entries: Vec<QuestionBankEntry>,
}

impl QuestionCatalog {
    /// Loads and validates the embedded catalog.
    pub fn load_embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_BANK).context("Failed to load embedded question bank")
    }

    /// Parses a YAML catalog and enforces the authoring invariants.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let entries: Vec<QuestionBankEntry> =
            serde_yaml::from_str(yaml).context("Failed to parse question bank YAML")?;
        Self::from_entries(entries)
    }

    /// Builds a catalog from already-parsed entries, validating each one.
    pub fn from_entries(entries: Vec<QuestionBankEntry>) -> Result<Self> {
        if entries.is_empty() {
            bail!("Question bank is empty");
        }
        let issues: Vec<String> = entries
            .iter()
            .enumerate()
            .flat_map(|(position, entry)| entry.validation_issues(position))
            .collect();
        if !issues.is_empty() {
            bail!("Question bank validation failed:\n  {}", issues.join("\n  "));
        }
        for module_id in 1..=MODULE_COUNT {
            if !entries.iter().any(|e| e.module_id == module_id) {
                bail!("Question bank has no questions for module {module_id}");
            }
        }
        Ok(Self { entries })
    }

    /// All questions across every module, in authored order.
    pub fn all(&self) -> &[QuestionBankEntry] {
        &self.entries
    }

    /// Questions belonging to a single module, in authored order.
    pub fn module_questions(&self, module_id: u8) -> Vec<QuestionBankEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.module_id == module_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
