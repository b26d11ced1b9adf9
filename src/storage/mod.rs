//! Local persistence for learner records.
//!
//! The portal treats storage as a reliable key-value collaborator: each
//! aggregate (progress, CPD hours, identity) round-trips as one JSON document
//! written whole after every mutation. Loads degrade: a missing *or
//! unreadable* document reads as "no saved state" so a corrupt file never
//! blocks a learner from starting fresh.

pub mod config;
pub mod events;

pub use config::{AppConfig, AssistantSettings, PracticeSettings};
pub use events::{EventLog, EventType, PortalEvent};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cpd::CpdHours;
use crate::progress::UserProgress;

const LEARNERS_SUBDIR: &str = "learners";
const PROGRESS_FILE: &str = "progress.json";
const CPD_FILE: &str = "cpd_hours.json";
const IDENTITY_FILE: &str = "identity.json";

/// Identity and subscription facts persisted alongside a learner's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerIdentity {
    pub learner_id: String,
    pub name: String,
    pub organization: String,
    pub tier_id: String,
}

/// Returns the root directory where CertTrack stores data.
///
/// Order of precedence:
/// 1. `CERTTRACK_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("CERTTRACK_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("CertTrack"))
}

/// Per-learner JSON store rooted in the workspace.
pub struct LearnerStore {
    learners_dir: PathBuf,
}

impl LearnerStore {
    /// Opens the store, creating the workspace structure if needed.
    pub fn open() -> Result<Self> {
        let root = workspace_root()?;
        let learners_dir = root.join(LEARNERS_SUBDIR);
        fs::create_dir_all(&learners_dir).with_context(|| {
            format!("Failed to create learner store at {}", learners_dir.display())
        })?;
        Ok(Self { learners_dir })
    }

    pub fn learner_dir(&self, learner_id: &str) -> PathBuf {
        self.learners_dir.join(learner_id)
    }

    fn progress_path(&self, learner_id: &str) -> PathBuf {
        self.learner_dir(learner_id).join(PROGRESS_FILE)
    }

    fn cpd_path(&self, learner_id: &str) -> PathBuf {
        self.learner_dir(learner_id).join(CPD_FILE)
    }

    fn identity_path(&self, learner_id: &str) -> PathBuf {
        self.learner_dir(learner_id).join(IDENTITY_FILE)
    }

    /// The append-only event log for one learner.
    pub fn event_log(&self, learner_id: &str) -> EventLog {
        EventLog::for_learner(&self.learner_dir(learner_id))
    }

    pub fn save_progress(&self, learner_id: &str, progress: &UserProgress) -> Result<()> {
        write_json(&self.progress_path(learner_id), progress)
    }

    pub fn load_progress(&self, learner_id: &str) -> Option<UserProgress> {
        read_json_lenient(&self.progress_path(learner_id))
    }

    pub fn save_cpd_hours(&self, learner_id: &str, hours: &CpdHours) -> Result<()> {
        write_json(&self.cpd_path(learner_id), hours)
    }

    pub fn load_cpd_hours(&self, learner_id: &str) -> Option<CpdHours> {
        read_json_lenient(&self.cpd_path(learner_id))
    }

    pub fn save_identity(&self, identity: &LearnerIdentity) -> Result<()> {
        write_json(&self.identity_path(&identity.learner_id), identity)
    }

    pub fn load_identity(&self, learner_id: &str) -> Option<LearnerIdentity> {
        read_json_lenient(&self.identity_path(learner_id))
    }

    /// Removes every stored document for a learner.
    pub fn clear(&self, learner_id: &str) -> Result<()> {
        let dir = self.learner_dir(learner_id);
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to clear learner data at {}", dir.display()))?;
        }
        Ok(())
    }

    /// Ids of every learner with stored data, sorted for stable reporting.
    pub fn list_learners(&self) -> Result<Vec<String>> {
        let mut learners = Vec::new();
        for entry in fs::read_dir(&self.learners_dir).with_context(|| {
            format!("Failed to list learner store {}", self.learners_dir.display())
        })? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                learners.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        learners.sort();
        Ok(learners)
    }
}

/// Reads a JSON document, treating missing and corrupt payloads alike as
/// "nothing saved". Saves stay loud; only loads degrade.
fn read_json_lenient<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
