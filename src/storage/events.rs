//! Append-only audit trail of learner-record mutations.
//!
//! Every mutating portal operation appends one structured event to the
//! learner's `events.jsonl`. The log is the portal's observability surface:
//! the admin report and support tooling reconstruct a learner's history from
//! it without touching the live aggregates.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const EVENTS_FILE: &str = "events.jsonl";

/// Kinds of portal events that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ModuleCompleted,
    AssessmentSubmitted,
    PracticeAttemptStarted,
    PracticeAttemptFinalized,
    CpdActivityRecorded,
    TierUpgradeRequested,
    TierUpgradeResolved,
    CertificateIssued,
}

/// One structured event stored as a JSONL line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalEvent {
    pub event_id: Uuid,
    pub learner_id: String,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl PortalEvent {
    pub fn new(learner_id: &str, event_type: EventType, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            learner_id: learner_id.to_string(),
            event_type,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Wraps the event-log path for one learner.
pub struct EventLog {
    events_path: PathBuf,
}

impl EventLog {
    pub fn for_learner(learner_dir: &Path) -> Self {
        Self {
            events_path: learner_dir.join(EVENTS_FILE),
        }
    }

    pub fn append(&self, event: &PortalEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Failed to open event log {}", self.events_path.display()))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Reads the full event history, oldest first. Blank lines are skipped.
    pub fn load_events(&self) -> Result<Vec<PortalEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)
            .with_context(|| format!("Failed to read event log {}", self.events_path.display()))?;
        let mut events = Vec::new();
        for line in data.lines().filter(|line| !line.trim().is_empty()) {
            let event: PortalEvent = serde_json::from_str(line)
                .with_context(|| format!("Malformed event in {}", self.events_path.display()))?;
            events.push(event);
        }
        Ok(events)
    }
}
