use std::fs;

use certtrack::assessment::AssessmentResult;
use certtrack::cpd::{CpdCategory, CpdHours};
use certtrack::storage::{config, EventType, LearnerIdentity, PortalEvent};
use certtrack::UserProgress;
use chrono::Utc;

use crate::IntegrationHarness;

#[test]
fn the_progress_aggregate_round_trips_whole() {
    let harness = IntegrationHarness::new();
    let store = harness.store();

    let progress = UserProgress::new()
        .complete_module(1, 90)
        .unwrap()
        .complete_module(2, 75)
        .unwrap()
        .record_practice_attempt("module-1-drill")
        .submit_assessment(AssessmentResult {
            score: 84,
            passed: true,
            completed_at: Utc::now(),
        })
        .unwrap();

    store.save_progress("learner-a", &progress).unwrap();
    let loaded = store.load_progress("learner-a").expect("saved progress loads");
    assert_eq!(loaded, progress);
}

#[test]
fn a_missing_or_corrupt_document_loads_as_a_fresh_start() {
    let harness = IntegrationHarness::new();
    let store = harness.store();

    assert!(store.load_progress("nobody").is_none());

    // A corrupt payload degrades to "no saved progress" instead of erroring.
    let learner_dir = store.learner_dir("learner-b");
    fs::create_dir_all(&learner_dir).unwrap();
    fs::write(learner_dir.join("progress.json"), b"{not valid json").unwrap();
    assert!(store.load_progress("learner-b").is_none());
}

#[test]
fn identity_and_cpd_hours_round_trip() {
    let harness = IntegrationHarness::new();
    let store = harness.store();

    let identity = LearnerIdentity {
        learner_id: "learner-c".into(),
        name: "Omar Haddad".into(),
        organization: "Northwind Clinic".into(),
        tier_id: "individual".into(),
    };
    store.save_identity(&identity).unwrap();
    assert_eq!(store.load_identity("learner-c").unwrap(), identity);

    let hours = CpdHours::default()
        .record_activity(CpdCategory::StructuredLearning, 3.5)
        .unwrap();
    store.save_cpd_hours("learner-c", &hours).unwrap();
    assert_eq!(store.load_cpd_hours("learner-c").unwrap(), hours);
}

#[test]
fn clearing_a_learner_removes_every_document() {
    let harness = IntegrationHarness::new();
    let store = harness.store();

    store.save_progress("learner-d", &UserProgress::new()).unwrap();
    assert_eq!(store.list_learners().unwrap(), vec!["learner-d".to_string()]);

    store.clear("learner-d").unwrap();
    assert!(store.load_progress("learner-d").is_none());
    assert!(store.list_learners().unwrap().is_empty());
}

#[test]
fn events_append_in_order_and_read_back() {
    let harness = IntegrationHarness::new();
    let store = harness.store();
    let log = store.event_log("learner-e");

    log.append(&PortalEvent::new(
        "learner-e",
        EventType::ModuleCompleted,
        serde_json::json!({ "module_id": 1, "score": 90 }),
    ))
    .unwrap();
    log.append(&PortalEvent::new(
        "learner-e",
        EventType::AssessmentSubmitted,
        serde_json::json!({ "score": 84, "passed": true }),
    ))
    .unwrap();

    let events = log.load_events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, EventType::ModuleCompleted);
    assert_eq!(events[1].event_type, EventType::AssessmentSubmitted);
    assert_eq!(events[1].details["passed"], serde_json::json!(true));
}

#[test]
fn config_defaults_load_and_round_trip() {
    let harness = IntegrationHarness::new();
    let _ = harness.workspace_path();

    let defaults = config::load_or_default().unwrap();
    assert_eq!(defaults.practice.question_count, 10);
    assert_eq!(defaults.practice.passing_score, 70);
    assert!(defaults.assistant.remote_allowed);

    let mut updated = defaults.clone();
    updated.practice.attempts = 5;
    updated.assistant.remote_allowed = false;
    config::save(&updated).unwrap();

    let reloaded = config::load_or_default().unwrap();
    assert_eq!(reloaded.practice.attempts, 5);
    assert!(!reloaded.assistant.remote_allowed);
}
