use certtrack::certificates::{issue, CertificateHolder};
use certtrack::storage::{EventType, PortalEvent};
use certtrack::{AssessmentSession, UserProgress};

use crate::support::sample_bank;
use crate::IntegrationHarness;

/// The full learner journey: modules, a perfect final sitting answered in
/// shuffled order, persistence after each mutation, then certificate
/// issuance twice with an identical result.
#[test]
fn a_learner_completes_the_course_and_earns_a_stable_certificate() {
    let harness = IntegrationHarness::new();
    let store = harness.store();
    let learner_id = "journey";
    let log = store.event_log(learner_id);

    let mut progress = store.load_progress(learner_id).unwrap_or_default();
    for module_id in 1..=4 {
        progress = progress.complete_module(module_id, 85).unwrap();
        store.save_progress(learner_id, &progress).unwrap();
        log.append(&PortalEvent::new(
            learner_id,
            EventType::ModuleCompleted,
            serde_json::json!({ "module_id": module_id }),
        ))
        .unwrap();
    }

    // Five-question final, answered correctly by following the shuffled
    // order the session presents.
    let bank = sample_bank(5);
    let mut session = AssessmentSession::start(&bank).expect("session start");
    let questions: Vec<_> = session.ordered_questions().to_vec();
    for (index, question) in questions.iter().enumerate() {
        session.record_answer(index, &question.correct_answer).unwrap();
    }
    let result = session.submit().expect("submit");
    assert_eq!(result.score, 100);
    assert!(result.passed);

    progress = progress.submit_assessment(result).unwrap();
    store.save_progress(learner_id, &progress).unwrap();
    log.append(&PortalEvent::new(
        learner_id,
        EventType::AssessmentSubmitted,
        serde_json::json!({ "score": result.score, "passed": result.passed }),
    ))
    .unwrap();

    // Reload from storage: the aggregate survives whole.
    let reloaded: UserProgress = store.load_progress(learner_id).expect("saved progress");
    assert!(reloaded.is_certificate_eligible());

    let holder = CertificateHolder {
        name: "Jordan Blake".into(),
        organization: "Atlas Logistics".into(),
    };
    let first = issue(&reloaded, &holder).expect("eligible");
    let second = issue(&reloaded, &holder).expect("still eligible");
    assert_eq!(first.certificate_id, second.certificate_id);

    let events = log.load_events().unwrap();
    assert_eq!(events.len(), 5);
    assert!(events
        .iter()
        .any(|event| event.event_type == EventType::AssessmentSubmitted));
}
