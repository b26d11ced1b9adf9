use certtrack::assessment::AssessmentResult;
use certtrack::certificates::{issue, CertificateHolder};
use certtrack::{PortalError, UserProgress};
use chrono::Utc;

fn holder() -> CertificateHolder {
    CertificateHolder {
        name: "Priya Natarajan".into(),
        organization: "Harbor Mutual".into(),
    }
}

#[test]
fn issuance_is_gated_on_a_passed_final_assessment() {
    let fresh = UserProgress::new();
    assert_eq!(issue(&fresh, &holder()).unwrap_err(), PortalError::NotEligible);

    let failed = UserProgress::new()
        .submit_assessment(AssessmentResult {
            score: 72,
            passed: false,
            completed_at: Utc::now(),
        })
        .unwrap();
    assert_eq!(issue(&failed, &holder()).unwrap_err(), PortalError::NotEligible);
}

#[test]
fn the_certificate_id_is_stable_across_repeated_issuance() {
    let progress = UserProgress::new()
        .submit_assessment(AssessmentResult {
            score: 88,
            passed: true,
            completed_at: Utc::now(),
        })
        .unwrap();

    let first = issue(&progress, &holder()).unwrap();
    let second = issue(&progress, &holder()).unwrap();
    assert_eq!(first.certificate_id, second.certificate_id);
    assert_eq!(first, second);

    assert!(first.certificate_id.starts_with("OCRP-"));
    assert_eq!(
        first.issue_date,
        progress.assessment.unwrap().completed_at.date_naive()
    );
}

#[test]
fn the_id_is_a_function_of_holder_identity_and_completion_day() {
    let progress = UserProgress::new()
        .submit_assessment(AssessmentResult {
            score: 95,
            passed: true,
            completed_at: Utc::now(),
        })
        .unwrap();

    let original = issue(&progress, &holder()).unwrap();
    let renamed = issue(
        &progress,
        &CertificateHolder {
            name: "P. Natarajan".into(),
            organization: "Harbor Mutual".into(),
        },
    )
    .unwrap();
    assert_ne!(original.certificate_id, renamed.certificate_id);
}
