use certtrack::entitlements::{
    cpd_requirement_for, descriptor_for, has_feature, resolve_descriptor, SubscriptionTier,
    TierUpgrade, UpgradeStatus,
};
use chrono::Utc;

#[test]
fn unknown_tier_ids_resolve_to_the_basic_descriptor() {
    let unknown = resolve_descriptor("nonexistent-tier");
    let basic = resolve_descriptor("basic");
    assert_eq!(unknown.tier, basic.tier);
    assert_eq!(unknown.features, basic.features);
    assert_eq!(unknown.study_guide_access, basic.study_guide_access);
}

#[test]
fn tier_resolution_is_case_insensitive_and_accepts_the_legacy_alias() {
    assert_eq!(SubscriptionTier::resolve("ENTERPRISE"), SubscriptionTier::Enterprise);
    assert_eq!(SubscriptionTier::resolve("  individual "), SubscriptionTier::Individual);
    assert_eq!(SubscriptionTier::resolve("premium"), SubscriptionTier::Individual);
}

#[test]
fn feature_access_widens_with_the_tier() {
    assert!(!has_feature("basic", "practice_exams"));
    assert!(has_feature("individual", "practice_exams"));
    assert!(has_feature("enterprise", "practice_exams"));
    assert!(has_feature("enterprise", "cohort_reporting"));
    assert!(!has_feature("individual", "cohort_reporting"));

    assert!(!descriptor_for(SubscriptionTier::Basic).practice_exam_access);
    assert!(descriptor_for(SubscriptionTier::Enterprise).study_guide_access);
}

#[test]
fn cpd_requirements_scale_by_tier_with_basic_disabled() {
    assert_eq!(cpd_requirement_for(SubscriptionTier::Basic).annual_hours_required, 0.0);
    assert_eq!(
        cpd_requirement_for(SubscriptionTier::Individual).annual_hours_required,
        20.0
    );
    assert_eq!(
        cpd_requirement_for(SubscriptionTier::Enterprise).annual_hours_required,
        40.0
    );
}

#[test]
fn a_tier_upgrade_needs_payment_confirmation_to_take_effect() {
    let now = Utc::now();
    let upgrade = TierUpgrade::request(SubscriptionTier::Basic, SubscriptionTier::Enterprise, now);
    assert_eq!(upgrade.status, UpgradeStatus::Pending);
    assert_eq!(upgrade.effective_tier(), SubscriptionTier::Basic);

    let applied = upgrade.confirm_payment(true, now);
    assert_eq!(applied.status, UpgradeStatus::Applied);
    assert_eq!(applied.effective_tier(), SubscriptionTier::Enterprise);
    assert!(applied.resolved_at.is_some());
}
