//! Cross-layer trial flow tests: facade + registry + pool + feedback.

use std::sync::Arc;
use std::time::Duration;
use tribunal_application::ports::audit_log::NoAuditLog;
use tribunal_application::ports::case_registry::CaseRegistry;
use tribunal_application::ports::feedback_store::FeedbackStore;
use tribunal_application::ports::juror::JurorCapability;
use tribunal_application::{
    JurorPool, ReportStatus, RequestVerdictUseCase, ReviewFeedbackError, ReviewFeedbackInput,
    ReviewFeedbackUseCase, SubmitFeedbackInput, SubmitFeedbackUseCase, VerdictQuery,
};
use tribunal_domain::{
    Classification, Fingerprinter, JurorDecision, ReviewDecision, ReviewStatus, TallyRule,
    WeightedRole,
};
use tribunal_infrastructure::{
    InMemoryCaseRegistry, InMemoryFeedbackStore, ScriptedJuror, StaffList,
};

type Facade = RequestVerdictUseCase<InMemoryCaseRegistry, InMemoryFeedbackStore>;

struct Harness {
    registry: Arc<InMemoryCaseRegistry>,
    feedback: Arc<InMemoryFeedbackStore>,
    jurors: Vec<Arc<ScriptedJuror>>,
    facade: Arc<Facade>,
}

fn harness(jurors: Vec<ScriptedJuror>) -> Harness {
    let registry = Arc::new(InMemoryCaseRegistry::new());
    let feedback = Arc::new(InMemoryFeedbackStore::new());
    let jurors: Vec<Arc<ScriptedJuror>> = jurors.into_iter().map(Arc::new).collect();
    let bench: Vec<Arc<dyn JurorCapability>> = jurors
        .iter()
        .map(|j| Arc::clone(j) as Arc<dyn JurorCapability>)
        .collect();

    let facade = Arc::new(RequestVerdictUseCase::new(
        Arc::clone(&registry),
        Arc::clone(&feedback),
        JurorPool::new(bench, Duration::from_secs(5)),
        TallyRule::default(),
        Fingerprinter::default(),
        Arc::new(NoAuditLog),
    ));

    Harness {
        registry,
        feedback,
        jurors,
        facade,
    }
}

/// The end-to-end bench from the fake-news scenario: five jurors, two of
/// them holding weighted roles.
fn scenario_bench() -> Vec<ScriptedJuror> {
    vec![
        ScriptedJuror::new("logic", vec![JurorDecision::NoObjection]),
        ScriptedJuror::new("skeptic", vec![JurorDecision::SuspiciousFact]),
        ScriptedJuror::new("web-search", vec![JurorDecision::NoObjection]),
        ScriptedJuror::new(
            "archivist",
            vec![JurorDecision::Abstain, JurorDecision::NoObjection],
        )
        .with_role(Some(WeightedRole::Archivist)),
        ScriptedJuror::new("community-watch", vec![JurorDecision::NoObjection])
            .with_role(Some(WeightedRole::CommunityWatch)),
    ]
}

const ARTICLE: &str = "Breaking: the moon is made of green cheese, experts confirm.";

#[tokio::test]
async fn concurrent_requests_dispatch_exactly_one_trial() {
    let h = harness(scenario_bench());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let facade = Arc::clone(&h.facade);
        handles.push(tokio::spawn(async move {
            facade
                .execute(VerdictQuery::Content(ARTICLE.to_string()))
                .await
                .unwrap()
        }));
    }

    let mut reports = Vec::new();
    for handle in handles {
        reports.push(handle.await.unwrap());
    }

    // Every caller sees the same decided verdict...
    for report in &reports {
        assert_eq!(report.status, ReportStatus::Decided);
        assert_eq!(report.classification, Some(Classification::Suspicious));
        assert_eq!(report.objection_count, Some(1));
    }

    // ...and each juror was consulted exactly once.
    for juror in &h.jurors {
        assert_eq!(juror.calls(), 1, "juror {} dispatched more than once", juror.id());
    }
}

#[tokio::test]
async fn cached_verdict_short_circuits_repeat_queries() {
    let h = harness(scenario_bench());

    let first = h
        .facade
        .execute(VerdictQuery::Content(ARTICLE.to_string()))
        .await
        .unwrap();
    let second = h
        .facade
        .execute(VerdictQuery::Content(ARTICLE.to_string()))
        .await
        .unwrap();

    assert_eq!(first.classification, second.classification);
    for juror in &h.jurors {
        assert_eq!(juror.calls(), 1);
    }

    // Fingerprint-only queries hit the same case
    let by_fp = h
        .facade
        .execute(VerdictQuery::Fingerprint(first.fingerprint.clone()))
        .await
        .unwrap();
    assert_eq!(by_fp.status, ReportStatus::Decided);
}

#[tokio::test]
async fn fingerprint_only_miss_reports_pending() {
    let h = harness(scenario_bench());
    let unknown = Fingerprinter::default().fingerprint("never seen before");

    let report = h
        .facade
        .execute(VerdictQuery::Fingerprint(unknown))
        .await
        .unwrap();

    assert_eq!(report.status, ReportStatus::Pending);
    assert!(report.classification.is_none());
    for juror in &h.jurors {
        assert_eq!(juror.calls(), 0);
    }
}

#[tokio::test]
async fn insufficient_quorum_leaves_case_retriable() {
    let bench = vec![
        ScriptedJuror::new("logic", vec![JurorDecision::NoObjection]),
        ScriptedJuror::new("skeptic", vec![JurorDecision::Abstain]),
        ScriptedJuror::new("web-search", vec![JurorDecision::Abstain]),
        ScriptedJuror::new("archivist", vec![JurorDecision::Abstain]),
        ScriptedJuror::new("community-watch", vec![JurorDecision::NoObjection]),
    ];
    let h = harness(bench);

    let report = h
        .facade
        .execute(VerdictQuery::Content(ARTICLE.to_string()))
        .await
        .unwrap();

    // Two decided outcomes < quorum of three: not yet judged
    assert_eq!(report.status, ReportStatus::Pending);
    assert!(report.classification.is_none());

    // The attempt was archived; nothing decided is cached
    assert!(
        h.registry
            .lookup(&report.fingerprint)
            .await
            .unwrap()
            .is_none()
    );

    // A retry dispatches a fresh trial (scripts repeat their last entry)
    let retry = h
        .facade
        .execute(VerdictQuery::Content(ARTICLE.to_string()))
        .await
        .unwrap();
    assert_eq!(retry.status, ReportStatus::Pending);
    assert_eq!(h.jurors[0].calls(), 2);
}

#[tokio::test]
async fn accepted_feedback_triggers_retrial_and_override() {
    let h = harness(scenario_bench());

    // First trial: SUSPICIOUS, and the archivist abstained so no override
    let first = h
        .facade
        .execute(VerdictQuery::Content(ARTICLE.to_string()))
        .await
        .unwrap();
    assert_eq!(first.classification, Some(Classification::Suspicious));
    assert_eq!(
        first.effective_classification,
        Some(Classification::Suspicious)
    );

    // A reader submits evidence; staff accepts it
    let submit = SubmitFeedbackUseCase::new(Arc::clone(&h.feedback), Arc::new(NoAuditLog));
    let submission_id = submit
        .execute(SubmitFeedbackInput {
            fingerprint: first.fingerprint.clone(),
            submitter: "reader-1".to_string(),
            evidence: "Lunar samples from 1969 say otherwise.".to_string(),
        })
        .await
        .unwrap();

    let review = ReviewFeedbackUseCase::new(
        Arc::clone(&h.feedback),
        Arc::clone(&h.registry),
        Arc::new(StaffList::new(vec!["staff-1".to_string()])),
        Arc::new(NoAuditLog),
    );
    let reviewed = review
        .execute(ReviewFeedbackInput {
            submission_id,
            decision: ReviewDecision::Accepted,
            reviewer: "staff-1".to_string(),
        })
        .await
        .unwrap();
    assert!(reviewed.is_accepted());

    // Acceptance alone changed no verdict, but invalidated the case
    let stale = h
        .registry
        .lookup(&first.fingerprint)
        .await
        .unwrap()
        .unwrap();
    assert!(stale.is_stale());

    // Next request re-tries; both weighted roles now clear the content
    let second = h
        .facade
        .execute(VerdictQuery::Content(ARTICLE.to_string()))
        .await
        .unwrap();
    assert_eq!(second.status, ReportStatus::Decided);
    // Base verdict of the fresh trial retained for audit...
    assert_eq!(second.classification, Some(Classification::Suspicious));
    // ...while the effective classification is overridden to CLEAN
    assert_eq!(second.effective_classification, Some(Classification::Clean));

    // Each juror sat exactly twice (one per trial)
    for juror in &h.jurors {
        assert_eq!(juror.calls(), 2);
    }

    // The case file shows the hydrated feedback trail
    let case = h
        .facade
        .case_file(&first.fingerprint)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(case.feedback.len(), 1);
    assert_eq!(case.feedback[0].review_status, ReviewStatus::Accepted);
}

#[tokio::test]
async fn unauthorized_review_changes_nothing() {
    let h = harness(scenario_bench());
    let fingerprint = Fingerprinter::default().fingerprint(ARTICLE);

    let submit = SubmitFeedbackUseCase::new(Arc::clone(&h.feedback), Arc::new(NoAuditLog));
    let submission_id = submit
        .execute(SubmitFeedbackInput {
            fingerprint,
            submitter: "reader-1".to_string(),
            evidence: "I simply do not like this article.".to_string(),
        })
        .await
        .unwrap();

    let review = ReviewFeedbackUseCase::new(
        Arc::clone(&h.feedback),
        Arc::clone(&h.registry),
        Arc::new(StaffList::new(vec!["staff-1".to_string()])),
        Arc::new(NoAuditLog),
    );
    let result = review
        .execute(ReviewFeedbackInput {
            submission_id,
            decision: ReviewDecision::Accepted,
            reviewer: "reader-1".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ReviewFeedbackError::PermissionDenied(_))
    ));

    // No state change: the submission still pends review
    let submission = h.feedback.get(&submission_id).await.unwrap().unwrap();
    assert_eq!(submission.review_status, ReviewStatus::PendingReview);
}
