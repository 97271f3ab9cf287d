//! Behaviour shared by every repository implementation.
//!
//! Each function drives one implementation through a scenario and asserts
//! on the observable results; the per-backend test files call them.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};

use apim_core::{
    AssetType, DiagnosticRange, DomainError, PortalPage, PortalPageRepository, ScoringAsset,
    ScoringDiagnostic, ScoringReport, ScoringReportRepository, Severity,
};

fn tagged_page(id: &str, contexts: &[&str]) -> PortalPage {
    PortalPage::new("DEFAULT", format!("Page {}", id), "# Content")
        .with_id(id)
        .with_contexts(Some(contexts.iter().map(|c| c.to_string()).collect()))
}

fn report_at(id: &str, api_id: &str, environment_id: &str, minute: i64) -> ScoringReport {
    let base = Utc.with_ymd_and_hms(2024, 10, 14, 9, 0, 0).unwrap();
    let mut report = ScoringReport::new(api_id, environment_id, 0.8, vec![])
        .created_at(base + Duration::minutes(minute));
    report.id = id.to_string();
    report
}

pub async fn create_then_find_returns_equal_page<R: PortalPageRepository>(repo: &R) {
    let page = PortalPage::new("DEFAULT", "Home", "# Welcome")
        .with_contexts(Some(vec!["homepage".to_string()]));

    let created = repo.create(&page).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, page.name);
    assert_eq!(created.contexts, page.contexts);

    let found = repo.find_by_id(&created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

pub async fn create_with_taken_id_conflicts<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &[])).await.unwrap();

    let result = repo.create(&tagged_page("p1", &["homepage"])).await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));

    let kept = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(kept.contexts, Some(vec![]));
}

pub async fn find_unknown_page_is_none<R: PortalPageRepository>(repo: &R) {
    assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    assert!(repo.find_all().await.unwrap().is_empty());
}

pub async fn find_all_keeps_insertion_order<R: PortalPageRepository>(repo: &R) {
    for id in ["b", "a", "c"] {
        repo.create(&tagged_page(id, &[])).await.unwrap();
    }

    let ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

pub async fn update_replaces_or_inserts<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &["homepage"])).await.unwrap();

    let mut changed = tagged_page("p1", &[]);
    changed.content = "# Changed".to_string();
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated, changed);
    assert_eq!(repo.find_by_id("p1").await.unwrap(), Some(changed));

    let fresh = tagged_page("p2", &[]);
    repo.update(&fresh).await.unwrap();
    assert_eq!(repo.find_by_id("p2").await.unwrap(), Some(fresh));
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

pub async fn update_with_empty_id_assigns_one<R: PortalPageRepository>(repo: &R) {
    let page = PortalPage::new("DEFAULT", "Draft", "");

    let stored = repo.update(&page).await.unwrap();
    assert!(!stored.id.is_empty());
    assert_eq!(repo.find_by_id(&stored.id).await.unwrap(), Some(stored));
    assert_eq!(repo.find_by_id("").await.unwrap(), None);
}

pub async fn delete_is_idempotent<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &[])).await.unwrap();

    repo.delete("p1").await.unwrap();
    repo.delete("p1").await.unwrap();
    repo.delete("never-existed").await.unwrap();

    assert_eq!(repo.find_by_id("p1").await.unwrap(), None);
}

pub async fn assign_context_twice_keeps_one_tag<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &["homepage"])).await.unwrap();

    repo.assign_context("p1", "public").await.unwrap();
    repo.assign_context("p1", "public").await.unwrap();

    let page = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(
        page.contexts,
        Some(vec!["homepage".to_string(), "public".to_string()])
    );
}

pub async fn remove_context_drops_tag<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &["homepage", "public"]))
        .await
        .unwrap();

    repo.remove_context("p1", "homepage").await.unwrap();
    repo.remove_context("p1", "homepage").await.unwrap();

    let page = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(page.contexts, Some(vec!["public".to_string()]));
}

pub async fn context_ops_on_unknown_page_are_noops<R: PortalPageRepository>(repo: &R) {
    repo.assign_context("missing", "homepage").await.unwrap();
    repo.remove_context("missing", "homepage").await.unwrap();

    assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
}

pub async fn context_ops_leave_untagged_page_alone<R: PortalPageRepository>(repo: &R) {
    let untagged = tagged_page("p1", &[]).with_contexts(None);
    repo.create(&untagged).await.unwrap();

    repo.assign_context("p1", "homepage").await.unwrap();
    repo.remove_context("p1", "homepage").await.unwrap();

    let page = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(page.contexts, None);
    assert!(repo.find_by_context("homepage").await.unwrap().is_empty());
}

pub async fn find_by_context_matches_tagged_pages<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &["homepage"])).await.unwrap();
    repo.create(&tagged_page("p2", &["public"])).await.unwrap();
    repo.create(&tagged_page("p3", &["public", "homepage"]))
        .await
        .unwrap();

    let ids: Vec<String> = repo
        .find_by_context("homepage")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["p1", "p3"]);

    assert!(repo.find_by_context("unknown").await.unwrap().is_empty());
}

pub async fn context_mutations_drive_find_by_context<R: PortalPageRepository>(repo: &R) {
    repo.create(&tagged_page("p1", &["homepage"])).await.unwrap();

    repo.assign_context("p1", "public").await.unwrap();
    repo.assign_context("p1", "public").await.unwrap();
    let page = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(
        page.contexts,
        Some(vec!["homepage".to_string(), "public".to_string()])
    );
    let public: Vec<String> = repo
        .find_by_context("public")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(public, vec!["p1"]);

    repo.remove_context("p1", "homepage").await.unwrap();
    let page = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(page.contexts, Some(vec!["public".to_string()]));
    assert!(repo.find_by_context("homepage").await.unwrap().is_empty());

    repo.remove_context("p1", "public").await.unwrap();
    let page = repo.find_by_id("p1").await.unwrap().unwrap();
    assert_eq!(page.contexts, Some(vec![]));
    assert!(repo.find_by_context("public").await.unwrap().is_empty());
}

pub async fn report_with_taken_id_conflicts<R: ScoringReportRepository>(repo: &R) {
    repo.create(&report_at("r1", "api-1", "DEFAULT", 0))
        .await
        .unwrap();

    let result = repo.create(&report_at("r1", "api-2", "DEFAULT", 5)).await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));

    let kept = repo.find_latest_for("api-1").await.unwrap().unwrap();
    assert_eq!(kept.id, "r1");
    assert_eq!(repo.find_latest_for("api-2").await.unwrap(), None);
}

pub async fn report_round_trips_assets<R: ScoringReportRepository>(repo: &R) {
    let assets = vec![
        ScoringAsset::new(AssetType::OpenApi, Some("page-1".to_string())).with_diagnostic(
            ScoringDiagnostic {
                severity: Severity::Warn,
                range: DiagnosticRange::default(),
                rule: "operation-description".to_string(),
                message: "Operation should have a description".to_string(),
                path: "paths./pets.get".to_string(),
            },
        ),
        ScoringAsset::new(AssetType::GraviteeProxy, None),
    ];
    let report = ScoringReport::new("api-1", "DEFAULT", 0.5, assets);

    let created = repo.create(&report).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.summary.warnings, 1);

    let latest = repo.find_latest_for("api-1").await.unwrap();
    assert_eq!(latest, Some(created));
}

pub async fn latest_report_follows_created_at<R: ScoringReportRepository>(repo: &R) {
    repo.create(&report_at("r-new", "api-1", "DEFAULT", 30))
        .await
        .unwrap();
    repo.create(&report_at("r-old", "api-1", "DEFAULT", 0))
        .await
        .unwrap();
    repo.create(&report_at("r-other", "api-2", "DEFAULT", 60))
        .await
        .unwrap();

    let latest = repo.find_latest_for("api-1").await.unwrap().unwrap();
    assert_eq!(latest.id, "r-new");
    assert_eq!(repo.find_latest_for("api-3").await.unwrap(), None);
}

pub async fn latest_report_tie_goes_to_last_inserted<R: ScoringReportRepository>(repo: &R) {
    repo.create(&report_at("first", "api-1", "DEFAULT", 5))
        .await
        .unwrap();
    repo.create(&report_at("second", "api-1", "DEFAULT", 5))
        .await
        .unwrap();

    let latest = repo.find_latest_for("api-1").await.unwrap().unwrap();
    assert_eq!(latest.id, "second");
}

pub async fn sub_microsecond_timestamps_order_like_the_stored_value<R: ScoringReportRepository>(
    repo: &R,
) {
    let base = report_at("unused", "api-1", "DEFAULT", 0).created_at;
    let at = |id: &str, api_id: &str, offset: Duration| {
        let mut report = report_at(id, api_id, "DEFAULT", 0);
        report.created_at = base + offset;
        report
    };

    // Same microsecond: stored timestamps are equal, the last insert wins
    let newer = repo
        .create(&at("newer", "api-1", Duration::nanoseconds(500)))
        .await
        .unwrap();
    repo.create(&at("older", "api-1", Duration::zero()))
        .await
        .unwrap();
    assert_eq!(newer.created_at, base);
    let latest = repo.find_latest_for("api-1").await.unwrap().unwrap();
    assert_eq!(latest.id, "older");

    // One microsecond apart: the greater timestamp wins whatever the insert order
    repo.create(&at("later", "api-2", Duration::nanoseconds(1_500)))
        .await
        .unwrap();
    repo.create(&at("earlier", "api-2", Duration::nanoseconds(500)))
        .await
        .unwrap();
    let latest = repo.find_latest_for("api-2").await.unwrap().unwrap();
    assert_eq!(latest.id, "later");
    assert_eq!(latest.created_at, base + Duration::microseconds(1));

    let ids: Vec<String> = repo
        .find_environment_latest_reports("DEFAULT")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["older", "later"]);
}

pub async fn delete_by_api_removes_only_that_api<R: ScoringReportRepository>(repo: &R) {
    repo.create(&report_at("r1", "api-1", "DEFAULT", 0))
        .await
        .unwrap();
    repo.create(&report_at("r2", "api-1", "DEFAULT", 1))
        .await
        .unwrap();
    repo.create(&report_at("r3", "api-2", "DEFAULT", 2))
        .await
        .unwrap();

    repo.delete_by_api("api-1").await.unwrap();
    repo.delete_by_api("api-1").await.unwrap();

    assert_eq!(repo.find_latest_for("api-1").await.unwrap(), None);
    let other = repo.find_latest_for("api-2").await.unwrap().unwrap();
    assert_eq!(other.id, "r3");
}

pub async fn environment_reports_are_latest_per_api<R: ScoringReportRepository>(repo: &R) {
    repo.create(&report_at("b-old", "api-b", "DEFAULT", 0))
        .await
        .unwrap();
    repo.create(&report_at("b-new", "api-b", "DEFAULT", 10))
        .await
        .unwrap();
    repo.create(&report_at("a-only", "api-a", "DEFAULT", 3))
        .await
        .unwrap();
    repo.create(&report_at("elsewhere", "api-c", "STAGING", 20))
        .await
        .unwrap();

    let ids: Vec<String> = repo
        .find_environment_latest_reports("DEFAULT")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["a-only", "b-new"]);

    repo.delete_by_environment("DEFAULT").await.unwrap();
    assert!(repo
        .find_environment_latest_reports("DEFAULT")
        .await
        .unwrap()
        .is_empty());
    assert!(repo.find_latest_for("api-c").await.unwrap().is_some());
}
