use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::screening::policy::PolicyConfig;
use crate::screening::router;
use crate::screening::ResumeScreeningService;

#[tokio::test]
async fn candidate_handler_requires_a_name() {
    let (service, ledger) = build_service();
    let service = Arc::new(service);

    let mut anonymous = submission();
    anonymous.candidate_name = String::new();

    let response = router::candidate_screening_handler::<MemoryLedger>(
        State(service),
        axum::Json(anonymous),
    )
    .await;

    assert_unprocessable(&response);
    assert_eq!(ledger.count(), 0);
}

#[tokio::test]
async fn candidate_handler_rejects_blank_submissions() {
    let (service, _ledger) = build_service();
    let service = Arc::new(service);

    let response = router::candidate_screening_handler::<MemoryLedger>(
        State(service),
        axum::Json(blank_submission()),
    )
    .await;

    assert_unprocessable(&response);
}

#[tokio::test]
async fn candidate_handler_rejects_unknown_roles() {
    let (service, _ledger) = build_service();
    let service = Arc::new(service);

    let mut request = submission();
    request.role = "Quantum Developer".to_string();

    let response = router::candidate_screening_handler::<MemoryLedger>(
        State(service),
        axum::Json(request),
    )
    .await;

    assert_unprocessable(&response);
}

#[tokio::test]
async fn ledger_outage_maps_to_internal_error() {
    let engine = Arc::new(rule_engine(PolicyConfig::threshold_50()));
    let service = Arc::new(ResumeScreeningService::new(
        engine,
        Arc::new(UnavailableLedger),
    ));

    let response = router::candidate_screening_handler::<UnavailableLedger>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn candidate_route_returns_the_full_report() {
    let (service, _ledger) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/screenings/candidate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    assert_eq!(payload.get("decision"), Some(&json!("selected")));
    assert_eq!(payload.get("score"), Some(&json!(100)));
    assert!(payload.get("submission_id").is_some());
    assert!(payload.get("reason").is_some());
    assert!(payload.get("improvement").is_some());
    // The candidate report never carries recruiter triage fields.
    assert!(payload.get("fit_tier").is_none());
}

#[tokio::test]
async fn recruiter_route_returns_an_anonymized_row() {
    let (service, _ledger) = build_service();
    let router = router_with_service(service);

    let mut anonymous = submission();
    anonymous.candidate_name = String::new();

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/screenings/recruiter")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&anonymous).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    assert_eq!(payload.get("fit_tier"), Some(&json!("high_fit")));
    assert_eq!(payload.get("recommendation"), Some(&json!("shortlist")));
    assert_eq!(payload.get("skill_gaps"), Some(&json!(0)));
    assert!(payload.get("screened_at").is_some());
    assert!(payload.get("candidate_name").is_none());
    assert!(payload.get("reason").is_none());
}

#[tokio::test]
async fn report_route_fetches_stored_screenings() {
    let (service, _ledger) = build_service();
    let stored = service.screen(submission()).expect("screening succeeds");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get(format!(
                "/api/v1/screenings/{}",
                stored.submission_id.0
            ))
            .body(axum::body::Body::empty())
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("submission_id"),
        Some(&json!(stored.submission_id.0))
    );
}

#[tokio::test]
async fn report_route_returns_not_found_for_unknown_ids() {
    let (service, _ledger) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/screenings/sub-does-not-exist")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_route_lists_newest_first() {
    let (service, _ledger) = build_service();

    let first = service.screen(submission()).expect("screening succeeds");
    let second = service.screen(submission()).expect("screening succeeds");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/screenings")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rows = payload.as_array().expect("array of rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].get("submission_id"),
        Some(&json!(second.submission_id.0))
    );
    assert_eq!(
        rows[1].get("submission_id"),
        Some(&json!(first.submission_id.0))
    );
}

#[tokio::test]
async fn roles_route_lists_the_catalog() {
    let (service, _ledger) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/roles")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let roles = payload.as_array().expect("array of roles");

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].get("role_name"), Some(&json!("Python Developer")));
    assert!(roles[0].get("required_skills").is_some());
}
