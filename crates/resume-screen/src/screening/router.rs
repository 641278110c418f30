use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{CandidateSubmission, SubmissionId};
use super::engine::ScreeningError;
use super::ledger::{LedgerError, SubmissionLedger};
use super::service::{ResumeScreeningService, ScreeningServiceError};

const DASHBOARD_LIMIT: usize = 20;

/// Router builder exposing the candidate and recruiter screening endpoints.
pub fn screening_router<L>(service: Arc<ResumeScreeningService<L>>) -> Router
where
    L: SubmissionLedger + 'static,
{
    Router::new()
        .route(
            "/api/v1/screenings/candidate",
            post(candidate_screening_handler::<L>),
        )
        .route(
            "/api/v1/screenings/recruiter",
            post(recruiter_screening_handler::<L>),
        )
        .route("/api/v1/screenings", get(dashboard_handler::<L>))
        .route(
            "/api/v1/screenings/:submission_id",
            get(report_handler::<L>),
        )
        .route("/api/v1/roles", get(roles_handler::<L>))
        .with_state(service)
}

pub(crate) async fn candidate_screening_handler<L>(
    State(service): State<Arc<ResumeScreeningService<L>>>,
    axum::Json(submission): axum::Json<CandidateSubmission>,
) -> Response
where
    L: SubmissionLedger + 'static,
{
    if submission.candidate_name.trim().is_empty() {
        let payload = json!({ "error": "candidate name is required" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match service.screen(submission) {
        Ok(record) => (StatusCode::OK, axum::Json(record.candidate_view())).into_response(),
        Err(error) => error_response(error),
    }
}

/// Recruiter intake: submissions arrive anonymized, so no name requirement,
/// and the response carries the fit tier and recommendation.
pub(crate) async fn recruiter_screening_handler<L>(
    State(service): State<Arc<ResumeScreeningService<L>>>,
    axum::Json(submission): axum::Json<CandidateSubmission>,
) -> Response
where
    L: SubmissionLedger + 'static,
{
    match service.screen(submission) {
        Ok(record) => (StatusCode::OK, axum::Json(record.recruiter_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<L>(
    State(service): State<Arc<ResumeScreeningService<L>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    L: SubmissionLedger + 'static,
{
    let id = SubmissionId(submission_id);
    match service.fetch(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.candidate_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_handler<L>(
    State(service): State<Arc<ResumeScreeningService<L>>>,
) -> Response
where
    L: SubmissionLedger + 'static,
{
    match service.recent(DASHBOARD_LIMIT) {
        Ok(records) => {
            let rows: Vec<_> = records
                .iter()
                .map(|record| record.recruiter_view())
                .collect();
            (StatusCode::OK, axum::Json(rows)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn roles_handler<L>(
    State(service): State<Arc<ResumeScreeningService<L>>>,
) -> Response
where
    L: SubmissionLedger + 'static,
{
    let roles: Vec<_> = service.engine().catalog().roles().cloned().collect();
    (StatusCode::OK, axum::Json(roles)).into_response()
}

fn error_response(error: ScreeningServiceError) -> Response {
    let (status, message) = match &error {
        ScreeningServiceError::EmptySubmission => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        ScreeningServiceError::Screening(ScreeningError::UnknownRole(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        ScreeningServiceError::Ledger(LedgerError::NotFound) => {
            (StatusCode::NOT_FOUND, error.to_string())
        }
        ScreeningServiceError::Ledger(LedgerError::Conflict) => {
            (StatusCode::CONFLICT, error.to_string())
        }
        ScreeningServiceError::Ledger(LedgerError::Unavailable(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };

    let payload = json!({ "error": message });
    (status, axum::Json(payload)).into_response()
}
