use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::screening::catalog::{RoleCatalog, RoleProfile};
use crate::screening::classifier::{LabeledResume, ResumeClassifier, TrainingParams};
use crate::screening::domain::{CandidateSubmission, SubmissionId};
use crate::screening::engine::ScreeningEngine;
use crate::screening::ledger::{LedgerError, ScreeningRecord, SubmissionLedger};
use crate::screening::policy::PolicyConfig;
use crate::screening::{screening_router, ResumeScreeningService};

/// Five-skill profile kept small so coverage percentages stay easy to reason
/// about in assertions.
pub(super) fn compact_python_profile() -> RoleProfile {
    RoleProfile::new(
        "Python Developer",
        &["python", "django", "flask", "sql", "oops"],
        Some("python"),
    )
}

pub(super) fn compact_catalog() -> RoleCatalog {
    RoleCatalog::new([compact_python_profile()])
}

pub(super) fn rule_engine(policy: PolicyConfig) -> ScreeningEngine {
    ScreeningEngine::rule_based(compact_catalog(), policy)
}

pub(super) fn submission() -> CandidateSubmission {
    CandidateSubmission {
        candidate_name: "Asha Pillai".to_string(),
        role: "Python Developer".to_string(),
        resume_text: "Built services with python and django, flask dashboards, sql reporting, oops design".to_string(),
        skills: String::new(),
        education: "B.Tech Computer Science".to_string(),
        certifications: String::new(),
        experience_years: Some(4),
    }
}

pub(super) fn blank_submission() -> CandidateSubmission {
    CandidateSubmission {
        candidate_name: "Asha Pillai".to_string(),
        role: "Python Developer".to_string(),
        resume_text: String::new(),
        skills: String::new(),
        education: String::new(),
        certifications: String::new(),
        experience_years: None,
    }
}

pub(super) fn training_corpus() -> Vec<LabeledResume> {
    vec![
        LabeledResume::new("python django flask sql backend services", "Hire"),
        LabeledResume::new("python pandas numpy machine learning pipelines", "Hire"),
        LabeledResume::new("java spring hibernate sql microservices", "Hire"),
        LabeledResume::new("retail cashier customer service scheduling", "Reject"),
        LabeledResume::new("warehouse logistics forklift inventory", "Reject"),
        LabeledResume::new("hospitality front desk reservations billing", "Reject"),
    ]
}

pub(super) fn trained_classifier() -> ResumeClassifier {
    ResumeClassifier::train(&training_corpus(), TrainingParams::default())
        .expect("corpus trains")
}

pub(super) fn build_service() -> (
    ResumeScreeningService<MemoryLedger>,
    Arc<MemoryLedger>,
) {
    let ledger = Arc::new(MemoryLedger::default());
    let engine = Arc::new(rule_engine(PolicyConfig::threshold_50()));
    let service = ResumeScreeningService::new(engine, ledger.clone());
    (service, ledger)
}

pub(super) fn router_with_service(
    service: ResumeScreeningService<MemoryLedger>,
) -> axum::Router {
    screening_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryLedger {
    records: Mutex<Vec<ScreeningRecord>>,
}

impl MemoryLedger {
    pub(super) fn count(&self) -> usize {
        self.records.lock().expect("ledger mutex poisoned").len()
    }
}

impl SubmissionLedger for MemoryLedger {
    fn append(&self, record: ScreeningRecord) -> Result<ScreeningRecord, LedgerError> {
        let mut guard = self.records.lock().expect("ledger mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(LedgerError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<ScreeningRecord>, LedgerError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard.iter().find(|record| &record.submission_id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, LedgerError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableLedger;

impl SubmissionLedger for UnavailableLedger {
    fn append(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, LedgerError> {
        Err(LedgerError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<ScreeningRecord>, LedgerError> {
        Err(LedgerError::Unavailable("store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ScreeningRecord>, LedgerError> {
        Err(LedgerError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
