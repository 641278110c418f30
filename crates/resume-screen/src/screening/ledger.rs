use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CandidateSubmission, EvaluationResult, SubmissionId};

/// Ledger entry for one screened submission. Held in memory for dashboard
/// display only; no durability is promised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub submission_id: SubmissionId,
    pub candidate_name: String,
    pub submission: CandidateSubmission,
    pub outcome: EvaluationResult,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningRecord {
    /// Full report for the candidate who submitted the resume.
    pub fn candidate_view(&self) -> CandidateReportView {
        CandidateReportView {
            submission_id: self.submission_id.clone(),
            role: self.outcome.role.clone(),
            score: self.outcome.score,
            decision: self.outcome.decision.label(),
            matched_skills: self.outcome.matched_skills.clone(),
            missing_skills: self.outcome.missing_skills.clone(),
            reason: self.outcome.reason.clone(),
            improvement: self.outcome.improvement.clone(),
        }
    }

    /// Anonymized dashboard row for recruiters: fit tier, recommendation,
    /// and gap count, but no candidate identity or raw text.
    pub fn recruiter_view(&self) -> RecruiterRowView {
        RecruiterRowView {
            submission_id: self.submission_id.clone(),
            role: self.outcome.role.clone(),
            score: self.outcome.score,
            fit_tier: self.outcome.fit_tier.label(),
            recommendation: self.outcome.fit_tier.recommendation(),
            skill_gaps: self.outcome.missing_skills.len(),
            screened_at: self.screened_at,
        }
    }
}

/// Storage abstraction so the service can be exercised without a concrete
/// backing store.
pub trait SubmissionLedger: Send + Sync {
    fn append(&self, record: ScreeningRecord) -> Result<ScreeningRecord, LedgerError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<ScreeningRecord>, LedgerError>;
    /// Most recent records first, capped at `limit`.
    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, LedgerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// What the candidate portal renders after screening.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateReportView {
    pub submission_id: SubmissionId,
    pub role: String,
    pub score: u8,
    pub decision: &'static str,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reason: String,
    pub improvement: String,
}

/// One anonymized row on the recruiter dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterRowView {
    pub submission_id: SubmissionId,
    pub role: String,
    pub score: u8,
    pub fit_tier: &'static str,
    pub recommendation: &'static str,
    pub skill_gaps: usize,
    pub screened_at: DateTime<Utc>,
}
