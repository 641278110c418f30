use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{CandidateSubmission, SubmissionId};
use super::engine::{ScreeningEngine, ScreeningError};
use super::ledger::{LedgerError, ScreeningRecord, SubmissionLedger};

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

/// Service composing the evaluation engine with the submission ledger. The
/// engine stays a pure function; everything stateful lives behind the ledger.
pub struct ResumeScreeningService<L> {
    engine: Arc<ScreeningEngine>,
    ledger: Arc<L>,
}

impl<L> ResumeScreeningService<L>
where
    L: SubmissionLedger + 'static,
{
    pub fn new(engine: Arc<ScreeningEngine>, ledger: Arc<L>) -> Self {
        Self { engine, ledger }
    }

    pub fn engine(&self) -> &ScreeningEngine {
        &self.engine
    }

    /// Evaluate a submission and append the outcome to the ledger. A fully
    /// blank submission is bounced back for re-prompting; empty-but-present
    /// text still evaluates (to a zero score) per the engine contract.
    pub fn screen(
        &self,
        submission: CandidateSubmission,
    ) -> Result<ScreeningRecord, ScreeningServiceError> {
        if submission.is_blank() {
            return Err(ScreeningServiceError::EmptySubmission);
        }

        let outcome = self
            .engine
            .evaluate(&submission.role, &submission.normalized_text())?;

        let record = ScreeningRecord {
            submission_id: next_submission_id(),
            candidate_name: submission.candidate_name.clone(),
            submission,
            outcome,
            screened_at: Utc::now(),
        };

        let stored = self.ledger.append(record)?;
        Ok(stored)
    }

    pub fn fetch(&self, id: &SubmissionId) -> Result<ScreeningRecord, ScreeningServiceError> {
        let record = self.ledger.fetch(id)?.ok_or(LedgerError::NotFound)?;
        Ok(record)
    }

    /// Latest screenings for the recruiter dashboard.
    pub fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, ScreeningServiceError> {
        Ok(self.ledger.recent(limit)?)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error("submission is empty: provide resume text or candidate details")]
    EmptySubmission,
    #[error(transparent)]
    Screening(#[from] ScreeningError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
