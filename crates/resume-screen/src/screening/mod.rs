//! Resume screening: role catalog, skill matching, decision policy, and the
//! service/router surfaces that expose them to the candidate and recruiter
//! portals. The rule-based path and the statistical classifier are alternative
//! scoring strategies behind one evaluation contract.

pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod engine;
pub(crate) mod explain;
pub mod ledger;
pub mod matcher;
pub mod policy;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{RoleCatalog, RoleProfile};
pub use classifier::{
    bootstrap_corpus, load_corpus, load_corpus_from_path, ClassifierHandle, LabeledResume,
    Prediction, ResumeClassifier, TrainingError, TrainingParams,
};
pub use domain::{CandidateSubmission, Decision, EvaluationResult, FitTier, SubmissionId};
pub use engine::{ScoringStrategy, ScreeningEngine, ScreeningError};
pub use ledger::{
    CandidateReportView, LedgerError, RecruiterRowView, ScreeningRecord, SubmissionLedger,
};
pub use matcher::SkillMatch;
pub use policy::{PolicyConfig, PolicyVariant, TierMapping};
pub use router::screening_router;
pub use service::{ResumeScreeningService, ScreeningServiceError};
