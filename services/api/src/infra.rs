use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use resume_screen::config::{ScoringStrategyKind, ScreeningConfig};
use resume_screen::error::AppError;
use resume_screen::screening::{
    bootstrap_corpus, load_corpus_from_path, ClassifierHandle, LedgerError, PolicyConfig,
    ResumeClassifier, RoleCatalog, ScoringStrategy, ScreeningEngine, ScreeningRecord,
    SubmissionId, SubmissionLedger, TrainingParams,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Append-only in-process store. Insertion order doubles as the recency order
/// for the recruiter dashboard.
#[derive(Default)]
pub(crate) struct InMemorySubmissionLedger {
    records: Mutex<Vec<ScreeningRecord>>,
}

impl SubmissionLedger for InMemorySubmissionLedger {
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
        Ok(guard
            .iter()
            .find(|record| &record.submission_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, LedgerError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

/// Resolve the configured policy preset, or fail startup with the offending
/// value.
pub(crate) fn resolve_policy(preset: &str) -> Result<PolicyConfig, AppError> {
    PolicyConfig::preset(preset).ok_or_else(|| {
        AppError::from(resume_screen::config::ConfigError::UnknownPolicyPreset {
            value: preset.to_string(),
        })
    })
}

/// Build the engine a deployment runs: the built-in catalog, the configured
/// policy, and either the rule-based matcher or a classifier trained from the
/// configured dataset (falling back to the bundled bootstrap corpus).
pub(crate) fn build_engine(screening: &ScreeningConfig) -> Result<ScreeningEngine, AppError> {
    let policy = resolve_policy(&screening.policy_preset)?;
    let catalog = RoleCatalog::builtin();

    let strategy = match screening.strategy {
        ScoringStrategyKind::Rules => ScoringStrategy::Rules,
        ScoringStrategyKind::Statistical => {
            let corpus = match &screening.dataset_path {
                Some(path) => {
                    let corpus = load_corpus_from_path(path).map_err(AppError::from)?;
                    info!(dataset = %path.display(), documents = corpus.len(), "loaded screening corpus");
                    corpus
                }
                None => {
                    info!("no screening dataset configured; training on the bootstrap corpus");
                    bootstrap_corpus()
                }
            };

            let model = ResumeClassifier::train(&corpus, TrainingParams::default())
                .map_err(AppError::from)?;
            ScoringStrategy::Statistical {
                handle: Arc::new(ClassifierHandle::new(model)),
                select_label: screening.select_label.clone(),
            }
        }
    };

    Ok(ScreeningEngine::new(catalog, policy, strategy))
}
