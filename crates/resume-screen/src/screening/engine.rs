use std::sync::Arc;

use tracing::warn;

use super::catalog::{RoleCatalog, RoleProfile};
use super::classifier::ClassifierHandle;
use super::domain::{Decision, EvaluationResult};
use super::explain::{narrate, Explanation};
use super::matcher::partition_skills;
use super::policy::PolicyConfig;

/// Request-level evaluation failures. Anything else either produces a
/// complete result or was already fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("unknown role '{0}': not present in the role catalog")]
    UnknownRole(String),
}

/// How a deployment scores submissions. Fixed at startup; the two strategies
/// are never combined on one request.
#[derive(Debug, Clone)]
pub enum ScoringStrategy {
    /// Catalog + matcher + policy.
    Rules,
    /// Trained classifier; `select_label` is the corpus label mapped to a
    /// SELECT decision.
    Statistical {
        handle: Arc<ClassifierHandle>,
        select_label: String,
    },
}

/// Stateless evaluation core shared by every presentation surface. A pure
/// function of (role, candidate text) for a fixed configuration.
#[derive(Debug, Clone)]
pub struct ScreeningEngine {
    catalog: RoleCatalog,
    policy: PolicyConfig,
    strategy: ScoringStrategy,
}

impl ScreeningEngine {
    pub fn new(catalog: RoleCatalog, policy: PolicyConfig, strategy: ScoringStrategy) -> Self {
        Self {
            catalog,
            policy,
            strategy,
        }
    }

    pub fn rule_based(catalog: RoleCatalog, policy: PolicyConfig) -> Self {
        Self::new(catalog, policy, ScoringStrategy::Rules)
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Evaluate already-normalized (lowercase) candidate text against a role.
    /// Empty text is a valid input and degrades to a zero score; an unknown
    /// role is a configuration error, never silently defaulted.
    pub fn evaluate(
        &self,
        role: &str,
        candidate_text: &str,
    ) -> Result<EvaluationResult, ScreeningError> {
        let profile = self
            .catalog
            .get(role)
            .ok_or_else(|| ScreeningError::UnknownRole(role.to_string()))?;

        match &self.strategy {
            ScoringStrategy::Rules => Ok(self.evaluate_rules(profile, candidate_text)),
            ScoringStrategy::Statistical {
                handle,
                select_label,
            } => Ok(self.evaluate_statistical(profile, candidate_text, handle, select_label)),
        }
    }

    fn evaluate_rules(&self, profile: &RoleProfile, candidate_text: &str) -> EvaluationResult {
        if profile.required_skills.is_empty() {
            warn!(
                role = profile.role_name.as_str(),
                "role configured with an empty requirement set; rejecting with zero score"
            );
        }

        let skill_match = partition_skills(candidate_text, &profile.required_skills);
        let primary_present = profile
            .primary_skill
            .as_deref()
            .map(|skill| candidate_text.contains(skill));

        let outcome = self.policy.decide(&skill_match, primary_present);
        let explanation = narrate(outcome.decision, &outcome.triggers, &skill_match);

        EvaluationResult {
            role: profile.role_name.clone(),
            score: outcome.score,
            decision: outcome.decision,
            matched_skills: skill_match.matched,
            missing_skills: skill_match.missing,
            fit_tier: outcome.fit_tier,
            reason: explanation.reason,
            improvement: explanation.improvement,
        }
    }

    fn evaluate_statistical(
        &self,
        profile: &RoleProfile,
        candidate_text: &str,
        handle: &ClassifierHandle,
        select_label: &str,
    ) -> EvaluationResult {
        let model = handle.current();
        let prediction = model.predict(candidate_text);

        let decision = if prediction.label == select_label {
            Decision::Select
        } else {
            Decision::Reject
        };
        let score = (prediction.confidence * 100.0).floor().clamp(0.0, 100.0) as u8;

        // The classifier has no per-skill view, so the skill lists stay empty
        // and the tier bands over the confidence score.
        let explanation = Explanation {
            reason: format!(
                "classifier predicted '{}' with {}% confidence",
                prediction.label, score
            ),
            improvement: match decision {
                Decision::Select => "no action needed".to_string(),
                Decision::Reject => format!(
                    "profile does not match historical '{}' outcomes for this role",
                    select_label
                ),
            },
        };

        EvaluationResult {
            role: profile.role_name.clone(),
            score,
            decision,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            fit_tier: self.policy.fit_tier(score, decision),
            reason: explanation.reason,
            improvement: explanation.improvement,
        }
    }
}
