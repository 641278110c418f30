use serde::{Deserialize, Serialize};

use super::domain::{Decision, FitTier};
use super::matcher::SkillMatch;

/// Score at or above which a selected candidate counts as a high fit.
pub const HIGH_FIT_CUTOFF: u8 = 70;
/// Raw-score tier boundary between moderate and low fit.
pub const MODERATE_FIT_CUTOFF: u8 = 50;

const DEFAULT_MINIMUM_MATCHED: usize = 2;

/// Selection rule applied to the matcher output. Chosen per deployment,
/// never toggled within a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyVariant {
    /// Select exactly when the coverage score reaches the threshold.
    Threshold,
    /// Select when any one condition holds: the role's primary skill is
    /// present, at least `minimum_matched` skills matched, or the score
    /// reaches the threshold. Weakly more permissive than `Threshold` at the
    /// same threshold value.
    Disjunctive { minimum_matched: usize },
}

/// How scores band into fit tiers for recruiter triage. The legacy portals
/// disagreed on whether tiers applied to the raw score or only to selected
/// candidates; both mappings are kept as configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierMapping {
    /// High/Moderate require a SELECT decision; everything else is Low.
    DecisionGated,
    /// Band on the raw score alone, regardless of decision.
    RawScore,
}

/// Threshold, variant, and tier mapping for one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub threshold: u8,
    pub variant: PolicyVariant,
    pub tier_mapping: TierMapping,
}

impl PolicyConfig {
    /// Candidate portal default: select at 50% coverage.
    pub fn threshold_50() -> Self {
        Self {
            threshold: 50,
            variant: PolicyVariant::Threshold,
            tier_mapping: TierMapping::DecisionGated,
        }
    }

    /// Stricter variant observed in some deployments.
    pub fn threshold_60() -> Self {
        Self {
            threshold: 60,
            variant: PolicyVariant::Threshold,
            tier_mapping: TierMapping::DecisionGated,
        }
    }

    /// Lightweight ATS rule: primary skill, two matches, or 50% coverage.
    pub fn fast_track() -> Self {
        Self {
            threshold: 50,
            variant: PolicyVariant::Disjunctive {
                minimum_matched: DEFAULT_MINIMUM_MATCHED,
            },
            tier_mapping: TierMapping::DecisionGated,
        }
    }

    /// Recruiter dashboard: threshold selection with raw-score tier bands.
    pub fn recruiter_dashboard() -> Self {
        Self {
            threshold: 50,
            variant: PolicyVariant::Threshold,
            tier_mapping: TierMapping::RawScore,
        }
    }

    /// Resolve a named preset, for configuration surfaces.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "threshold_50" => Some(Self::threshold_50()),
            "threshold_60" => Some(Self::threshold_60()),
            "fast_track" => Some(Self::fast_track()),
            "recruiter_dashboard" => Some(Self::recruiter_dashboard()),
            _ => None,
        }
    }

    /// Apply the selection rule. `primary_skill_present` is `None` when the
    /// role defines no primary skill.
    pub fn decide(
        &self,
        skill_match: &SkillMatch,
        primary_skill_present: Option<bool>,
    ) -> PolicyOutcome {
        let score = skill_match.score();
        let mut triggers = Vec::new();

        match self.variant {
            PolicyVariant::Threshold => {
                if score >= self.threshold {
                    triggers.push(SelectionTrigger::ScoreThreshold {
                        score,
                        threshold: self.threshold,
                    });
                }
            }
            PolicyVariant::Disjunctive { minimum_matched } => {
                if primary_skill_present == Some(true) {
                    triggers.push(SelectionTrigger::PrimarySkill);
                }
                if skill_match.matched.len() >= minimum_matched {
                    triggers.push(SelectionTrigger::MinimumMatched {
                        matched: skill_match.matched.len(),
                        minimum: minimum_matched,
                    });
                }
                if score >= self.threshold {
                    triggers.push(SelectionTrigger::ScoreThreshold {
                        score,
                        threshold: self.threshold,
                    });
                }
            }
        }

        let decision = if triggers.is_empty() {
            Decision::Reject
        } else {
            Decision::Select
        };

        PolicyOutcome {
            score,
            decision,
            triggers,
            fit_tier: self.fit_tier(score, decision),
        }
    }

    pub fn fit_tier(&self, score: u8, decision: Decision) -> FitTier {
        match self.tier_mapping {
            TierMapping::DecisionGated => {
                if !decision.is_select() {
                    FitTier::Low
                } else if score >= HIGH_FIT_CUTOFF {
                    FitTier::High
                } else {
                    FitTier::Moderate
                }
            }
            TierMapping::RawScore => {
                if score >= HIGH_FIT_CUTOFF {
                    FitTier::High
                } else if score >= MODERATE_FIT_CUTOFF {
                    FitTier::Moderate
                } else {
                    FitTier::Low
                }
            }
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::threshold_50()
    }
}

/// Which condition(s) satisfied the selection rule, so the explanation layer
/// can narrate the decision without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTrigger {
    PrimarySkill,
    MinimumMatched { matched: usize, minimum: usize },
    ScoreThreshold { score: u8, threshold: u8 },
}

/// Score, decision, triggers, and tier for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyOutcome {
    pub score: u8,
    pub decision: Decision,
    pub triggers: Vec<SelectionTrigger>,
    pub fit_tier: FitTier,
}
