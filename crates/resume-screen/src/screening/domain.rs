use serde::{Deserialize, Serialize};

/// Identifier wrapper for screened submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Candidate-provided inputs for one screening request. Field order inside
/// [`normalized_text`](Self::normalized_text) matters only to the statistical
/// strategy, which is token-frequency sensitive; substring matching ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    #[serde(default)]
    pub candidate_name: String,
    pub role: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub experience_years: Option<u8>,
}

impl CandidateSubmission {
    /// Merge every free-text input into the lowercase text all matching and
    /// classification operates on.
    pub fn normalized_text(&self) -> String {
        let experience = self.experience_years.map(|years| years.to_string());
        let parts = [
            Some(self.resume_text.as_str()),
            Some(self.skills.as_str()),
            Some(self.education.as_str()),
            Some(self.certifications.as_str()),
            experience.as_deref(),
            Some(self.role.as_str()),
        ];

        parts
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// True when no resume content or form fields were supplied at all.
    /// The engine itself tolerates empty text (score degrades to zero); this
    /// exists so callers can re-prompt instead of storing an empty record.
    pub fn is_blank(&self) -> bool {
        self.resume_text.trim().is_empty()
            && self.skills.trim().is_empty()
            && self.education.trim().is_empty()
            && self.certifications.trim().is_empty()
            && self.experience_years.is_none()
    }
}

/// Binary screening outcome. Label text varied across the legacy portals
/// (SELECTED/REJECTED, Hire/Reject); the semantics are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Select,
    Reject,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Select => "selected",
            Decision::Reject => "rejected",
        }
    }

    pub const fn is_select(self) -> bool {
        matches!(self, Decision::Select)
    }
}

/// Qualitative banding of a score for recruiter triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitTier {
    High,
    Moderate,
    Low,
}

impl FitTier {
    pub const fn label(self) -> &'static str {
        match self {
            FitTier::High => "high_fit",
            FitTier::Moderate => "moderate_fit",
            FitTier::Low => "low_fit",
        }
    }

    /// ATS recommendation badge shown on the recruiter dashboard.
    pub const fn recommendation(self) -> &'static str {
        match self {
            FitTier::High => "shortlist",
            FitTier::Moderate => "hold",
            FitTier::Low => "reject",
        }
    }
}

/// Complete screening verdict for one submission against one role. Derived
/// entirely from the submission text and the role profile; never partially
/// populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub role: String,
    pub score: u8,
    pub decision: Decision,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub fit_tier: FitTier,
    pub reason: String,
    pub improvement: String,
}
