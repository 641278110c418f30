use super::domain::Decision;
use super::matcher::SkillMatch;
use super::policy::SelectionTrigger;

/// Missing skills beyond this count are summarized rather than listed, to
/// keep the improvement message actionable.
const MAX_SUGGESTED_SKILLS: usize = 3;

/// Human-readable narration of an evaluation. Pure formatting; every fact in
/// here was decided upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub reason: String,
    pub improvement: String,
}

pub fn narrate(
    decision: Decision,
    triggers: &[SelectionTrigger],
    skill_match: &SkillMatch,
) -> Explanation {
    match decision {
        Decision::Select => Explanation {
            reason: select_reason(triggers),
            improvement: "no action needed".to_string(),
        },
        Decision::Reject => Explanation {
            reason: format!(
                "insufficient skill coverage: matched {} of {} required skills",
                skill_match.matched.len(),
                skill_match.required_count()
            ),
            improvement: improvement_hint(&skill_match.missing),
        },
    }
}

fn select_reason(triggers: &[SelectionTrigger]) -> String {
    if triggers.is_empty() {
        return "selected".to_string();
    }

    let phrases: Vec<String> = triggers
        .iter()
        .map(|trigger| match trigger {
            SelectionTrigger::PrimarySkill => "primary skill detected".to_string(),
            SelectionTrigger::MinimumMatched { matched, minimum } => {
                format!("{matched} skills matched (minimum {minimum})")
            }
            SelectionTrigger::ScoreThreshold { score, threshold } => {
                format!("score {score}% at or above threshold {threshold}%")
            }
        })
        .collect();

    format!("selected: {}", phrases.join("; "))
}

fn improvement_hint(missing: &[String]) -> String {
    if missing.is_empty() {
        return "no missing skills detected".to_string();
    }

    let listed: Vec<&str> = missing
        .iter()
        .take(MAX_SUGGESTED_SKILLS)
        .map(String::as_str)
        .collect();
    let remainder = missing.len().saturating_sub(MAX_SUGGESTED_SKILLS);

    if remainder == 0 {
        format!("add the missing skills to your resume: {}", listed.join(", "))
    } else {
        format!(
            "add the missing skills to your resume: {} (and {} more)",
            listed.join(", "),
            remainder
        )
    }
}
