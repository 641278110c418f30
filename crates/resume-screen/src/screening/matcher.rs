/// Order-preserving partition of a role's required skills into matched and
/// missing, by substring containment against the normalized candidate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillMatch {
    pub fn required_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Coverage ratio as a 0..=100 integer, floored.
    pub fn score(&self) -> u8 {
        coverage_score(self.matched.len(), self.required_count())
    }
}

/// Test each required skill, in order, for substring containment in the
/// candidate text. Both sides must already be lowercase; the caller owns
/// normalization.
///
/// This is deliberately plain containment, not word-boundary matching: a
/// short token that happens to occur inside unrelated text ("r" inside
/// "for") counts as present. That false-positive risk is an accepted
/// limitation of the original scoring behavior, kept so scores stay
/// comparable with it.
pub fn partition_skills(normalized_text: &str, required_skills: &[String]) -> SkillMatch {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required_skills {
        if normalized_text.contains(skill.as_str()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    SkillMatch { matched, missing }
}

/// `floor(matched / required * 100)`, capped at 100 so a caller passing
/// inconsistent counts cannot truncate through `u8`. A role with no required
/// skills cannot be satisfied meaningfully, so its coverage is zero rather
/// than a division error.
pub fn coverage_score(matched_count: usize, required_count: usize) -> u8 {
    if required_count == 0 {
        return 0;
    }

    (matched_count * 100 / required_count).min(100) as u8
}
