use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::TrainingError;

/// One historical screening outcome: combined free text plus the recruiter's
/// recorded decision label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledResume {
    pub text: String,
    pub label: String,
}

impl LabeledResume {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResumeRow {
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(rename = "Education", default)]
    education: String,
    #[serde(rename = "Certifications", default)]
    certifications: String,
    #[serde(rename = "Job Role", default)]
    job_role: String,
    #[serde(rename = "Experience (Years)", default)]
    experience_years: String,
    #[serde(rename = "Recruiter Decision")]
    decision: String,
}

impl ResumeRow {
    fn combined_text(&self) -> String {
        [
            self.skills.as_str(),
            self.education.as_str(),
            self.certifications.as_str(),
            self.job_role.as_str(),
            self.experience_years.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

/// Read the historical screening dataset. Column layout matches the exported
/// recruiter spreadsheet (Skills, Education, Certifications, Job Role,
/// Experience (Years), Recruiter Decision).
pub fn load_corpus<R: Read>(reader: R) -> Result<Vec<LabeledResume>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut corpus = Vec::new();

    for record in csv_reader.deserialize::<ResumeRow>() {
        let row = record?;
        corpus.push(LabeledResume {
            text: row.combined_text(),
            label: row.decision.trim().to_string(),
        });
    }

    Ok(corpus)
}

pub fn load_corpus_from_path(path: &Path) -> Result<Vec<LabeledResume>, TrainingError> {
    let file = File::open(path)?;
    load_corpus(file).map_err(TrainingError::from)
}

/// Tiny inline corpus used when no historical dataset is supplied, so a
/// statistical deployment can still start. Covers both labels by design.
pub fn bootstrap_corpus() -> Vec<LabeledResume> {
    vec![
        LabeledResume::new(
            "python django flask sql rest api unit testing b.tech python developer 4",
            "Hire",
        ),
        LabeledResume::new(
            "java spring boot hibernate sql microservices b.tech java developer 5",
            "Hire",
        ),
        LabeledResume::new(
            "python machine learning scikit-learn pandas numpy statistics m.sc data scientist 3",
            "Hire",
        ),
        LabeledResume::new(
            "html css javascript react bootstrap responsive design b.sc web developer 2",
            "Hire",
        ),
        LabeledResume::new(
            "aws docker kubernetes ci/cd jenkins monitoring b.tech devops engineer 4",
            "Hire",
        ),
        LabeledResume::new("ms office typing data entry b.a clerk 1", "Reject"),
        LabeledResume::new("photoshop video editing b.sc graphic designer 2", "Reject"),
        LabeledResume::new("retail sales customer service mba sales associate 3", "Reject"),
        LabeledResume::new("content writing blogging b.a content writer 1", "Reject"),
        LabeledResume::new("accounting tally excel b.com accountant 2", "Reject"),
    ]
}
