use std::path::PathBuf;

use clap::Args;
use resume_screen::error::AppError;
use resume_screen::screening::{CandidateSubmission, RoleCatalog, ScreeningEngine};

use crate::infra::resolve_policy;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Target role, e.g. "Python Developer" (see the roles command)
    #[arg(long)]
    pub(crate) role: String,
    /// Resume text supplied inline
    #[arg(long, conflicts_with = "resume_file")]
    pub(crate) text: Option<String>,
    /// Path to a plain-text resume file
    #[arg(long)]
    pub(crate) resume_file: Option<PathBuf>,
    /// Comma-separated skills, as entered on the portal form
    #[arg(long, default_value = "")]
    pub(crate) skills: String,
    /// Education summary
    #[arg(long, default_value = "")]
    pub(crate) education: String,
    /// Certifications summary
    #[arg(long, default_value = "")]
    pub(crate) certifications: String,
    /// Years of experience
    #[arg(long)]
    pub(crate) experience_years: Option<u8>,
    /// Decision policy preset (threshold_50, threshold_60, fast_track,
    /// recruiter_dashboard)
    #[arg(long, default_value = "threshold_50")]
    pub(crate) policy: String,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        role,
        text,
        resume_file,
        skills,
        education,
        certifications,
        experience_years,
        policy,
    } = args;

    let resume_text = match (text, resume_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let submission = CandidateSubmission {
        candidate_name: String::new(),
        role,
        resume_text,
        skills,
        education,
        certifications,
        experience_years,
    };

    let policy = resolve_policy(&policy)?;
    let engine = ScreeningEngine::rule_based(RoleCatalog::builtin(), policy);

    match engine.evaluate(&submission.role, &submission.normalized_text()) {
        Ok(result) => {
            println!("Role:        {}", result.role);
            println!("Score:       {}%", result.score);
            println!("Decision:    {}", result.decision.label());
            println!(
                "Fit tier:    {} ({})",
                result.fit_tier.label(),
                result.fit_tier.recommendation()
            );
            if !result.matched_skills.is_empty() {
                println!("Matched:     {}", result.matched_skills.join(", "));
            }
            if !result.missing_skills.is_empty() {
                println!("Missing:     {}", result.missing_skills.join(", "));
            }
            println!("Reason:      {}", result.reason);
            println!("Improvement: {}", result.improvement);
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run the roles command to list the available roles.");
            std::process::exit(2);
        }
    }

    Ok(())
}

pub(crate) fn run_roles() -> Result<(), AppError> {
    let catalog = RoleCatalog::builtin();

    for profile in catalog.roles() {
        println!("{}", profile.role_name);
        println!("  required: {}", profile.required_skills.join(", "));
        if let Some(primary) = &profile.primary_skill {
            println!("  primary:  {primary}");
        }
    }

    Ok(())
}
