//! Career analysis — orchestrates one full analysis run.
//!
//! Flow: source-control provider → resume provider (optional) → skill pool →
//!       role lookup → gap analysis → match score → roadmap → schedule.
//!
//! The result is an immutable `CareerAnalysis` handed back to the caller;
//! nothing is cached between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ResumeRecord, SkillRecord};
use crate::providers::{
    extract_all_skills, ResumeDocument, ResumeProvider, SourceControlProvider,
};
use crate::roadmap::builder::{build_roadmap, Level, Roadmap};
use crate::roadmap::schedule::{schedule_days, ScheduledDay};
use crate::skills::catalog::{RoleCatalog, RoleRequirements};
use crate::skills::gap_analysis::{analyze_gaps, GapReport};
use crate::skills::match_score::{score, MatchScore};
use crate::skills::normalizer::SkillSet;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Validated analysis parameters. Built by the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub github_username: String,
    pub role: String,
    /// 1 – 4
    pub hours_per_day: u8,
    pub level: Level,
}

/// What the providers returned for this user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub source_control: SkillRecord,
    pub resume: Option<ResumeRecord>,
    pub providers: Vec<String>,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub requested_role: String,
    /// True when `requested_role` was unknown and the default role was used.
    pub role_fallback: bool,
    pub profile: Profile,
    pub current_skills: SkillSet,
    pub requirements: RoleRequirements,
    pub gaps: GapReport,
    pub score: MatchScore,
    pub roadmap: Roadmap,
    pub schedule: Vec<ScheduledDay>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the provider calls, then the pure analysis.
pub async fn run_analysis(
    source_control: &dyn SourceControlProvider,
    resume_parser: &dyn ResumeProvider,
    catalog: &RoleCatalog,
    input: &AnalysisInput,
    resume: Option<&ResumeDocument>,
) -> Result<CareerAnalysis, AppError> {
    let skill_record = source_control
        .fetch_skills_for_user(&input.github_username)
        .await?;

    let mut providers = vec![source_control.name().to_string()];

    let resume_record = match resume {
        Some(document) => {
            providers.push(resume_parser.name().to_string());
            Some(resume_parser.parse_resume(document).await?)
        }
        None => None,
    };

    let profile = Profile {
        source_control: skill_record,
        resume: resume_record,
        providers,
    };

    let analysis = assemble_analysis(profile, catalog, input, Utc::now());

    info!(
        "Analysis {} for '{}': role='{}' match={}% gaps={} days={}",
        analysis.analysis_id,
        input.github_username,
        analysis.requirements.role,
        analysis.score.percentage,
        analysis.gaps.gap_count,
        analysis.roadmap.days().len()
    );
    match analysis.roadmap.message() {
        Some(message) => debug!("Roadmap complete: {message}"),
        None => {
            for day in analysis.roadmap.days() {
                debug!(
                    "Day {}: {} ({} skills, review={})",
                    day.day(),
                    day.focus(),
                    day.skills().len(),
                    day.is_review_day()
                );
            }
        }
    }

    Ok(analysis)
}

/// Pure part of the pipeline: everything after the providers have answered.
pub fn assemble_analysis(
    profile: Profile,
    catalog: &RoleCatalog,
    input: &AnalysisInput,
    generated_at: DateTime<Utc>,
) -> CareerAnalysis {
    let current_skills =
        extract_all_skills(Some(&profile.source_control), profile.resume.as_ref());

    let requirements = catalog.requirements_for(&input.role).clone();
    let gaps = analyze_gaps(&current_skills, &requirements);
    let score = score(&current_skills, &requirements);
    let roadmap = build_roadmap(&gaps, input.hours_per_day, input.level);
    let schedule = schedule_days(roadmap.days(), generated_at.date_naive());

    CareerAnalysis {
        analysis_id: Uuid::new_v4(),
        generated_at,
        requested_role: input.role.clone(),
        role_fallback: !catalog.contains(&input.role),
        profile,
        current_skills,
        requirements,
        gaps,
        score,
        roadmap,
        schedule,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use chrono::TimeZone;

    use crate::providers::mock::{MockGitHubProvider, MockResumeParser};
    use crate::skills::catalog::DEFAULT_ROLE;

    fn input(role: &str, hours: u8, level: Level) -> AnalysisInput {
        AnalysisInput {
            github_username: "student".to_string(),
            role: role.to_string(),
            hours_per_day: hours,
            level,
        }
    }

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin(DEFAULT_ROLE).unwrap()
    }

    struct UnreachableGitHub;

    #[async_trait]
    impl SourceControlProvider for UnreachableGitHub {
        async fn fetch_skills_for_user(&self, _username: &str) -> Result<SkillRecord, AppError> {
            Err(AppError::Provider("connection refused".to_string()))
        }

        fn name(&self) -> &'static str {
            "unreachable"
        }
    }

    #[tokio::test]
    async fn test_backend_developer_without_resume() {
        let analysis = run_analysis(
            &MockGitHubProvider,
            &MockResumeParser,
            &catalog(),
            &input("Backend Developer", 2, Level::Beginner),
            None,
        )
        .await
        .unwrap();

        // GitHub mock: java, c, python, html, css, data structures, git, algorithms
        assert_eq!(
            analysis.gaps.missing_required.to_vec(),
            vec!["microservices", "rest apis", "spring boot", "sql"]
        );
        assert_eq!(
            analysis.gaps.matched.to_vec(),
            vec!["data structures", "git", "java"]
        );
        // 3 of 7 → 42.857… → 42.9
        assert_eq!(analysis.score.percentage, 42.9);
        assert!(!analysis.role_fallback);
        assert!(analysis.profile.resume.is_none());
        assert_eq!(analysis.profile.providers, vec!["mock-github"]);
        assert_eq!(analysis.roadmap.days().len(), 7);
        assert_eq!(analysis.schedule.len(), 7);
    }

    #[tokio::test]
    async fn test_resume_skills_join_the_pool() {
        let resume = ResumeDocument {
            file_name: Some("cv.pdf".to_string()),
            content: Bytes::from_static(b"%PDF"),
        };
        let analysis = run_analysis(
            &MockGitHubProvider,
            &MockResumeParser,
            &catalog(),
            &input("Software Engineer", 3, Level::Intermediate),
            Some(&resume),
        )
        .await
        .unwrap();

        assert!(analysis.current_skills.contains("vs code"));
        assert!(analysis.current_skills.contains("basic javascript"));
        assert_eq!(analysis.profile.providers, vec!["mock-github", "mock-resume"]);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let result = run_analysis(
            &UnreachableGitHub,
            &MockResumeParser,
            &catalog(),
            &input("Backend Developer", 2, Level::Beginner),
            None,
        )
        .await;
        assert!(matches!(result, Err(AppError::Provider(_))));
    }

    #[tokio::test]
    async fn test_unknown_role_uses_default_and_flags_it() {
        let analysis = run_analysis(
            &MockGitHubProvider,
            &MockResumeParser,
            &catalog(),
            &input("Astronaut", 2, Level::Beginner),
            None,
        )
        .await
        .unwrap();
        assert!(analysis.role_fallback);
        assert_eq!(analysis.requested_role, "Astronaut");
        assert_eq!(analysis.requirements.role, "Software Engineer");
    }

    #[test]
    fn test_assemble_is_consistent_with_components() {
        let profile = Profile {
            source_control: SkillRecord {
                username: "x".to_string(),
                repos_count: 0,
                experience_level: String::new(),
                top_languages: Default::default(),
                skills: vec!["Python".to_string(), "SQL".to_string()],
                activity_level: String::new(),
            },
            resume: None,
            providers: vec![],
        };
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let analysis = assemble_analysis(
            profile,
            &catalog(),
            &input("AI Engineer", 4, Level::Beginner),
            at,
        );

        assert_eq!(analysis.gaps.match_count, analysis.score.matching_count);
        assert_eq!(analysis.gaps.gap_count, analysis.score.gap_count);
        assert_eq!(analysis.generated_at, at);
        assert_eq!(analysis.schedule[0].weekday, "Saturday");
    }

    #[test]
    fn test_all_skills_present_gives_complete_roadmap() {
        let profile = Profile {
            source_control: SkillRecord {
                username: "x".to_string(),
                repos_count: 0,
                experience_level: String::new(),
                top_languages: Default::default(),
                skills: [
                    "Python",
                    "TensorFlow",
                    "Statistics",
                    "Machine Learning",
                    "Deep Learning",
                    "PyTorch",
                    "NumPy",
                    "MLOps",
                    "Computer Vision",
                    "NLP",
                    "Model Deployment",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                activity_level: String::new(),
            },
            resume: None,
            providers: vec![],
        };
        let analysis = assemble_analysis(
            profile,
            &catalog(),
            &input("AI Engineer", 2, Level::Beginner),
            Utc::now(),
        );
        assert_eq!(analysis.score.percentage, 100.0);
        assert!(analysis.roadmap.days().is_empty());
        assert!(analysis.roadmap.message().is_some());
        assert!(analysis.schedule.is_empty());
    }
}
