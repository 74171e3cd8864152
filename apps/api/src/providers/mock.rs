//! Fixed-record providers. They ignore their input apart from echoing the
//! username, so every analysis sees the same first-year CS student profile.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::models::profile::{
    Education, ResumeProject, ResumeRecord, SkillRecord, TechnicalSkills,
};
use crate::providers::{ResumeDocument, ResumeProvider, SourceControlProvider};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Stand-in for a GitHub profile extractor.
pub struct MockGitHubProvider;

#[async_trait]
impl SourceControlProvider for MockGitHubProvider {
    async fn fetch_skills_for_user(&self, username: &str) -> Result<SkillRecord, AppError> {
        debug!("Mock GitHub lookup for '{username}'");

        let top_languages = [
            ("Java", "35%"),
            ("C", "25%"),
            ("Python", "20%"),
            ("JavaScript", "20%"),
        ]
        .into_iter()
        .map(|(lang, share)| (lang.to_string(), share.to_string()))
        .collect::<BTreeMap<_, _>>();

        Ok(SkillRecord {
            username: username.to_string(),
            repos_count: 8,
            experience_level: "beginner-intermediate".to_string(),
            top_languages,
            skills: strings(&[
                "Java",
                "C",
                "Python",
                "HTML",
                "CSS",
                "Data Structures",
                "Git",
                "Algorithms",
            ]),
            activity_level: "consistent".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "mock-github"
    }
}

/// Stand-in for a resume parser.
pub struct MockResumeParser;

#[async_trait]
impl ResumeProvider for MockResumeParser {
    async fn parse_resume(&self, document: &ResumeDocument) -> Result<ResumeRecord, AppError> {
        debug!(
            "Mock resume parse of {} ({} bytes)",
            document.file_name.as_deref().unwrap_or("<unnamed>"),
            document.content.len()
        );

        Ok(ResumeRecord {
            name: "CS Student".to_string(),
            education: Some(Education {
                degree: "B.Tech Computer Science (AI & ML)".to_string(),
                institution: "Bengaluru Engineering College".to_string(),
                year: "1st Year".to_string(),
                cgpa: Some(8.2),
            }),
            technical_skills: TechnicalSkills {
                languages: strings(&["Java", "C", "Python"]),
                web: strings(&["HTML", "CSS", "Basic JavaScript"]),
                core_cs: strings(&[
                    "Data Structures",
                    "Algorithms",
                    "DBMS",
                    "Operating Systems",
                ]),
                tools: strings(&["Git", "VS Code"]),
            },
            projects: vec![
                ResumeProject {
                    title: "Page Replacement Algorithm Simulator".to_string(),
                    tech: strings(&["Python"]),
                    project_type: "Operating Systems Mini Project".to_string(),
                },
                ResumeProject {
                    title: "Boutique Management DBMS System".to_string(),
                    tech: strings(&["SQL", "ER Diagram", "Oracle/MySQL"]),
                    project_type: "Database Mini Project".to_string(),
                },
                ResumeProject {
                    title: "Career Navigator Hackathon Prototype".to_string(),
                    tech: strings(&["Python", "Streamlit"]),
                    project_type: "Hackathon Project".to_string(),
                },
            ],
            interests: strings(&[
                "AI/ML",
                "Backend Development",
                "Problem Solving",
                "Hackathons",
            ]),
            strengths: strings(&[
                "Quick Learner",
                "Strong Logical Thinking",
                "Team Collaboration",
            ]),
        })
    }

    fn name(&self) -> &'static str {
        "mock-resume"
    }
}
