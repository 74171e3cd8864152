//! Skill providers: the external collaborators that supply raw skills.
//!
//! Both are trait objects held in `AppState` as `Arc<dyn …>`, so a real GitHub
//! client or resume parser can replace the mocks without touching gap or
//! roadmap logic.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;
use crate::models::profile::{ResumeRecord, SkillRecord};
use crate::skills::normalizer::SkillSet;

pub mod mock;

/// An uploaded resume, as received by the HTTP layer.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: Option<String>,
    pub content: Bytes,
}

/// Source-control skill provider: username → skill profile.
#[async_trait]
pub trait SourceControlProvider: Send + Sync {
    async fn fetch_skills_for_user(&self, username: &str) -> Result<SkillRecord, AppError>;

    /// Short label for logs and responses, e.g. "mock-github".
    fn name(&self) -> &'static str;
}

/// Resume skill provider: uploaded document → structured resume.
#[async_trait]
pub trait ResumeProvider: Send + Sync {
    async fn parse_resume(&self, document: &ResumeDocument) -> Result<ResumeRecord, AppError>;

    fn name(&self) -> &'static str;
}

/// Flattens the source-control skills and the four resume skill lists into one
/// normalized pool. Either record may be absent.
pub fn extract_all_skills(
    source_control: Option<&SkillRecord>,
    resume: Option<&ResumeRecord>,
) -> SkillSet {
    let mut pool = SkillSet::new();

    if let Some(record) = source_control {
        pool.extend(&record.skills);
    }
    if let Some(record) = resume {
        pool.extend(record.technical_skills.all());
    }

    pool
}
