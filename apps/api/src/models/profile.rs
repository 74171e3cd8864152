use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Skill profile returned by a source-control provider for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub username: String,
    pub repos_count: u32,
    pub experience_level: String,
    /// Language → share of code, e.g. "Java" → "35%".
    pub top_languages: BTreeMap<String, String>,
    pub skills: Vec<String>,
    pub activity_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub cgpa: Option<f64>,
}

/// Skill lists pulled from a resume. All four feed the combined skill pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub web: Vec<String>,
    #[serde(default)]
    pub core_cs: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl TechnicalSkills {
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.languages
            .iter()
            .chain(&self.web)
            .chain(&self.core_cs)
            .chain(&self.tools)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub title: String,
    pub tech: Vec<String>,
    #[serde(rename = "type")]
    pub project_type: String,
}

/// Structured resume returned by a resume provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub education: Option<Education>,
    pub technical_skills: TechnicalSkills,
    #[serde(default)]
    pub projects: Vec<ResumeProject>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
}
