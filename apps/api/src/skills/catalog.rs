//! Role Catalog — static lookup of role name → required / nice-to-have skills.
//!
//! The built-in catalog covers five entry-level roles. A JSON file with the same
//! shape can replace it at startup (`ROLE_CATALOG_PATH`).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::skills::normalizer::{normalize, SkillSet};

pub const DEFAULT_ROLE: &str = "Software Engineer";

/// Requirements for one role. Skill sets are normalized on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirements {
    pub role: String,
    pub required: SkillSet,
    pub nice_to_have: SkillSet,
    pub experience: String,
}

impl RoleRequirements {
    pub fn new<R, N, S>(role: &str, required: R, nice_to_have: N, experience: &str) -> Self
    where
        R: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            role: role.to_string(),
            required: normalize(required),
            nice_to_have: normalize(nice_to_have),
            experience: experience.to_string(),
        }
    }
}

/// Catalog file entry: `{ "required_skills": [..], "nice_to_have": [..], "experience": ".." }`.
#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(default)]
    nice_to_have: Vec<String>,
    #[serde(default = "default_experience")]
    experience: String,
}

fn default_experience() -> String {
    "0-2 years".to_string()
}

/// Immutable role catalog with a fallback role for unknown lookups.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: BTreeMap<String, RoleRequirements>,
    default_role: String,
}

impl RoleCatalog {
    /// Builds a catalog from role entries. Fails if `default_role` is not among them.
    pub fn new(roles: Vec<RoleRequirements>, default_role: &str) -> Result<Self> {
        let roles: BTreeMap<String, RoleRequirements> = roles
            .into_iter()
            .map(|r| (r.role.clone(), r))
            .collect();

        if !roles.contains_key(default_role) {
            bail!("Default role '{default_role}' is not present in the role catalog");
        }

        Ok(Self {
            roles,
            default_role: default_role.to_string(),
        })
    }

    /// The catalog shipped with the service.
    pub fn builtin(default_role: &str) -> Result<Self> {
        Self::new(builtin_roles(), default_role)
    }

    /// Loads a catalog from a JSON file keyed by role name.
    pub fn from_json_file(path: &Path, default_role: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role catalog at {}", path.display()))?;
        let entries: BTreeMap<String, CatalogFileEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Role catalog at {} is not valid JSON", path.display()))?;

        let roles = entries
            .into_iter()
            .map(|(role, entry)| {
                RoleRequirements::new(
                    &role,
                    entry.required_skills,
                    entry.nice_to_have,
                    &entry.experience,
                )
            })
            .collect::<Vec<_>>();

        info!("Loaded {} roles from {}", roles.len(), path.display());
        Self::new(roles, default_role)
    }

    /// Returns requirements for `role`, falling back to the default role when unknown.
    pub fn requirements_for(&self, role: &str) -> &RoleRequirements {
        match self.roles.get(role.trim()) {
            Some(requirements) => requirements,
            None => {
                warn!(
                    "Unknown role '{role}', falling back to '{}'",
                    self.default_role
                );
                self.default_requirements()
            }
        }
    }

    pub fn default_requirements(&self) -> &RoleRequirements {
        // Presence is checked in `new`; the catalog is never mutated afterwards.
        &self.roles[&self.default_role]
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role.trim())
    }

    pub fn role_names(&self) -> Vec<String> {
        self.roles.keys().cloned().collect()
    }
}

fn builtin_roles() -> Vec<RoleRequirements> {
    vec![
        RoleRequirements::new(
            "Software Engineer",
            [
                "Java",
                "Python",
                "React",
                "Docker",
                "SQL",
                "Git",
                "REST APIs",
                "Data Structures",
                "Algorithms",
                "Communication",
            ],
            ["Spring Boot", "Microservices", "AWS", "CI/CD"],
            "0-2 years",
        ),
        RoleRequirements::new(
            "Data Scientist",
            [
                "Python",
                "Pandas",
                "NumPy",
                "Machine Learning",
                "SQL",
                "Statistics",
                "Data Visualization",
                "Jupyter",
                "TensorFlow",
                "Communication",
            ],
            ["Deep Learning", "NLP", "Big Data", "Spark"],
            "0-2 years",
        ),
        RoleRequirements::new(
            "Fullstack Developer",
            [
                "React",
                "Node.js",
                "JavaScript",
                "MongoDB",
                "Express.js",
                "Git",
                "REST APIs",
                "HTML",
                "CSS",
                "Docker",
            ],
            ["TypeScript", "GraphQL", "AWS", "Next.js"],
            "0-2 years",
        ),
        RoleRequirements::new(
            "Backend Developer",
            [
                "Java",
                "Spring Boot",
                "SQL",
                "Git",
                "Data Structures",
                "REST APIs",
                "Microservices",
            ],
            ["Docker", "Kubernetes", "Redis", "PostgreSQL"],
            "0-2 years",
        ),
        RoleRequirements::new(
            "AI Engineer",
            [
                "Python",
                "TensorFlow",
                "Statistics",
                "Machine Learning",
                "Deep Learning",
                "PyTorch",
                "NumPy",
            ],
            ["MLOps", "Computer Vision", "NLP", "Model Deployment"],
            "0-2 years",
        ),
    ]
}
