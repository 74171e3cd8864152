//! Portfolio project ideas for review days, keyed on skill combinations.

use crate::skills::normalizer::{normalize, SkillSet};

/// A project idea that applies when every skill in `requires` has been covered.
struct ProjectIdea {
    requires: &'static [&'static str],
    idea: &'static str,
}

const PROJECT_IDEAS: &[ProjectIdea] = &[
    ProjectIdea {
        requires: &["java", "spring boot"],
        idea: "Build a Task Management REST API with Spring Boot",
    },
    ProjectIdea {
        requires: &["react", "node"],
        idea: "Create a Full-stack Todo App (MERN stack)",
    },
    ProjectIdea {
        requires: &["python", "sql"],
        idea: "Build a Student Database Management System",
    },
    ProjectIdea {
        requires: &["docker"],
        idea: "Containerize your existing projects with Docker",
    },
    ProjectIdea {
        requires: &["python", "tensorflow"],
        idea: "Train an Image Classification Model",
    },
];

pub const FALLBACK_PROJECT_IDEA: &str = "Build a portfolio project combining your new skills";

/// One idea per matching combination, in table order, or the fallback idea.
///
/// Membership is exact on the normalized name: "node.js" does not satisfy "node".
pub fn generate_project_ideas(learned_skills: &[String]) -> Vec<String> {
    let learned: SkillSet = normalize(learned_skills);

    let ideas: Vec<String> = PROJECT_IDEAS
        .iter()
        .filter(|p| p.requires.iter().all(|s| learned.contains(s)))
        .map(|p| p.idea.to_string())
        .collect();

    if ideas.is_empty() {
        vec![FALLBACK_PROJECT_IDEA.to_string()]
    } else {
        ideas
    }
}
