//! Keyword → text tables for daily activities and learning resources.
//!
//! Each table is scanned in order against the lower-cased skill name and the
//! first entry with a matching substring wins. Order matters: "javascript"
//! contains "java" and "postgresql" contains "sql", so reordering changes output.

use crate::roadmap::builder::Level;

/// One row of a keyword table: any of `keywords` selects this row.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTemplate {
    pub keywords: &'static [&'static str],
    pub beginner: &'static str,
    pub intermediate: &'static str,
}

impl KeywordTemplate {
    fn matches(&self, skill_lower: &str) -> bool {
        self.keywords.iter().any(|k| skill_lower.contains(k))
    }

    fn for_level(&self, level: Level) -> &'static str {
        match level {
            Level::Beginner => self.beginner,
            Level::Intermediate => self.intermediate,
        }
    }
}

pub const ACTIVITY_TEMPLATES: &[KeywordTemplate] = &[
    KeywordTemplate {
        keywords: &["python"],
        beginner: "Learn Python basics: variables, loops, functions, lists",
        intermediate: "Build Python project: web scraper or automation tool",
    },
    KeywordTemplate {
        keywords: &["java"],
        beginner: "Study Java fundamentals: OOP, classes, methods",
        intermediate: "Create Java application with design patterns",
    },
    KeywordTemplate {
        keywords: &["react"],
        beginner: "Learn React basics: components, props, state, JSX",
        intermediate: "Build React app with hooks, routing, and API integration",
    },
    KeywordTemplate {
        keywords: &["sql"],
        beginner: "Practice SQL: SELECT, WHERE, JOIN operations",
        intermediate: "Design database schema and optimize queries",
    },
    KeywordTemplate {
        keywords: &["docker"],
        beginner: "Understand Docker basics: containers, images, dockerfile",
        intermediate: "Containerize app with Docker Compose and multi-stage builds",
    },
    KeywordTemplate {
        keywords: &["git"],
        beginner: "Master Git basics: commit, push, pull, branches",
        intermediate: "Practice advanced Git: merge, rebase, conflict resolution",
    },
    KeywordTemplate {
        keywords: &["spring boot"],
        beginner: "Intro to Spring Boot: annotations, REST controllers",
        intermediate: "Build REST API with Spring Boot and JPA",
    },
    KeywordTemplate {
        keywords: &["tensorflow", "machine learning"],
        beginner: "ML basics: supervised learning, model training",
        intermediate: "Train ML model and deploy it",
    },
    KeywordTemplate {
        keywords: &["node"],
        beginner: "Node.js fundamentals: modules, npm, async/await",
        intermediate: "Build Express.js backend with authentication",
    },
    KeywordTemplate {
        keywords: &["rest api"],
        beginner: "Learn REST API concepts: GET, POST, PUT, DELETE",
        intermediate: "Design and implement RESTful API with best practices",
    },
];

// Not the same order as ACTIVITY_TEMPLATES: "node", "spring boot" and "git" move.
pub const RESOURCE_TEMPLATES: &[KeywordTemplate] = &[
    KeywordTemplate {
        keywords: &["python"],
        beginner: "Python.org",
        intermediate: "Real Python, Python Docs",
    },
    KeywordTemplate {
        keywords: &["java"],
        beginner: "Java Tutorial (Oracle)",
        intermediate: "Effective Java, Spring Guides",
    },
    KeywordTemplate {
        keywords: &["react"],
        beginner: "React.dev Tutorial",
        intermediate: "React Docs, React Patterns",
    },
    KeywordTemplate {
        keywords: &["sql"],
        beginner: "SQLBolt, W3Schools",
        intermediate: "PostgreSQL Docs, SQL Performance",
    },
    KeywordTemplate {
        keywords: &["docker"],
        beginner: "Docker Getting Started",
        intermediate: "Docker Docs, Docker Compose",
    },
    KeywordTemplate {
        keywords: &["node"],
        beginner: "NodeSchool.io",
        intermediate: "Node.js Docs, Express.js Guide",
    },
    KeywordTemplate {
        keywords: &["spring boot"],
        beginner: "Spring.io Guides",
        intermediate: "Spring Boot Reference, Baeldung",
    },
    KeywordTemplate {
        keywords: &["machine learning", "tensorflow"],
        beginner: "Kaggle Learn, TensorFlow Basics",
        intermediate: "TensorFlow Docs, Fast.ai",
    },
    KeywordTemplate {
        keywords: &["git"],
        beginner: "GitHub Skills",
        intermediate: "Pro Git Book, Atlassian Git",
    },
    KeywordTemplate {
        keywords: &["rest api"],
        beginner: "REST API Tutorial",
        intermediate: "RESTful Web Services, API Design",
    },
];

pub const PRACTICE_ACTIVITY: &str = "Complete 2-3 coding exercises related to today's skills";
pub const EMPTY_RESOURCES: &str = "Online tutorials and official docs";

/// First template in `table` whose keywords appear in `skill`.
pub fn lookup(table: &'static [KeywordTemplate], skill: &str) -> Option<&'static KeywordTemplate> {
    let skill_lower = skill.to_lowercase();
    table.iter().find(|t| t.matches(&skill_lower))
}

/// Activity line for one skill at the given level.
pub fn activity_for(skill: &str, level: Level) -> String {
    match lookup(ACTIVITY_TEMPLATES, skill) {
        Some(template) => template.for_level(level).to_string(),
        None => match level {
            Level::Beginner => format!("Study {} fundamentals and core concepts", title_case(skill)),
            Level::Intermediate => format!("Build hands-on project using {}", title_case(skill)),
        },
    }
}

/// Resource string for one skill at the given level.
pub fn resource_for(skill: &str, level: Level) -> String {
    match lookup(RESOURCE_TEMPLATES, skill) {
        Some(template) => template.for_level(level).to_string(),
        None => format!("{} Official Documentation", title_case(skill)),
    }
}

/// All activities for a day's skills, followed by the fixed practice line.
pub fn daily_activities(skills: &[String], level: Level) -> Vec<String> {
    skills
        .iter()
        .map(|s| activity_for(s, level))
        .chain(std::iter::once(PRACTICE_ACTIVITY.to_string()))
        .collect()
}

/// Resources for a day's skills, comma-joined.
pub fn daily_resources(skills: &[String], level: Level) -> String {
    if skills.is_empty() {
        return EMPTY_RESOURCES.to_string();
    }
    skills
        .iter()
        .map(|s| resource_for(s, level))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Word title-casing: a letter is upper-cased when it starts the string or
/// follows a non-letter, otherwise lower-cased ("node.js" → "Node.Js").
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
