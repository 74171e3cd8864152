//! Roadmap Builder — buckets prioritized missing skills into a seven-day plan.
//!
//! Algorithm:
//! 1. priority = missing_required ++ missing_nice_to_have
//! 2. empty priority → congratulatory roadmap with no days
//! 3. skills_per_day = max(1, n / 5) at ≥3 hours/day, else max(1, n / 7)
//! 4. day d covers priority[(d-1)*spd .. min(d*spd, n)]; a day whose start is
//!    past the end becomes a review day
//!
//! Skills past day 7 are not scheduled: with n = 13 and 2 hours/day only the
//! first seven get a day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roadmap::projects::generate_project_ideas;
use crate::roadmap::templates::{daily_activities, daily_resources, title_case};
use crate::skills::gap_analysis::GapReport;

pub const ROADMAP_DAYS: u8 = 7;

pub const NO_GAPS_MESSAGE: &str = "Congratulations! You have all required skills!";
pub const NO_GAPS_SUGGESTION: &str = "Consider learning the nice-to-have skills to stand out!";

pub const REVIEW_FOCUS: &str = "Review & Build Project";
pub const REVIEW_RESOURCES: &str = "LeetCode, HackerRank, GitHub, Portfolio Templates";
pub const REVIEW_ACTIVITIES: &[&str] = &[
    "Review all learned skills from the week",
    "Build a portfolio project combining multiple skills",
    "Practice coding challenges on LeetCode/HackerRank",
    "Update your resume and GitHub with new skills",
];

/// Learner level. Selects tutorial-style (Beginner) or project-style (Intermediate) text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown level '{0}'; expected Beginner or Intermediate")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => f.write_str("Beginner"),
            Level::Intermediate => f.write_str("Intermediate"),
        }
    }
}

impl Level {
    pub fn recommended_platform(self) -> &'static str {
        match self {
            Level::Beginner => "freeCodeCamp, Codecademy, W3Schools",
            Level::Intermediate => "Udemy, Coursera, Official Documentation",
        }
    }

    pub fn learning_approach(self) -> &'static str {
        match self {
            Level::Beginner => "Foundational tutorials and guided projects",
            Level::Intermediate => "Advanced courses and real-world projects",
        }
    }
}

/// A day that introduces new skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDay {
    pub day: u8,
    pub is_review_day: bool,
    pub focus: String,
    pub skills: Vec<String>,
    pub activities: Vec<String>,
    pub resources: String,
    pub hours: u8,
    pub checkpoint: String,
}

/// A consolidation day once every priority skill has been scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDay {
    pub day: u8,
    pub is_review_day: bool,
    pub focus: String,
    /// Always empty; present so every day carries the same keys.
    pub skills: Vec<String>,
    pub activities: Vec<String>,
    pub resources: String,
    pub hours: u8,
    pub project_ideas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayPlan {
    Content(ContentDay),
    Review(ReviewDay),
}

impl DayPlan {
    pub fn day(&self) -> u8 {
        match self {
            DayPlan::Content(d) => d.day,
            DayPlan::Review(d) => d.day,
        }
    }

    pub fn is_review_day(&self) -> bool {
        match self {
            DayPlan::Content(d) => d.is_review_day,
            DayPlan::Review(d) => d.is_review_day,
        }
    }

    pub fn skills(&self) -> &[String] {
        match self {
            DayPlan::Content(d) => &d.skills,
            DayPlan::Review(d) => &d.skills,
        }
    }

    pub fn focus(&self) -> &str {
        match self {
            DayPlan::Content(d) => &d.focus,
            DayPlan::Review(d) => &d.focus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub level: Level,
    pub hours_per_day: u8,
    pub total_skills: usize,
    pub required_count: usize,
    pub nice_to_have_count: usize,
    pub recommended_platform: String,
    pub learning_approach: String,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Roadmap {
    /// Nothing left to learn for this role.
    Complete { message: String, suggestion: String },
    Plan(LearningPlan),
}

impl Roadmap {
    pub fn days(&self) -> &[DayPlan] {
        match self {
            Roadmap::Complete { .. } => &[],
            Roadmap::Plan(plan) => &plan.days,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Roadmap::Complete { message, .. } => Some(message),
            Roadmap::Plan(_) => None,
        }
    }
}

/// Skills scheduled per content day for a priority list of `total` skills.
pub fn skills_per_day(total: usize, hours_per_day: u8) -> usize {
    let divisor = if hours_per_day >= 3 { 5 } else { 7 };
    (total / divisor).max(1)
}

/// Builds the seven-day roadmap from a gap report.
///
/// `hours_per_day` and `level` are taken as given; range checks belong to the caller.
pub fn build_roadmap(gaps: &GapReport, hours_per_day: u8, level: Level) -> Roadmap {
    if !gaps.has_gaps() {
        return Roadmap::Complete {
            message: NO_GAPS_MESSAGE.to_string(),
            suggestion: NO_GAPS_SUGGESTION.to_string(),
        };
    }

    let priority = gaps.priority_skills();
    let per_day = skills_per_day(priority.len(), hours_per_day);

    let days = (1..=ROADMAP_DAYS)
        .map(|day| {
            let start = (day as usize - 1) * per_day;
            if start >= priority.len() {
                review_day(day, &priority, hours_per_day)
            } else {
                let end = (start + per_day).min(priority.len());
                content_day(day, &priority[start..end], hours_per_day, level)
            }
        })
        .collect();

    Roadmap::Plan(LearningPlan {
        level,
        hours_per_day,
        total_skills: priority.len(),
        required_count: gaps.missing_required.len(),
        nice_to_have_count: gaps.missing_nice_to_have.len(),
        recommended_platform: level.recommended_platform().to_string(),
        learning_approach: level.learning_approach().to_string(),
        days,
    })
}

fn content_day(day: u8, skills: &[String], hours: u8, level: Level) -> DayPlan {
    let focus = skills
        .iter()
        .map(|s| title_case(s))
        .collect::<Vec<_>>()
        .join(" + ");

    DayPlan::Content(ContentDay {
        day,
        is_review_day: false,
        focus,
        skills: skills.to_vec(),
        activities: daily_activities(skills, level),
        resources: daily_resources(skills, level),
        hours,
        checkpoint: format!("Complete basic {} tutorial", title_case(&skills[0])),
    })
}

fn review_day(day: u8, priority: &[String], hours: u8) -> DayPlan {
    // Every priority skill has been covered by the time a review day comes up.
    DayPlan::Review(ReviewDay {
        day,
        is_review_day: true,
        focus: REVIEW_FOCUS.to_string(),
        skills: Vec::new(),
        activities: REVIEW_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
        resources: REVIEW_RESOURCES.to_string(),
        hours,
        project_ideas: generate_project_ideas(priority),
    })
}
