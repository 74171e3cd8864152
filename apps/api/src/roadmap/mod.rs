// Seven-day learning roadmap: bucketing of missing skills, keyword text tables,
// review-day project ideas and calendar placement.

pub mod builder;
pub mod projects;
pub mod schedule;
pub mod templates;
