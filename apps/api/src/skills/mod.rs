//! Skill comparison core: normalization, role catalog, gap analysis and match scoring,
//! plus the catalog read endpoints.

pub mod catalog;
pub mod gap_analysis;
pub mod handlers;
pub mod match_score;
pub mod normalizer;
