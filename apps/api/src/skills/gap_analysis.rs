//! Gap Analyzer — compares a user's skills with a role's requirements.

use serde::{Deserialize, Serialize};

use crate::skills::catalog::RoleRequirements;
use crate::skills::normalizer::SkillSet;

/// Result of comparing current skills against one role. Never mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub missing_required: SkillSet,
    pub missing_nice_to_have: SkillSet,
    pub matched: SkillSet,
    pub gap_count: usize,
    pub match_count: usize,
}

impl GapReport {
    /// Missing required skills followed by missing nice-to-have skills.
    pub fn priority_skills(&self) -> Vec<String> {
        self.missing_required
            .iter()
            .chain(self.missing_nice_to_have.iter())
            .cloned()
            .collect()
    }

    pub fn has_gaps(&self) -> bool {
        !self.missing_required.is_empty() || !self.missing_nice_to_have.is_empty()
    }
}

/// Computes missing-required, missing-nice-to-have and matched skills.
pub fn analyze_gaps(current: &SkillSet, requirements: &RoleRequirements) -> GapReport {
    let missing_required = requirements.required.difference(current);
    let missing_nice_to_have = requirements.nice_to_have.difference(current);
    let matched = current.intersection(&requirements.required);

    GapReport {
        gap_count: missing_required.len(),
        match_count: matched.len(),
        missing_required,
        missing_nice_to_have,
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::normalizer::normalize;

    fn backend_requirements() -> RoleRequirements {
        RoleRequirements::new(
            "Backend Developer",
            ["Java", "Spring Boot", "SQL", "Git", "REST APIs"],
            ["Docker", "Microservices"],
            "0-2 years",
        )
    }

    fn student_skills() -> SkillSet {
        normalize([
            "Java",
            "C",
            "Python",
            "HTML",
            "CSS",
            "Data Structures",
            "Git",
        ])
    }

    #[test]
    fn test_student_against_backend_role() {
        let report = analyze_gaps(&student_skills(), &backend_requirements());

        assert_eq!(
            report.missing_required.to_vec(),
            vec!["rest apis", "spring boot", "sql"]
        );
        assert_eq!(
            report.missing_nice_to_have.to_vec(),
            vec!["docker", "microservices"]
        );
        assert_eq!(report.matched.to_vec(), vec!["git", "java"]);
        assert_eq!(report.gap_count, 3);
        assert_eq!(report.match_count, 2);
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let requirements = backend_requirements();
        let report = analyze_gaps(&student_skills(), &requirements);

        assert!(report.matched.is_disjoint(&report.missing_required));
        assert_eq!(
            report.matched.union(&report.missing_required),
            requirements.required
        );
    }

    #[test]
    fn test_empty_inputs_yield_empty_report() {
        let requirements = RoleRequirements::new("Empty", Vec::<String>::new(), vec![], "");
        let report = analyze_gaps(&SkillSet::new(), &requirements);
        assert_eq!(report, GapReport::default());
        assert!(!report.has_gaps());
    }

    #[test]
    fn test_no_current_skills_means_everything_missing() {
        let requirements = backend_requirements();
        let report = analyze_gaps(&SkillSet::new(), &requirements);
        assert_eq!(report.missing_required, requirements.required);
        assert_eq!(report.missing_nice_to_have, requirements.nice_to_have);
        assert_eq!(report.match_count, 0);
    }

    #[test]
    fn test_priority_skills_put_required_first() {
        let report = analyze_gaps(&student_skills(), &backend_requirements());
        assert_eq!(
            report.priority_skills(),
            vec!["rest apis", "spring boot", "sql", "docker", "microservices"]
        );
    }

    #[test]
    fn test_only_nice_to_have_missing_still_has_gaps() {
        let current = normalize(["java", "spring boot", "sql", "git", "rest apis"]);
        let report = analyze_gaps(&current, &backend_requirements());
        assert_eq!(report.gap_count, 0);
        assert!(report.has_gaps());
    }
}
