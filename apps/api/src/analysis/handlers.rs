//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::analysis::pipeline::{run_analysis, AnalysisInput, CareerAnalysis};
use crate::errors::AppError;
use crate::providers::ResumeDocument;
use crate::roadmap::builder::Level;
use crate::state::AppState;

pub const MIN_HOURS_PER_DAY: i64 = 1;
pub const MAX_HOURS_PER_DAY: i64 = 4;
const DEFAULT_HOURS_PER_DAY: i64 = 2;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// JSON body for `POST /api/v1/analyze`.
///
/// `github_username`, `hours_per_day` and `level` are kept loose here so missing
/// or out-of-range values get a VALIDATION_ERROR body instead of a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub github_username: String,
    pub role: Option<String>,
    pub hours_per_day: Option<i64>,
    pub level: Option<String>,
    /// Run the resume provider even when no resume text is sent.
    #[serde(default)]
    pub include_resume: bool,
    /// Raw resume content; when present it is passed to the resume provider.
    pub resume_text: Option<String>,
}

impl AnalyzeRequest {
    fn resume_document(&self) -> Option<ResumeDocument> {
        match self.resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(text) => Some(ResumeDocument {
                file_name: None,
                content: Bytes::copy_from_slice(text.as_bytes()),
            }),
            None if self.include_resume => Some(ResumeDocument {
                file_name: None,
                content: Bytes::new(),
            }),
            None => None,
        }
    }
}

/// Checks the raw form values and builds an `AnalysisInput`.
pub fn validate_input(
    github_username: &str,
    role: Option<&str>,
    hours_per_day: Option<i64>,
    level: Option<&str>,
    default_role: &str,
) -> Result<AnalysisInput, AppError> {
    let github_username = github_username.trim();
    if github_username.is_empty() {
        return Err(AppError::Validation(
            "Please enter your GitHub username to continue".to_string(),
        ));
    }

    let hours = hours_per_day.unwrap_or(DEFAULT_HOURS_PER_DAY);
    if !(MIN_HOURS_PER_DAY..=MAX_HOURS_PER_DAY).contains(&hours) {
        return Err(AppError::Validation(format!(
            "hours_per_day must be between {MIN_HOURS_PER_DAY} and {MAX_HOURS_PER_DAY}, got {hours}"
        )));
    }

    let level = match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(raw) => raw
            .parse::<Level>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => Level::default(),
    };

    let role = role
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(default_role)
        .to_string();

    Ok(AnalysisInput {
        github_username: github_username.to_string(),
        role,
        hours_per_day: hours as u8,
        level,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs a full analysis from a JSON body. Resume text is optional.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CareerAnalysis>, AppError> {
    let input = validate_input(
        &request.github_username,
        request.role.as_deref(),
        request.hours_per_day,
        request.level.as_deref(),
        state.catalog.default_role(),
    )?;

    let resume = request.resume_document();

    let analysis = run_analysis(
        state.source_control.as_ref(),
        state.resume_parser.as_ref(),
        &state.catalog,
        &input,
        resume.as_ref(),
    )
    .await?;

    Ok(Json(analysis))
}

/// POST /api/v1/analyze/upload
///
/// Multipart variant: text fields `github_username`, `role`, `hours_per_day`,
/// `level`, and an optional `resume` file part.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CareerAnalysis>, AppError> {
    let mut github_username = String::new();
    let mut role: Option<String> = None;
    let mut hours_per_day: Option<i64> = None;
    let mut level: Option<String> = None;
    let mut resume: Option<ResumeDocument> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "github_username" => github_username = field.text().await?,
            "role" => role = Some(field.text().await?),
            "hours_per_day" => {
                let raw = field.text().await?;
                let parsed = raw.trim().parse::<i64>().map_err(|_| {
                    AppError::Validation(format!("hours_per_day must be a number, got '{raw}'"))
                })?;
                hours_per_day = Some(parsed);
            }
            "level" => level = Some(field.text().await?),
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let content = field.bytes().await?;
                if !content.is_empty() {
                    resume = Some(ResumeDocument { file_name, content });
                }
            }
            other => tracing::debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let input = validate_input(
        &github_username,
        role.as_deref(),
        hours_per_day,
        level.as_deref(),
        state.catalog.default_role(),
    )?;

    let analysis = run_analysis(
        state.source_control.as_ref(),
        state.resume_parser.as_ref(),
        &state.catalog,
        &input,
        resume.as_ref(),
    )
    .await?;

    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "Software Engineer";

    #[test]
    fn test_empty_username_rejected() {
        let err = validate_input("   ", None, None, None, DEFAULT).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("GitHub username")));
    }

    #[test]
    fn test_defaults_applied() {
        let input = validate_input(" octocat ", None, None, None, DEFAULT).unwrap();
        assert_eq!(input.github_username, "octocat");
        assert_eq!(input.role, DEFAULT);
        assert_eq!(input.hours_per_day, 2);
        assert_eq!(input.level, Level::Beginner);
    }

    #[test]
    fn test_hours_out_of_range_rejected() {
        for hours in [0, 5, -1, 300] {
            let result = validate_input("u", None, Some(hours), None, DEFAULT);
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "hours={hours} should be rejected"
            );
        }
        for hours in 1..=4 {
            assert!(validate_input("u", None, Some(hours), None, DEFAULT).is_ok());
        }
    }

    #[test]
    fn test_advanced_level_rejected() {
        let result = validate_input("u", None, None, Some("Advanced"), DEFAULT);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_level_and_role_parsed() {
        let input =
            validate_input("u", Some(" Data Scientist "), Some(4), Some("intermediate"), DEFAULT)
                .unwrap();
        assert_eq!(input.role, "Data Scientist");
        assert_eq!(input.level, Level::Intermediate);
        assert_eq!(input.hours_per_day, 4);
    }

    #[test]
    fn test_blank_role_uses_default() {
        let input = validate_input("u", Some(""), None, Some(""), DEFAULT).unwrap();
        assert_eq!(input.role, DEFAULT);
        assert_eq!(input.level, Level::Beginner);
    }

    fn request(include_resume: bool, resume_text: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            github_username: "u".to_string(),
            role: None,
            hours_per_day: None,
            level: None,
            include_resume,
            resume_text: resume_text.map(str::to_string),
        }
    }

    #[test]
    fn test_resume_document_selection() {
        assert!(request(false, None).resume_document().is_none());
        assert!(request(false, Some("  ")).resume_document().is_none());

        let flagged = request(true, None).resume_document().unwrap();
        assert!(flagged.content.is_empty());

        let text = request(false, Some("Java, SQL")).resume_document().unwrap();
        assert_eq!(&text.content[..], b"Java, SQL");
    }

    #[test]
    fn test_missing_username_deserializes_to_empty() {
        let parsed: AnalyzeRequest = serde_json::from_str(r#"{"role": "AI Engineer"}"#).unwrap();
        assert!(parsed.github_username.is_empty());
        assert!(!parsed.include_resume);
        let err = validate_input(&parsed.github_username, None, None, None, DEFAULT).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("GitHub username")));
    }
}
