use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::providers::mock::{MockGitHubProvider, MockResumeParser};
use crate::providers::{ResumeProvider, SourceControlProvider};
use crate::skills::catalog::RoleCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable source-control provider. Default: MockGitHubProvider.
    pub source_control: Arc<dyn SourceControlProvider>,
    /// Pluggable resume parser. Default: MockResumeParser.
    pub resume_parser: Arc<dyn ResumeProvider>,
}

impl AppState {
    /// Loads the role catalog named by `config` and wires the mock providers.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match &config.role_catalog_path {
            Some(path) => RoleCatalog::from_json_file(path, &config.default_role)?,
            None => RoleCatalog::builtin(&config.default_role)?,
        };
        info!(
            "Role catalog ready: {} roles, default '{}'",
            catalog.role_names().len(),
            catalog.default_role()
        );

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            source_control: Arc::new(MockGitHubProvider),
            resume_parser: Arc::new(MockResumeParser),
        })
    }
}
