//! Project configuration validation and default resolution.

use crate::domain::{AppError, ProjectValues};

/// Fallback base domain applied when the values omit `baseDomain`.
pub const DEFAULT_BASE_DOMAIN: &str = "cloud.colenio.dev";

/// A validated project configuration with all defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project: String,
    base_domain: String,
}

impl ProjectConfig {
    /// Validate raw values and resolve defaults.
    ///
    /// `project` must be present and non-empty; an empty string is rejected
    /// the same as an absent key. `baseDomain` falls back to
    /// [`DEFAULT_BASE_DOMAIN`] when absent. Resolution is idempotent:
    /// validating already-resolved values yields the same config.
    pub fn validate(values: &ProjectValues) -> Result<Self, AppError> {
        let project = match values.project.as_deref() {
            Some(project) if !project.is_empty() => project.to_string(),
            _ => return Err(AppError::MissingRequiredField { field: "project" }),
        };

        let base_domain = values
            .base_domain
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_DOMAIN.to_string());

        Ok(Self { project, base_domain })
    }

    /// Project identifier.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Base domain the ingress host is published under.
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }
}
