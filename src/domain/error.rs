use std::io;

use thiserror::Error;

/// Library-wide error type for argogen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required values key is absent or empty.
    #[error("Missing required field '{field}'")]
    MissingRequiredField { field: &'static str },

    /// Values key is present but carries the wrong type.
    #[error("Field '{field}' must be a string, got {found}")]
    TypeMismatch { field: String, found: &'static str },

    /// Values key is not part of the recognized set.
    #[error("Unknown field '{0}': recognized fields are 'project' and 'baseDomain'")]
    UnknownField(String),

    /// A --set argument is not in key=value form.
    #[error("Invalid --set argument '{0}': expected key=value")]
    InvalidSetArgument(String),

    /// Values file extension is not recognized.
    #[error("Unsupported values file '{0}': expected a .yaml, .yml, or .toml file")]
    UnsupportedValuesFormat(String),

    /// Host format name is invalid.
    #[error("Invalid host format '{0}': must be one of per-project, shared")]
    InvalidHostFormat(String),

    /// Output format name is invalid.
    #[error("Invalid output format '{0}': must be one of yaml, json")]
    InvalidOutputFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// YAML serialization error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
