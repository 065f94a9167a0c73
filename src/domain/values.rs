//! Raw per-project values as supplied by the caller.
//!
//! Values arrive from a YAML or TOML values file, from repeated `--set`
//! pairs, or both. Nothing here is validated beyond being string-typed;
//! required-field checks happen in [`crate::domain::ProjectConfig`].

use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Values key naming the project identifier.
pub const KEY_PROJECT: &str = "project";
/// Values key naming the base domain.
pub const KEY_BASE_DOMAIN: &str = "baseDomain";

/// Raw, possibly partial values for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectValues {
    /// Project identifier, if supplied.
    pub project: Option<String>,
    /// Base domain, if supplied.
    pub base_domain: Option<String>,
}

impl ProjectValues {
    /// Load values from a file, dispatching on its extension.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match extension {
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?),
            "toml" => Self::from_toml_str(&fs::read_to_string(path)?),
            _ => Err(AppError::UnsupportedValuesFormat(path.display().to_string())),
        }
    }

    /// Parse values from a YAML document.
    ///
    /// The top level must be a mapping (or empty); recognized keys must be
    /// strings.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
            AppError::ParseError { what: "values YAML".to_string(), details: e.to_string() }
        })?;

        match value {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(mapping) => {
                let mut values = Self::default();
                for (key, entry) in mapping {
                    let Some(key) = key.as_str() else {
                        return Err(AppError::ParseError {
                            what: "values YAML".to_string(),
                            details: "expected string keys at the top level".to_string(),
                        });
                    };
                    match key {
                        KEY_PROJECT => values.project = Some(yaml_string(key, entry)?),
                        KEY_BASE_DOMAIN => values.base_domain = Some(yaml_string(key, entry)?),
                        other => return Err(AppError::UnknownField(other.to_string())),
                    }
                }
                Ok(values)
            }
            other => Err(AppError::ParseError {
                what: "values YAML".to_string(),
                details: format!("expected a mapping at the top level, got {}", yaml_type_name(&other)),
            }),
        }
    }

    /// Parse values from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let table: toml::Table = toml::from_str(content)?;

        let mut values = Self::default();
        for (key, entry) in table {
            match key.as_str() {
                KEY_PROJECT => values.project = Some(toml_string(&key, entry)?),
                KEY_BASE_DOMAIN => values.base_domain = Some(toml_string(&key, entry)?),
                _ => return Err(AppError::UnknownField(key)),
            }
        }
        Ok(values)
    }

    /// Apply a single `key=value` override pair.
    pub fn set(&mut self, pair: &str) -> Result<(), AppError> {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(AppError::InvalidSetArgument(pair.to_string()));
        };
        match key {
            KEY_PROJECT => self.project = Some(value.to_string()),
            KEY_BASE_DOMAIN => self.base_domain = Some(value.to_string()),
            other => return Err(AppError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Merge `overrides` over `self`; keys present in `overrides` win.
    pub fn merged(self, overrides: ProjectValues) -> ProjectValues {
        ProjectValues {
            project: overrides.project.or(self.project),
            base_domain: overrides.base_domain.or(self.base_domain),
        }
    }
}

fn yaml_string(field: &str, value: serde_yaml::Value) -> Result<String, AppError> {
    match value {
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(AppError::TypeMismatch {
            field: field.to_string(),
            found: yaml_type_name(&other),
        }),
    }
}

fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

fn toml_string(field: &str, value: toml::Value) -> Result<String, AppError> {
    match value {
        toml::Value::String(s) => Ok(s),
        other => {
            Err(AppError::TypeMismatch { field: field.to_string(), found: other.type_str() })
        }
    }
}
