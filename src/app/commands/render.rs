//! Render command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, HostFormat, ManifestBuilder, ProjectConfig, ProjectValues};

/// Serialization format for the rendered manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML document, the form `kubectl apply -f -` expects.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// CLI-facing name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }

    /// Parse an output format from its CLI-facing name.
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "yaml" => Some(OutputFormat::Yaml),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options for a single render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Values file supplying `project`/`baseDomain` keys.
    pub values_file: Option<PathBuf>,
    /// `key=value` override pairs, applied after the values file.
    pub set: Vec<String>,
    /// Ingress host format.
    pub host_format: HostFormat,
    /// Serialization format.
    pub format: OutputFormat,
}

/// Load values, validate, build, and serialize the manifest.
///
/// The manifest is rendered fully in memory; callers decide where the bytes
/// go, so a failed render never leaves a partial file behind.
pub fn execute(options: &RenderOptions) -> Result<String, AppError> {
    let mut values = match &options.values_file {
        Some(path) => ProjectValues::from_file(path)?,
        None => ProjectValues::default(),
    };
    for pair in &options.set {
        values.set(pair)?;
    }

    let config = ProjectConfig::validate(&values)?;
    let manifest = ManifestBuilder::new(config).with_host_format(options.host_format).build();

    match options.format {
        OutputFormat::Yaml => manifest.to_yaml(),
        OutputFormat::Json => manifest.to_json(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn execute_renders_from_set_pairs_alone() {
        let options = RenderOptions {
            set: vec!["project=acme".to_string(), "baseDomain=example.com".to_string()],
            ..RenderOptions::default()
        };

        let rendered = execute(&options).unwrap();
        assert!(rendered.contains("host: podinfo.acme.example.com"));
    }

    #[test]
    fn execute_applies_set_pairs_over_the_values_file() {
        let dir = tempdir().unwrap();
        let values_path = dir.path().join("values.yaml");
        fs::write(&values_path, "project: acme\nbaseDomain: example.com\n").unwrap();

        let options = RenderOptions {
            values_file: Some(values_path),
            set: vec!["project=umbrella".to_string()],
            ..RenderOptions::default()
        };

        let rendered = execute(&options).unwrap();
        assert!(rendered.contains("host: podinfo.umbrella.example.com"));
    }

    #[test]
    fn execute_fails_without_a_project() {
        let err = execute(&RenderOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField { field: "project" }));
    }

    #[test]
    fn execute_renders_json_when_selected() {
        let options = RenderOptions {
            set: vec!["project=acme".to_string()],
            format: OutputFormat::Json,
            ..RenderOptions::default()
        };

        let rendered = execute(&options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["kind"], "Application");
    }

    #[test]
    fn output_format_names_roundtrip() {
        for format in [OutputFormat::Yaml, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_name(format.name()), Some(format));
        }
        assert_eq!(OutputFormat::from_name("xml"), None);
    }
}
