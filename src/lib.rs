//! argogen: Render Argo CD Application manifests from per-project values.
//!
//! The core is a pure transformation: raw values are validated into a
//! [`ProjectConfig`], the builder derives the ingress host, and the result is
//! a fixed-shape [`ApplicationManifest`] ready for serialization. The CLI in
//! [`app::cli`] wraps this with values-file loading and output handling.

pub mod app;
pub mod domain;

pub use app::commands::render::{OutputFormat, RenderOptions};
pub use domain::{
    AppError, ApplicationManifest, DEFAULT_BASE_DOMAIN, HostFormat, ManifestBuilder,
    ProjectConfig, ProjectValues,
};

/// Validate raw values and build the Application manifest for them.
pub fn render_manifest(
    values: &ProjectValues,
    host_format: HostFormat,
) -> Result<ApplicationManifest, AppError> {
    let config = ProjectConfig::validate(values)?;
    Ok(ManifestBuilder::new(config).with_host_format(host_format).build())
}
