use std::fmt;

use crate::domain::ProjectConfig;

/// Naming scheme for the derived ingress host.
///
/// Two historical schemes exist for the same logical hostname; both are kept
/// as named, selectable formats so existing consumers of either form keep
/// resolving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostFormat {
    /// `<app>.<project>.<baseDomain>`: one hostname per project.
    #[default]
    PerProject,
    /// `<app>.<baseDomain>`: single-tenant clusters where the base domain
    /// is already scoped to the project.
    Shared,
}

impl HostFormat {
    /// All available host formats.
    pub const ALL: [HostFormat; 2] = [HostFormat::PerProject, HostFormat::Shared];

    /// CLI-facing name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            HostFormat::PerProject => "per-project",
            HostFormat::Shared => "shared",
        }
    }

    /// Parse a host format from its CLI-facing name.
    pub fn from_name(name: &str) -> Option<HostFormat> {
        match name {
            "per-project" => Some(HostFormat::PerProject),
            "shared" => Some(HostFormat::Shared),
            _ => None,
        }
    }
}

impl fmt::Display for HostFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Derive the ingress host for an application under a config.
///
/// Segments are joined with `.`; empty segments and stray separators are
/// dropped, so the result never carries leading/trailing dots or doubled
/// dots.
pub fn ingress_host(app: &str, config: &ProjectConfig, format: HostFormat) -> String {
    let segments: &[&str] = match format {
        HostFormat::PerProject => &[app, config.project(), config.base_domain()],
        HostFormat::Shared => &[app, config.base_domain()],
    };

    segments
        .iter()
        .flat_map(|segment| segment.split('.'))
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
