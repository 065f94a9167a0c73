//! Domain models: values, validation, host derivation, and the manifest.

mod application;
mod config;
mod error;
mod host;
mod values;

pub use application::{
    API_VERSION, APP_NAME, ARGOCD_NAMESPACE, ApplicationManifest, ApplicationSpec, Automated,
    CHART_NAME, CHART_REPO_URL, CHART_TARGET_REVISION, ChartValues, DESTINATION_NAMESPACE,
    DESTINATION_SERVER, Destination, Helm, INGRESS_CLASS_NAME, IngressHost, IngressPath,
    IngressValues, KIND, ManifestBuilder, Metadata, SYNC_OPTIONS, Source, SyncPolicy,
};
pub use config::{DEFAULT_BASE_DOMAIN, ProjectConfig};
pub use error::AppError;
pub use host::{HostFormat, ingress_host};
pub use values::{KEY_BASE_DOMAIN, KEY_PROJECT, ProjectValues};
