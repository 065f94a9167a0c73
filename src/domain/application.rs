//! Argo CD Application manifest model and builder.
//!
//! The manifest shape is a compatibility contract with the Argo CD
//! controller: field names, nesting, and field order are fixed by the struct
//! declarations below, so serialization is byte-identical across invocations
//! for the same config. Only the ingress host varies between renders.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, HostFormat, ProjectConfig, ingress_host};

/// Application short name; also the metadata name and target namespace.
pub const APP_NAME: &str = "podinfo";
/// Helm chart name within the chart repository.
pub const CHART_NAME: &str = "podinfo";
/// Helm chart repository URL.
pub const CHART_REPO_URL: &str = "https://stefanprodan.github.io/podinfo";
/// Pinned chart version.
pub const CHART_TARGET_REVISION: &str = "6.9.0";
/// In-cluster API server address as understood by Argo CD.
pub const DESTINATION_SERVER: &str = "https://kubernetes.default.svc";
/// Namespace the workload is deployed into.
pub const DESTINATION_NAMESPACE: &str = "podinfo";
/// Namespace the Application resource itself lives in.
pub const ARGOCD_NAMESPACE: &str = "argocd";
/// Ingress class published by the cluster's ingress controller.
pub const INGRESS_CLASS_NAME: &str = "nginx";

/// API version of the Application resource.
pub const API_VERSION: &str = "argoproj.io/v1alpha1";
/// Kind of the Application resource.
pub const KIND: &str = "Application";

/// Sync options, in the order the controller documentation lists them.
pub const SYNC_OPTIONS: [&str; 2] = ["CreateNamespace=true", "PruneLast=true"];

/// A rendered Argo CD Application resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: ApplicationSpec,
}

/// Resource metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
}

/// Application spec consumed by the controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    pub sync_policy: SyncPolicy,
    pub source: Source,
    pub destination: Destination,
}

/// Automation rules governing reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncPolicy {
    pub automated: Automated,
    pub sync_options: Vec<String>,
}

/// Automated sync flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Automated {
    pub prune: bool,
    pub self_heal: bool,
}

/// Chart source descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub chart: String,
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    pub target_revision: String,
    pub helm: Helm,
}

/// Helm-specific source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Helm {
    pub values_object: ChartValues,
}

/// Chart values embedded into the Application source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartValues {
    pub ingress: IngressValues,
}

/// Ingress section of the chart values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressValues {
    pub enabled: bool,
    pub class_name: String,
    pub hosts: Vec<IngressHost>,
}

/// A single ingress host entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngressHost {
    pub host: String,
    pub paths: Vec<IngressPath>,
}

/// A single ingress path entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressPath {
    pub path: String,
    pub path_type: String,
}

/// Deployment destination descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub server: String,
    pub namespace: String,
}

impl ApplicationManifest {
    /// Serialize the manifest to YAML.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder assembling an [`ApplicationManifest`] from a validated config.
///
/// Total on a validated config; every derivation is a pure function of
/// fields the validator already guaranteed are present.
#[derive(Debug)]
pub struct ManifestBuilder {
    config: ProjectConfig,
    host_format: HostFormat,
}

impl ManifestBuilder {
    /// Create a builder with the default host format.
    pub fn new(config: ProjectConfig) -> Self {
        Self { config, host_format: HostFormat::default() }
    }

    /// Select the ingress host format.
    pub fn with_host_format(mut self, host_format: HostFormat) -> Self {
        self.host_format = host_format;
        self
    }

    /// Build the manifest, consuming the builder.
    pub fn build(self) -> ApplicationManifest {
        let host = ingress_host(APP_NAME, &self.config, self.host_format);

        ApplicationManifest {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: Metadata {
                name: APP_NAME.to_string(),
                namespace: ARGOCD_NAMESPACE.to_string(),
            },
            spec: ApplicationSpec {
                sync_policy: SyncPolicy {
                    automated: Automated { prune: true, self_heal: true },
                    sync_options: SYNC_OPTIONS.iter().map(|opt| opt.to_string()).collect(),
                },
                source: Source {
                    chart: CHART_NAME.to_string(),
                    repo_url: CHART_REPO_URL.to_string(),
                    target_revision: CHART_TARGET_REVISION.to_string(),
                    helm: Helm {
                        values_object: ChartValues {
                            ingress: IngressValues {
                                enabled: true,
                                class_name: INGRESS_CLASS_NAME.to_string(),
                                hosts: vec![IngressHost {
                                    host,
                                    paths: vec![IngressPath {
                                        path: "/".to_string(),
                                        path_type: "ImplementationSpecific".to_string(),
                                    }],
                                }],
                            },
                        },
                    },
                },
                destination: Destination {
                    server: DESTINATION_SERVER.to_string(),
                    namespace: DESTINATION_NAMESPACE.to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectValues;

    fn config(project: &str, base_domain: &str) -> ProjectConfig {
        let values = ProjectValues {
            project: Some(project.to_string()),
            base_domain: Some(base_domain.to_string()),
        };
        ProjectConfig::validate(&values).unwrap()
    }

    #[test]
    fn build_fills_fixed_template_fields() {
        let manifest = ManifestBuilder::new(config("acme", "example.com")).build();

        assert_eq!(manifest.api_version, "argoproj.io/v1alpha1");
        assert_eq!(manifest.kind, "Application");
        assert_eq!(manifest.metadata.name, "podinfo");
        assert_eq!(manifest.metadata.namespace, "argocd");
        assert_eq!(manifest.spec.source.chart, "podinfo");
        assert_eq!(manifest.spec.source.repo_url, "https://stefanprodan.github.io/podinfo");
        assert_eq!(manifest.spec.source.target_revision, "6.9.0");
        assert_eq!(manifest.spec.destination.server, "https://kubernetes.default.svc");
        assert_eq!(manifest.spec.destination.namespace, "podinfo");
    }

    #[test]
    fn build_derives_the_ingress_host() {
        let manifest = ManifestBuilder::new(config("acme", "example.com")).build();

        let hosts = &manifest.spec.source.helm.values_object.ingress.hosts;
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].host, "podinfo.acme.example.com");
    }

    #[test]
    fn build_honors_the_shared_host_format() {
        let manifest = ManifestBuilder::new(config("acme", "example.com"))
            .with_host_format(HostFormat::Shared)
            .build();

        let hosts = &manifest.spec.source.helm.values_object.ingress.hosts;
        assert_eq!(hosts[0].host, "podinfo.example.com");
    }

    #[test]
    fn sync_policy_is_automated_with_ordered_options() {
        let manifest = ManifestBuilder::new(config("acme", "example.com")).build();

        let policy = &manifest.spec.sync_policy;
        assert!(policy.automated.prune);
        assert!(policy.automated.self_heal);
        assert_eq!(policy.sync_options, vec!["CreateNamespace=true", "PruneLast=true"]);
    }

    #[test]
    fn build_is_deterministic() {
        let first = ManifestBuilder::new(config("acme", "example.com")).build();
        let second = ManifestBuilder::new(config("acme", "example.com")).build();

        assert_eq!(first, second);
        assert_eq!(first.to_yaml().unwrap(), second.to_yaml().unwrap());
    }

    #[test]
    fn yaml_field_names_match_the_controller_schema() {
        let manifest = ManifestBuilder::new(config("acme", "example.com")).build();
        let yaml = manifest.to_yaml().unwrap();

        assert!(yaml.contains("apiVersion: argoproj.io/v1alpha1"));
        assert!(yaml.contains("syncPolicy:"));
        assert!(yaml.contains("selfHeal: true"));
        assert!(yaml.contains("repoURL: https://stefanprodan.github.io/podinfo"));
        assert!(yaml.contains("targetRevision:"));
        assert!(yaml.contains("valuesObject:"));
        assert!(yaml.contains("className: nginx"));
        assert!(yaml.contains("pathType: ImplementationSpecific"));
    }

    #[test]
    fn yaml_round_trips_through_the_model() {
        let manifest = ManifestBuilder::new(config("acme", "example.com")).build();
        let yaml = manifest.to_yaml().unwrap();

        let parsed: ApplicationManifest = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, manifest);
    }
}
