//! Flux source, kustomize and helm controller resources.  All Flux objects report readiness
//! through the standard `Ready` condition.
use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::Condition;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub path: Option<String>,
    pub url: Option<String>,
    pub revision: Option<String>,
    pub digest: Option<String>,
    pub last_update_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossNamespaceObjectReference {
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
    pub api_version: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FluxStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub observed_generation: Option<i64>,
    pub artifact: Option<Artifact>,
    pub last_handled_reconcile_at: Option<String>,
    pub last_applied_revision: Option<String>,
    pub last_attempted_revision: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "source.toolkit.fluxcd.io", version = "v1", kind = "GitRepository", namespaced)]
#[kube(plural = "gitrepositories")]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct GitRepositorySpec {
    #[serde(default)]
    pub url: String,
    pub interval: Option<String>,
    #[serde(rename = "ref")]
    pub ref_: Option<serde_json::Value>,
    pub secret_ref: Option<serde_json::Value>,
    pub suspend: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "source.toolkit.fluxcd.io", version = "v1", kind = "HelmRepository", namespaced)]
#[kube(plural = "helmrepositories")]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct HelmRepositorySpec {
    #[serde(default)]
    pub url: String,
    pub interval: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub suspend: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "source.toolkit.fluxcd.io", version = "v1", kind = "HelmChart", namespaced)]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct HelmChartSpec {
    #[serde(default)]
    pub chart: String,
    pub version: Option<String>,
    #[serde(default)]
    pub source_ref: CrossNamespaceObjectReference,
    pub interval: Option<String>,
    pub suspend: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "source.toolkit.fluxcd.io", version = "v1", kind = "Bucket", namespaced)]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default)]
    pub endpoint: String,
    pub provider: Option<String>,
    pub interval: Option<String>,
    pub suspend: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "source.toolkit.fluxcd.io", version = "v1beta2", kind = "OCIRepository", namespaced)]
#[kube(plural = "ocirepositories")]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct OCIRepositorySpec {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "ref")]
    pub ref_: Option<serde_json::Value>,
    pub interval: Option<String>,
    pub suspend: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "kustomize.toolkit.fluxcd.io", version = "v1", kind = "Kustomization", namespaced)]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct KustomizationSpec {
    pub path: Option<String>,
    #[serde(default)]
    pub source_ref: CrossNamespaceObjectReference,
    pub interval: Option<String>,
    #[serde(default)]
    pub prune: bool,
    pub target_namespace: Option<String>,
    pub suspend: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "helm.toolkit.fluxcd.io", version = "v2", kind = "HelmRelease", namespaced)]
#[kube(status = "FluxStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct HelmReleaseSpec {
    pub chart: Option<serde_json::Value>,
    pub chart_ref: Option<CrossNamespaceObjectReference>,
    pub interval: Option<String>,
    pub release_name: Option<String>,
    pub target_namespace: Option<String>,
    pub values: Option<serde_json::Value>,
    pub suspend: Option<bool>,
}
