//! External Secrets Operator resources.  Everything except `PushSecret` is served from
//! `external-secrets.io/v1`; push secrets are still `v1alpha1`.
use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::{
    Condition,
    ConditionedStatus,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretStoreRef {
    pub name: String,
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSecretTarget {
    pub name: Option<String>,
    pub creation_policy: Option<String>,
    pub deletion_policy: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "external-secrets.io", version = "v1", kind = "ExternalSecret", namespaced)]
#[kube(status = "ExternalSecretStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ExternalSecretSpec {
    pub secret_store_ref: Option<SecretStoreRef>,
    #[serde(default)]
    pub target: ExternalSecretTarget,
    pub refresh_interval: Option<String>,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default)]
    pub data_from: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSecretStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub refresh_time: Option<String>,
    pub synced_resource_version: Option<String>,
    pub binding: Option<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "external-secrets.io", version = "v1", kind = "SecretStore", namespaced)]
#[kube(status = "SecretStoreStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct SecretStoreSpec {
    pub provider: Option<serde_json::Value>,
    pub controller: Option<String>,
    pub refresh_interval: Option<i64>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "external-secrets.io", version = "v1", kind = "ClusterSecretStore")]
#[kube(status = "SecretStoreStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ClusterSecretStoreSpec {
    pub provider: Option<serde_json::Value>,
    pub controller: Option<String>,
    pub refresh_interval: Option<i64>,
    pub conditions: Option<Vec<serde_json::Value>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretStoreStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub capabilities: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "external-secrets.io", version = "v1", kind = "ClusterExternalSecret")]
#[kube(status = "ClusterExternalSecretStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ClusterExternalSecretSpec {
    pub external_secret_spec: Option<serde_json::Value>,
    pub external_secret_name: Option<String>,
    #[serde(default)]
    pub namespace_selectors: Vec<k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector>,
    pub refresh_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterExternalSecretStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub external_secret_name: Option<String>,
    #[serde(default)]
    pub failed_namespaces: Vec<serde_json::Value>,
    #[serde(default)]
    pub provisioned_namespaces: Vec<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "external-secrets.io", version = "v1alpha1", kind = "PushSecret", namespaced)]
#[kube(status = "ConditionedStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct PushSecretSpec {
    #[serde(default)]
    pub secret_store_refs: Vec<serde_json::Value>,
    pub selector: Option<serde_json::Value>,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    pub refresh_interval: Option<String>,
    pub update_policy: Option<String>,
}
