use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

pub const HEALTH_STATUS_HEALTHY: &str = "Healthy";
pub const HEALTH_STATUS_PROGRESSING: &str = "Progressing";
pub const HEALTH_STATUS_DEGRADED: &str = "Degraded";
pub const SYNC_STATUS_SYNCED: &str = "Synced";
pub const SYNC_STATUS_OUT_OF_SYNC: &str = "OutOfSync";

pub const APPLICATION_SET_RESOURCES_UP_TO_DATE: &str = "ResourcesUpToDate";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSource {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    pub path: Option<String>,
    pub target_revision: Option<String>,
    pub chart: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDestination {
    pub server: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "Application", namespaced)]
#[kube(status = "ApplicationStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    #[serde(default)]
    pub project: String,
    pub source: Option<ApplicationSource>,
    #[serde(default)]
    pub destination: ApplicationDestination,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub status: Option<String>,
    pub revision: Option<String>,
}

// Argo CD application conditions only ever report problems, so they have no status field.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub message: Option<String>,
    pub last_transition_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatus {
    #[serde(default)]
    pub health: HealthStatus,
    #[serde(default)]
    pub sync: SyncStatus,
    #[serde(default)]
    pub conditions: Vec<ApplicationCondition>,
    pub reconciled_at: Option<String>,
}

// The generators and template are free-form enough that we just carry them around as JSON.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "ApplicationSet", namespaced)]
#[kube(status = "ApplicationSetStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSetSpec {
    #[serde(default)]
    pub generators: Vec<serde_json::Value>,
    pub template: Option<serde_json::Value>,
    pub go_template: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSetApplicationStatus {
    pub application: String,
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSetStatus {
    #[serde(default)]
    pub conditions: Vec<crate::conditions::Condition>,
    #[serde(default)]
    pub application_status: Vec<ApplicationSetApplicationStatus>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProjectDestination {
    pub server: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "AppProject", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct AppProjectSpec {
    pub description: Option<String>,
    #[serde(default)]
    pub source_repos: Vec<String>,
    #[serde(default)]
    pub destinations: Vec<AppProjectDestination>,
    #[serde(default)]
    pub source_namespaces: Vec<String>,
}
