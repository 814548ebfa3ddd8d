use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum WorkflowPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Error,
}

impl WorkflowPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowPhase::Pending => "Pending",
            WorkflowPhase::Running => "Running",
            WorkflowPhase::Succeeded => "Succeeded",
            WorkflowPhase::Failed => "Failed",
            WorkflowPhase::Error => "Error",
        }
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkflowPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(WorkflowPhase::Pending),
            "running" => Ok(WorkflowPhase::Running),
            "succeeded" => Ok(WorkflowPhase::Succeeded),
            "failed" => Ok(WorkflowPhase::Failed),
            "error" => Ok(WorkflowPhase::Error),
            _ => Err(format!("unknown workflow phase: {s}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CronWorkflowPhase {
    Active,
    Stopped,
}

impl CronWorkflowPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CronWorkflowPhase::Active => "Active",
            CronWorkflowPhase::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for CronWorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CronWorkflowPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(CronWorkflowPhase::Active),
            "stopped" => Ok(CronWorkflowPhase::Stopped),
            _ => Err(format!("unknown cron workflow phase: {s}")),
        }
    }
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "Workflow", namespaced)]
#[kube(status = "WorkflowStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSpec {
    pub entrypoint: Option<String>,
    #[serde(default)]
    pub templates: Vec<serde_json::Value>,
    pub workflow_template_ref: Option<serde_json::Value>,
    pub service_account_name: Option<String>,
    pub arguments: Option<serde_json::Value>,
}

// Argo reports an unknown phase as the empty string, so the phase stays a plain string on the
// wire; compare against `WorkflowPhase::as_str` to check it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    pub phase: Option<String>,
    pub message: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub progress: Option<String>,
}

impl WorkflowStatus {
    pub fn phase_is(&self, phase: WorkflowPhase) -> bool {
        self.phase.as_deref() == Some(phase.as_str())
    }
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "CronWorkflow", namespaced)]
#[kube(status = "CronWorkflowStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct CronWorkflowSpec {
    #[serde(default)]
    pub schedules: Vec<String>,
    pub schedule: Option<String>,
    pub timezone: Option<String>,
    pub suspend: Option<bool>,
    pub concurrency_policy: Option<String>,
    pub workflow_spec: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronWorkflowStatus {
    pub phase: Option<String>,
    #[serde(default)]
    pub active: Vec<k8s_openapi::api::core::v1::ObjectReference>,
    pub last_scheduled_time: Option<String>,
    pub succeeded: Option<i64>,
    pub failed: Option<i64>,
}

impl CronWorkflowStatus {
    pub fn phase_is(&self, phase: CronWorkflowPhase) -> bool {
        self.phase.as_deref() == Some(phase.as_str())
    }
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "WorkflowTemplate", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplateSpec {
    pub entrypoint: Option<String>,
    #[serde(default)]
    pub templates: Vec<serde_json::Value>,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "ClusterWorkflowTemplate")]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ClusterWorkflowTemplateSpec {
    pub entrypoint: Option<String>,
    #[serde(default)]
    pub templates: Vec<serde_json::Value>,
    pub arguments: Option<serde_json::Value>,
}

// WorkflowTaskResult has no spec; the node result fields are inlined at the top level of the
// object, so the CustomResource derive doesn't fit and we implement the resource traits by hand.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTaskResult {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub phase: Option<String>,
    pub message: Option<String>,
    pub progress: Option<String>,
    pub outputs: Option<serde_json::Value>,
}

impl k8s_openapi::Resource for WorkflowTaskResult {
    type Scope = k8s_openapi::NamespaceResourceScope;

    const API_VERSION: &'static str = "argoproj.io/v1alpha1";
    const GROUP: &'static str = "argoproj.io";
    const KIND: &'static str = "WorkflowTaskResult";
    const URL_PATH_SEGMENT: &'static str = "workflowtaskresults";
    const VERSION: &'static str = "v1alpha1";
}

impl k8s_openapi::Metadata for WorkflowTaskResult {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "WorkflowTaskSet", namespaced)]
#[kube(status = "WorkflowTaskSetStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTaskSetSpec {
    #[serde(default)]
    pub tasks: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTaskSetStatus {
    #[serde(default)]
    pub nodes: BTreeMap<String, serde_json::Value>,
}
