use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::Condition;

pub const ROLLOUT_PHASE_HEALTHY: &str = "Healthy";
pub const ROLLOUT_PHASE_PROGRESSING: &str = "Progressing";
pub const ROLLOUT_PHASE_PAUSED: &str = "Paused";
pub const ROLLOUT_PHASE_DEGRADED: &str = "Degraded";

pub const ROLLOUT_CONDITION_PROGRESSING: &str = "Progressing";

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "Rollout", namespaced)]
#[kube(status = "RolloutStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct RolloutSpec {
    pub replicas: Option<i32>,
    pub selector: Option<k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector>,
    pub strategy: Option<serde_json::Value>,
    pub workload_ref: Option<serde_json::Value>,
    pub paused: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloutStatus {
    pub phase: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub replicas: Option<i32>,
    pub ready_replicas: Option<i32>,
    pub updated_replicas: Option<i32>,
    pub available_replicas: Option<i32>,
    pub current_step_index: Option<i32>,
    pub observed_generation: Option<String>,
}
