use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::ConditionedStatus;

// Argo Events resources all report readiness through a plain list of conditions; the spec bodies
// vary wildly per event source type so we don't model them beyond the top-level keys.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "EventSource", namespaced)]
#[kube(status = "ConditionedStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct EventSourceSpec {
    pub event_bus_name: Option<String>,
    pub replicas: Option<i32>,
    #[serde(flatten)]
    pub sources: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "EventBus", namespaced)]
#[kube(plural = "eventbus")]
#[kube(status = "ConditionedStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct EventBusSpec {
    pub nats: Option<serde_json::Value>,
    #[serde(rename = "jetstream")]
    pub jet_stream: Option<serde_json::Value>,
    pub kafka: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorDependency {
    pub name: String,
    pub event_source_name: String,
    pub event_name: String,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "argoproj.io", version = "v1alpha1", kind = "Sensor", namespaced)]
#[kube(status = "ConditionedStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct SensorSpec {
    #[serde(default)]
    pub dependencies: Vec<SensorDependency>,
    #[serde(default)]
    pub triggers: Vec<serde_json::Value>,
    pub event_bus_name: Option<String>,
}
