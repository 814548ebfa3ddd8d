//! Istio networking (`networking.istio.io/v1alpha3`) and security (`security.istio.io/v1`)
//! resources.  The spec bodies are proto-generated and large, so only the top-level keys are
//! modelled and nested messages are kept as JSON.
use std::collections::BTreeMap;

use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::Condition;

// Istio's status is the proto `IstioStatus` message; observedGeneration is an int64 in proto and
// so shows up as a JSON string, which is why it isn't shared with ConditionedStatus.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IstioStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub validation_messages: Vec<serde_json::Value>,
    pub observed_generation: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSelector {
    #[serde(default)]
    pub match_labels: BTreeMap<String, String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "Gateway", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct GatewaySpec {
    #[serde(default)]
    pub selector: BTreeMap<String, String>,
    #[serde(default)]
    pub servers: Vec<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "VirtualService", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub gateways: Vec<String>,
    #[serde(default)]
    pub http: Vec<serde_json::Value>,
    #[serde(default)]
    pub tcp: Vec<serde_json::Value>,
    #[serde(default)]
    pub tls: Vec<serde_json::Value>,
    #[serde(default)]
    pub export_to: Vec<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "DestinationRule", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct DestinationRuleSpec {
    #[serde(default)]
    pub host: String,
    pub traffic_policy: Option<serde_json::Value>,
    #[serde(default)]
    pub subsets: Vec<serde_json::Value>,
    #[serde(default)]
    pub export_to: Vec<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "ServiceEntry", namespaced)]
#[kube(plural = "serviceentries")]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntrySpec {
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub ports: Vec<serde_json::Value>,
    pub location: Option<String>,
    pub resolution: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "Sidecar", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct SidecarSpec {
    pub workload_selector: Option<WorkloadSelector>,
    #[serde(default)]
    pub ingress: Vec<serde_json::Value>,
    #[serde(default)]
    pub egress: Vec<serde_json::Value>,
    pub outbound_traffic_policy: Option<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "EnvoyFilter", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct EnvoyFilterSpec {
    pub workload_selector: Option<WorkloadSelector>,
    #[serde(default)]
    pub config_patches: Vec<serde_json::Value>,
    pub priority: Option<i32>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "WorkloadEntry", namespaced)]
#[kube(plural = "workloadentries")]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEntrySpec {
    pub address: Option<String>,
    #[serde(default)]
    pub ports: BTreeMap<String, u32>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    pub network: Option<String>,
    pub service_account: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "networking.istio.io", version = "v1alpha3", kind = "WorkloadGroup", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct WorkloadGroupSpec {
    pub metadata: Option<serde_json::Value>,
    pub template: Option<serde_json::Value>,
    pub probe: Option<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "security.istio.io", version = "v1", kind = "PeerAuthentication", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct PeerAuthenticationSpec {
    pub selector: Option<WorkloadSelector>,
    pub mtls: Option<serde_json::Value>,
    #[serde(default)]
    pub port_level_mtls: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "security.istio.io", version = "v1", kind = "RequestAuthentication", namespaced)]
#[kube(status = "IstioStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct RequestAuthenticationSpec {
    pub selector: Option<WorkloadSelector>,
    #[serde(default)]
    pub jwt_rules: Vec<serde_json::Value>,
    #[serde(default)]
    pub target_refs: Vec<serde_json::Value>,
}
