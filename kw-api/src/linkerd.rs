//! Linkerd policy (`policy.linkerd.io`) and service-profile (`linkerd.io/v1alpha2`) resources.
//! None of these report status, so the helpers only ever check that they exist.
use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Port {
    Number(u16),
    Name(String),
}

impl Default for Port {
    fn default() -> Self {
        Port::Number(0)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRef {
    pub group: Option<String>,
    pub kind: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
}

// Gateway API parent reference; an omitted group and kind mean a Gateway.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HTTPRouteParentRef {
    pub group: Option<String>,
    pub kind: Option<String>,
    pub name: String,
    pub namespace: Option<String>,
    pub section_name: Option<String>,
    pub port: Option<u16>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "policy.linkerd.io", version = "v1beta1", kind = "Server", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ServerSpec {
    pub pod_selector: Option<LabelSelector>,
    pub external_workload_selector: Option<LabelSelector>,
    #[serde(default)]
    pub port: Port,
    pub proxy_protocol: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerAuthorizationServer {
    pub name: Option<String>,
    pub selector: Option<LabelSelector>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerAuthorizationClient {
    pub networks: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub unauthenticated: bool,
    #[serde(rename = "meshTLS")]
    pub mesh_tls: Option<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "policy.linkerd.io", version = "v1beta1", kind = "ServerAuthorization", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ServerAuthorizationSpec {
    #[serde(default)]
    pub server: ServerAuthorizationServer,
    #[serde(default)]
    pub client: ServerAuthorizationClient,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "policy.linkerd.io", version = "v1alpha1", kind = "AuthorizationPolicy", namespaced)]
#[kube(plural = "authorizationpolicies")]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationPolicySpec {
    #[serde(default)]
    pub target_ref: TargetRef,
    #[serde(default)]
    pub required_authentication_refs: Vec<TargetRef>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "policy.linkerd.io", version = "v1alpha1", kind = "HTTPRoute", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct HTTPRouteSpec {
    #[serde(default)]
    pub parent_refs: Vec<HTTPRouteParentRef>,
    #[serde(default)]
    pub hostnames: Vec<String>,
    #[serde(default)]
    pub rules: Vec<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "policy.linkerd.io", version = "v1alpha1", kind = "MeshTLSAuthentication", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct MeshTLSAuthenticationSpec {
    #[serde(default)]
    pub identities: Vec<String>,
    #[serde(default)]
    pub identity_refs: Vec<TargetRef>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub cidr: String,
    pub except: Option<Vec<String>>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "policy.linkerd.io", version = "v1alpha1", kind = "NetworkAuthentication", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct NetworkAuthenticationSpec {
    #[serde(default)]
    pub networks: Vec<Network>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "linkerd.io", version = "v1alpha2", kind = "ServiceProfile", namespaced)]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ServiceProfileSpec {
    #[serde(default)]
    pub routes: Vec<serde_json::Value>,
    pub retry_budget: Option<serde_json::Value>,
    #[serde(default)]
    pub dst_overrides: Vec<serde_json::Value>,
    // a set of ports on the wire: `{"3306": {}}`
    #[serde(default)]
    pub opaque_ports: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::number(r#"{"port": 8080}"#, Port::Number(8080))]
    #[case::name(r#"{"port": "http"}"#, Port::Name("http".into()))]
    fn test_server_port(#[case] body: &str, #[case] expected: Port) {
        let spec: ServerSpec = serde_json::from_str(body).unwrap();
        assert_eq!(spec.port, expected);
    }

    #[rstest]
    fn test_http_route_parent_ref_without_kind() {
        let spec: HTTPRouteSpec = serde_json::from_str(r#"{"parentRefs": [{"name": "gw", "namespace": "ns"}]}"#).unwrap();
        assert_eq!(spec.parent_refs[0].name, "gw");
        assert_eq!(spec.parent_refs[0].kind, None);
    }

    #[rstest]
    fn test_service_profile_opaque_ports() {
        let spec: ServiceProfileSpec =
            serde_json::from_str(r#"{"routes": [], "opaquePorts": {"3306": {}}}"#).unwrap();
        assert!(spec.opaque_ports.contains_key("3306"));
    }
}
