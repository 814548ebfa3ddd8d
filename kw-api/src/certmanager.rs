//! cert-manager resources: `cert-manager.io/v1` for certificates and issuers, and
//! `acme.cert-manager.io/v1` for the ACME orders and challenges that back them.
use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::{
    Condition,
    ConditionedStatus,
};

pub const ACME_STATE_VALID: &str = "valid";
pub const ACME_STATE_READY: &str = "ready";
pub const ACME_STATE_PENDING: &str = "pending";
pub const ACME_STATE_INVALID: &str = "invalid";

pub const TLS_CERT_KEY: &str = "tls.crt";
pub const TLS_PRIVATE_KEY_KEY: &str = "tls.key";
pub const CA_CERT_KEY: &str = "ca.crt";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerRef {
    pub name: String,
    pub kind: Option<String>,
    pub group: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "cert-manager.io", version = "v1", kind = "Certificate", namespaced)]
#[kube(status = "CertificateStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    #[serde(default)]
    pub secret_name: String,
    pub common_name: Option<String>,
    #[serde(default)]
    pub dns_names: Vec<String>,
    #[serde(default)]
    pub issuer_ref: IssuerRef,
    pub duration: Option<String>,
    pub renew_before: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub not_before: Option<String>,
    pub not_after: Option<String>,
    pub renewal_time: Option<String>,
    pub revision: Option<i32>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "cert-manager.io", version = "v1", kind = "CertificateRequest", namespaced)]
#[kube(status = "CertificateRequestStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestSpec {
    #[serde(default)]
    pub request: String,
    #[serde(default)]
    pub issuer_ref: IssuerRef,
    pub is_ca: Option<bool>,
    pub duration: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub certificate: Option<String>,
    pub ca: Option<String>,
    pub failure_time: Option<String>,
}

// Issuers are configured through exactly one of a handful of backends (acme, ca, selfSigned,
// vault, venafi); we keep whichever one is set as raw JSON.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "cert-manager.io", version = "v1", kind = "Issuer", namespaced)]
#[kube(status = "ConditionedStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct IssuerSpec {
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "cert-manager.io", version = "v1", kind = "ClusterIssuer")]
#[kube(status = "ConditionedStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ClusterIssuerSpec {
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "acme.cert-manager.io", version = "v1", kind = "Order", namespaced)]
#[kube(status = "OrderStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct OrderSpec {
    #[serde(default)]
    pub request: String,
    #[serde(default)]
    pub issuer_ref: IssuerRef,
    pub common_name: Option<String>,
    #[serde(default)]
    pub dns_names: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub state: Option<String>,
    pub reason: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "finalizeURL")]
    pub finalize_url: Option<String>,
    pub certificate: Option<String>,
    pub failure_time: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "acme.cert-manager.io", version = "v1", kind = "Challenge", namespaced)]
#[kube(status = "ChallengeStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSpec {
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub dns_name: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub key: String,
    pub url: Option<String>,
    #[serde(default)]
    pub issuer_ref: IssuerRef,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStatus {
    pub state: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub presented: bool,
    #[serde(default)]
    pub processing: bool,
}

