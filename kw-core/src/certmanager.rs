use std::time::Duration;

use kw_api::certmanager::*;
use tracing::*;

use crate::errors::*;
use crate::k8s::{
    get_secret,
    secret_has_key,
};
use crate::macros::*;
use crate::prelude::*;
use crate::wait::{
    get_namespaced,
    list_namespaced,
    wait_for,
};

err_impl! {CertManagerError,
    #[error("certificate has no secretName: {0}")]
    NoSecretName(String),

    #[error("certificate secret is missing key: {0}")]
    SecretKeyMissing(String),
}

pub use crate::conditions::has_condition;

impl_ready_from_condition!(READY_CONDITION => Certificate, CertificateRequest, Issuer, ClusterIssuer);

namespaced_ready_helpers! {
    Certificate: certificate, certificates;
    CertificateRequest: certificate_request, certificate_requests;
    Issuer: issuer, issuers;
}

cluster_ready_helpers! {
    ClusterIssuer: cluster_issuer, cluster_issuers;
}

// The secret named by a Certificate (in the Certificate's namespace) must carry both halves of the
// keypair once the certificate has been issued.
pub async fn validate_certificate_secret(client: kube::Client, ns: &str, name: &str) -> EmptyResult {
    let cert: Certificate = get_namespaced(client.clone(), ns, name).await?;
    let secret_name = &cert.spec.secret_name;
    if secret_name.is_empty() {
        return Err(CertManagerError::no_secret_name(&cert.namespaced_name()));
    }

    let secret = get_secret(client, ns, secret_name).await?;
    for key in [TLS_CERT_KEY, TLS_PRIVATE_KEY_KEY] {
        if !secret_has_key(&secret, key) {
            return Err(CertManagerError::secret_key_missing(&format!("{ns}/{secret_name}: {key}")));
        }
    }

    info!("secret {ns}/{secret_name} for certificate {name} has {TLS_CERT_KEY} and {TLS_PRIVATE_KEY_KEY}");
    Ok(())
}

// ACME orders and challenges don't use conditions, just a lowercase state string
pub fn is_order_valid(order: &Order) -> bool {
    order.status.as_ref().is_some_and(|s| s.state.as_deref() == Some(ACME_STATE_VALID))
}

pub fn is_challenge_valid(challenge: &Challenge) -> bool {
    challenge
        .status
        .as_ref()
        .is_some_and(|s| s.state.as_deref() == Some(ACME_STATE_VALID))
}

pub async fn list_orders(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Order>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_order_valid(client: kube::Client, ns: &str, name: &str, timeout: Duration) -> anyhow::Result<Order> {
    let api = kube::Api::<Order>::namespaced(client, ns);
    wait_for(&api, name, &WaitOptions::with_timeout(timeout), is_order_valid).await
}

pub async fn list_challenges(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Challenge>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_challenge_valid(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Challenge> {
    let api = kube::Api::<Challenge>::namespaced(client, ns);
    wait_for(&api, name, &WaitOptions::with_timeout(timeout), is_challenge_valid).await
}
