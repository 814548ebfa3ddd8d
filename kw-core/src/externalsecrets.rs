use kw_api::externalsecrets::*;

use crate::conditions::has_true_condition;
use crate::macros::*;
use crate::prelude::*;

// Every ESO kind reports readiness the same way, including ClusterSecretStore (which some
// tooling mistakenly checks for a "Valid" condition that the controller never sets)
impl_ready_from_condition!(
    READY_CONDITION => ExternalSecret,
    SecretStore,
    ClusterSecretStore,
    ClusterExternalSecret,
    PushSecret,
);

namespaced_ready_helpers! {
    ExternalSecret: external_secret, external_secrets;
    SecretStore: secret_store, secret_stores;
    PushSecret: push_secret, push_secrets;
}

cluster_ready_helpers! {
    ClusterSecretStore: cluster_secret_store, cluster_secret_stores;
    ClusterExternalSecret: cluster_external_secret, cluster_external_secrets;
}

pub fn is_cluster_external_secret_ready(ces: &ClusterExternalSecret) -> bool {
    ces.status
        .as_ref()
        .is_some_and(|s| has_true_condition(&s.conditions, READY_CONDITION))
}
