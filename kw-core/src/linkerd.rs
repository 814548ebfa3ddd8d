use std::time::Duration;

use kube::api::DynamicObject;
use kw_api::linkerd::*;

use crate::k8s::api_for_gvk_with_plural;
use crate::macros::*;
use crate::prelude::*;
use crate::wait::wait_for_exists;

namespaced_exists_helpers! {
    Server: server, servers;
    ServerAuthorization: server_authorization, server_authorizations;
    AuthorizationPolicy: authorization_policy, authorization_policies;
    HTTPRoute: http_route, http_routes;
    MeshTLSAuthentication: mesh_tls_authentication, mesh_tls_authentications;
    NetworkAuthentication: network_authentication, network_authentications;
    ServiceProfile: service_profile, service_profiles;
}

fn traffic_split_api(client: kube::Client, ns: &str) -> kube::Api<DynamicObject> {
    api_for_gvk_with_plural(client, &TRAFFIC_SPLIT_GVK, TRAFFIC_SPLIT_PLURAL, Some(ns))
}

pub async fn list_traffic_splits(client: kube::Client, ns: &str) -> anyhow::Result<Vec<DynamicObject>> {
    Ok(traffic_split_api(client, ns).list(&ListParams::default()).await?.items)
}

pub async fn get_traffic_split(client: kube::Client, ns: &str, name: &str) -> anyhow::Result<DynamicObject> {
    Ok(traffic_split_api(client, ns).get(name).await?)
}

pub async fn wait_for_traffic_split_exists(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<DynamicObject> {
    wait_for_exists(&traffic_split_api(client, ns), name, &WaitOptions::with_timeout(timeout)).await
}
