use std::collections::HashMap;
use std::collections::hash_map::Entry;

use kube::api::{
    ApiResource,
    DynamicObject,
    ListParams,
};
use kube::core::ErrorResponse;
use kube::discovery::{
    ApiCapabilities,
    Scope,
};
use tracing::*;

use super::*;
use crate::wait::{
    WaitOptions,
    wait_for_exists,
};

// A DynamicApis object caches the ApiResources returned by the apiserver's discovery endpoints so
// that we don't have to repeatedly make "discovery" calls for kinds we don't have types for.
pub struct DynamicApis {
    client: kube::Client,
    resources: HashMap<GVK, (ApiResource, ApiCapabilities)>,
}

impl DynamicApis {
    pub fn new(client: kube::Client) -> DynamicApis {
        DynamicApis { client, resources: HashMap::new() }
    }

    // Returns a namespaced Api handle for namespaced kinds (when `ns` is given) and a
    // cluster-wide one otherwise.
    pub async fn api_for(&mut self, gvk: &GVK, ns: Option<&str>) -> anyhow::Result<kube::Api<DynamicObject>> {
        let (ar, cap) = self.api_meta_for(gvk).await?.clone();
        Ok(match (cap.scope, ns) {
            (Scope::Namespaced, Some(ns)) => kube::Api::namespaced_with(self.client.clone(), ns, &ar),
            _ => kube::Api::all_with(self.client.clone(), &ar),
        })
    }

    async fn api_meta_for(&mut self, gvk: &GVK) -> anyhow::Result<&(ApiResource, ApiCapabilities)> {
        match self.resources.entry(gvk.clone()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let api_meta = match kube::discovery::pinned_kind(&self.client, e.key()).await {
                    Ok(api_meta) => api_meta,
                    Err(kube::Error::Api(ErrorResponse { code: 404, .. }) | kube::Error::Discovery(_)) => {
                        return Err(ApiError::unknown_kind(gvk));
                    },
                    Err(err) => return Err(err.into()),
                };
                debug!("discovered {} as {}", gvk, api_meta.0.plural);
                Ok(e.insert(api_meta))
            },
        }
    }
}

// Skips discovery entirely; useful when the plural is known up front, as with the SMI kinds
pub fn api_for_gvk_with_plural(
    client: kube::Client,
    gvk: &GVK,
    plural: &str,
    ns: Option<&str>,
) -> kube::Api<DynamicObject> {
    let ar = gvk.to_api_resource(plural);
    match ns {
        Some(ns) => kube::Api::namespaced_with(client, ns, &ar),
        None => kube::Api::all_with(client, &ar),
    }
}

pub async fn list_dynamic(apis: &mut DynamicApis, gvk: &GVK, ns: Option<&str>) -> anyhow::Result<Vec<DynamicObject>> {
    let api = apis.api_for(gvk, ns).await?;
    Ok(api.list(&ListParams::default()).await?.items)
}

pub async fn get_dynamic(
    apis: &mut DynamicApis,
    gvk: &GVK,
    ns: Option<&str>,
    name: &str,
) -> anyhow::Result<DynamicObject> {
    let api = apis.api_for(gvk, ns).await?;
    Ok(api.get(name).await?)
}

pub async fn wait_for_dynamic_exists(
    apis: &mut DynamicApis,
    gvk: &GVK,
    ns: Option<&str>,
    name: &str,
    opts: &WaitOptions,
) -> anyhow::Result<DynamicObject> {
    let api = apis.api_for(gvk, ns).await?;
    wait_for_exists(&api, name, opts).await
}
