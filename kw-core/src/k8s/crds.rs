use std::time::Duration;

use crate::conditions::Ready;
use crate::prelude::*;
use crate::wait::{
    get_cluster,
    list_cluster,
    wait_for_ready,
};

pub async fn get_custom_resource_definition(
    client: kube::Client,
    name: &str,
) -> anyhow::Result<apiextv1::CustomResourceDefinition> {
    get_cluster(client, name).await
}

pub async fn list_custom_resource_definitions(
    client: kube::Client,
    lp: &ListParams,
) -> anyhow::Result<Vec<apiextv1::CustomResourceDefinition>> {
    list_cluster(client, lp).await
}

// CRDs are usable once the apiserver has both accepted the names and started serving the type
pub fn is_custom_resource_definition_ready(crd: &apiextv1::CustomResourceDefinition) -> bool {
    let conds = crd.status.as_ref().and_then(|s| s.conditions.as_ref());
    let is_true = |type_: &str| {
        conds.is_some_and(|cs| cs.iter().any(|c| c.type_ == type_ && c.status == CONDITION_TRUE))
    };
    is_true(CRD_ESTABLISHED_CONDITION) && is_true(CRD_NAMES_ACCEPTED_CONDITION)
}

impl Ready for apiextv1::CustomResourceDefinition {
    fn is_ready(&self) -> bool {
        is_custom_resource_definition_ready(self)
    }
}

pub async fn wait_for_custom_resource_definition_ready(
    client: kube::Client,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<apiextv1::CustomResourceDefinition> {
    let api = kube::Api::<apiextv1::CustomResourceDefinition>::all(client);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}
