use std::time::Duration;

use tracing::*;

use crate::conditions::Ready;
use crate::prelude::*;
use crate::wait::{
    get_namespaced,
    list_namespaced,
    wait_for_ready,
};

pub async fn get_stateful_set(client: kube::Client, ns: &str, name: &str) -> anyhow::Result<appsv1::StatefulSet> {
    get_namespaced(client, ns, name).await
}

pub async fn list_stateful_sets(
    client: kube::Client,
    ns: &str,
    lp: &ListParams,
) -> anyhow::Result<Vec<appsv1::StatefulSet>> {
    list_namespaced(client, ns, lp).await
}

// A StatefulSet is up to date once every replica has been updated to the current revision and is
// available; a StatefulSet that hasn't been given a status yet is not.
pub fn is_stateful_set_up_to_date(sts: &appsv1::StatefulSet) -> bool {
    let Some(status) = sts.status.as_ref() else {
        return false;
    };

    // unset counters are zero, so a set scaled down to nothing counts as up to date
    let replicas = status.replicas;
    let up_to_date = status.updated_replicas.unwrap_or(0) == replicas
        && status.available_replicas.unwrap_or(0) == replicas
        && status.current_replicas.unwrap_or(0) == replicas;
    if !up_to_date {
        debug!(
            "{}: replicas={replicas} updated={:?} available={:?} current={:?}",
            sts.namespaced_name(),
            status.updated_replicas,
            status.available_replicas,
            status.current_replicas,
        );
    }
    up_to_date
}

impl Ready for appsv1::StatefulSet {
    fn is_ready(&self) -> bool {
        is_stateful_set_up_to_date(self)
    }
}

pub async fn wait_for_stateful_set_ready(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<appsv1::StatefulSet> {
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}
