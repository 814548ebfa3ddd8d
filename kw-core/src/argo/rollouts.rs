use std::time::Duration;

use kw_api::argo::rollouts::*;
use tracing::*;

use crate::conditions::{
    Ready,
    has_true_condition,
};
use crate::prelude::*;
use crate::wait::{
    list_namespaced,
    wait_for,
    wait_for_ready,
};

// Healthy means the rollout has finished progressing to the desired revision
pub fn is_rollout_healthy(rollout: &Rollout) -> bool {
    let Some(status) = rollout.status.as_ref() else {
        return false;
    };

    debug!("{}: phase={:?} message={:?}", rollout.namespaced_name(), status.phase, status.message);
    has_true_condition(&status.conditions, ROLLOUT_CONDITION_PROGRESSING)
        && status.phase.as_deref() == Some(ROLLOUT_PHASE_HEALTHY)
}

pub fn is_rollout_paused(rollout: &Rollout) -> bool {
    rollout
        .status
        .as_ref()
        .is_some_and(|s| s.phase.as_deref() == Some(ROLLOUT_PHASE_PAUSED))
}

impl Ready for Rollout {
    fn is_ready(&self) -> bool {
        is_rollout_healthy(self)
    }
}

pub async fn list_rollouts(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Rollout>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_rollout_healthy(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Rollout> {
    let api = kube::Api::<Rollout>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}

// Canary steps with an indefinite pause park the rollout here until someone promotes it
pub async fn wait_for_rollout_paused(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Rollout> {
    let api = kube::Api::<Rollout>::namespaced(client, ns);
    wait_for(&api, name, &WaitOptions::with_timeout(timeout), is_rollout_paused).await
}
