use std::time::Duration;

use kw_api::argo::cd::*;
use tracing::*;

use crate::conditions::Ready;
use crate::macros::*;
use crate::prelude::*;
use crate::wait::{
    list_namespaced,
    wait_for_ready,
};

pub fn is_application_healthy_and_synced(app: &Application) -> bool {
    let Some(status) = app.status.as_ref() else {
        return false;
    };

    let health = status.health.status.as_deref();
    let sync = status.sync.status.as_deref();
    debug!("{}: health={health:?} sync={sync:?}", app.namespaced_name());
    health == Some(HEALTH_STATUS_HEALTHY) && sync == Some(SYNC_STATUS_SYNCED)
}

impl Ready for Application {
    fn is_ready(&self) -> bool {
        is_application_healthy_and_synced(self)
    }
}

// ApplicationSets don't have health or sync status of their own; the closest equivalent is the
// controller reporting that every generated Application is up to date.
impl_ready_from_condition!(APPLICATION_SET_RESOURCES_UP_TO_DATE => ApplicationSet);

pub async fn list_applications(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Application>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_application_healthy_and_synced(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Application> {
    let api = kube::Api::<Application>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}

pub async fn list_application_sets(client: kube::Client, ns: &str) -> anyhow::Result<Vec<ApplicationSet>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_application_set_healthy_and_synced(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<ApplicationSet> {
    let api = kube::Api::<ApplicationSet>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}

namespaced_exists_helpers! {
    AppProject: app_project, app_projects;
}
