use std::time::Duration;

use kw_api::velero::*;
use tracing::*;

use crate::conditions::Ready;
use crate::prelude::*;
use crate::wait::{
    list_namespaced,
    wait_for_ready,
};

// Velero objects report a single phase string; each kind has its own notion of "done"
fn phase_is(name: String, phase: Option<&str>, want: &str) -> bool {
    debug!("{name}: phase={phase:?}, want {want}");
    phase == Some(want)
}

impl Ready for Backup {
    fn is_ready(&self) -> bool {
        let phase = self.status.as_ref().and_then(|s| s.phase.as_deref());
        phase_is(self.namespaced_name(), phase, BACKUP_PHASE_COMPLETED)
    }
}

impl Ready for Restore {
    fn is_ready(&self) -> bool {
        let phase = self.status.as_ref().and_then(|s| s.phase.as_deref());
        phase_is(self.namespaced_name(), phase, RESTORE_PHASE_COMPLETED)
    }
}

impl Ready for Schedule {
    fn is_ready(&self) -> bool {
        let phase = self.status.as_ref().and_then(|s| s.phase.as_deref());
        phase_is(self.namespaced_name(), phase, SCHEDULE_PHASE_ENABLED)
    }
}

impl Ready for BackupStorageLocation {
    fn is_ready(&self) -> bool {
        let phase = self.status.as_ref().and_then(|s| s.phase.as_deref());
        phase_is(self.namespaced_name(), phase, BSL_PHASE_AVAILABLE)
    }
}

pub async fn list_backups(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Backup>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

// A backup that ends up PartiallyFailed or Failed never completes, so this just times out
pub async fn wait_for_backup_succeeded(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Backup> {
    let api = kube::Api::<Backup>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}

pub async fn list_restores(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Restore>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_restore_completed(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Restore> {
    let api = kube::Api::<Restore>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}

pub async fn list_schedules(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Schedule>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_schedule_enabled(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<Schedule> {
    let api = kube::Api::<Schedule>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}

pub async fn list_backup_storage_locations(
    client: kube::Client,
    ns: &str,
) -> anyhow::Result<Vec<BackupStorageLocation>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_backup_storage_location_ready(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<BackupStorageLocation> {
    let api = kube::Api::<BackupStorageLocation>::namespaced(client, ns);
    wait_for_ready(&api, name, &WaitOptions::with_timeout(timeout)).await
}
