//! Velero (`velero.io/v1`) backup and restore resources; these report progress through a phase
//! string rather than conditions.
use kube::CustomResource;
use serde::{
    Deserialize,
    Serialize,
};

pub const BACKUP_PHASE_COMPLETED: &str = "Completed";
pub const BACKUP_PHASE_PARTIALLY_FAILED: &str = "PartiallyFailed";
pub const BACKUP_PHASE_FAILED: &str = "Failed";
pub const RESTORE_PHASE_COMPLETED: &str = "Completed";
pub const SCHEDULE_PHASE_ENABLED: &str = "Enabled";
pub const BSL_PHASE_AVAILABLE: &str = "Available";
pub const BSL_PHASE_UNAVAILABLE: &str = "Unavailable";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStatus {
    pub phase: Option<String>,
    #[serde(default)]
    pub validation_errors: Vec<String>,
    pub start_timestamp: Option<String>,
    pub completion_timestamp: Option<String>,
    pub errors: Option<i64>,
    pub warnings: Option<i64>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "velero.io", version = "v1", kind = "Backup", namespaced)]
#[kube(status = "PhaseStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct BackupSpec {
    #[serde(default)]
    pub included_namespaces: Vec<String>,
    #[serde(default)]
    pub excluded_namespaces: Vec<String>,
    pub storage_location: Option<String>,
    pub ttl: Option<String>,
    pub snapshot_volumes: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "velero.io", version = "v1", kind = "Restore", namespaced)]
#[kube(status = "PhaseStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct RestoreSpec {
    pub backup_name: Option<String>,
    pub schedule_name: Option<String>,
    #[serde(default)]
    pub included_namespaces: Vec<String>,
    #[serde(default)]
    pub excluded_namespaces: Vec<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "velero.io", version = "v1", kind = "Schedule", namespaced)]
#[kube(status = "ScheduleStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSpec {
    #[serde(default)]
    pub schedule: String,
    pub template: Option<BackupSpec>,
    pub paused: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStatus {
    pub phase: Option<String>,
    pub last_backup: Option<String>,
    #[serde(default)]
    pub validation_errors: Vec<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, Serialize)]
#[kube(group = "velero.io", version = "v1", kind = "BackupStorageLocation", namespaced)]
#[kube(status = "BackupStorageLocationStatus", schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct BackupStorageLocationSpec {
    #[serde(default)]
    pub provider: String,
    pub object_storage: Option<serde_json::Value>,
    pub config: Option<serde_json::Value>,
    #[serde(default)]
    pub default: bool,
    pub access_mode: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupStorageLocationStatus {
    pub phase: Option<String>,
    pub last_validation_time: Option<String>,
    pub last_synced_time: Option<String>,
    pub message: Option<String>,
}
