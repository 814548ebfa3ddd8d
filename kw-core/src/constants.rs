use std::time::Duration;

use lazy_static::lazy_static;

use crate::k8s::GVK;

// Defaults
pub const DEFAULT_NAMESPACE: &str = "default";

// Timing
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(300);

// Condition types for built-in kinds
pub const CRD_ESTABLISHED_CONDITION: &str = "Established";
pub const CRD_NAMES_ACCEPTED_CONDITION: &str = "NamesAccepted";

// SMI TrafficSplit isn't part of linkerd's own API groups, so it's only ever fetched
// through the dynamic client
pub const TRAFFIC_SPLIT_KIND: &str = "TrafficSplit";
pub const TRAFFIC_SPLIT_PLURAL: &str = "trafficsplits";

lazy_static! {
    pub static ref TRAFFIC_SPLIT_GVK: GVK = GVK::new("split.smi-spec.io", "v1alpha1", TRAFFIC_SPLIT_KIND);
}
