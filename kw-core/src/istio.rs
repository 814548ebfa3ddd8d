use kw_api::istio::*;

use crate::conditions::{
    Ready,
    has_true_condition_ignore_case,
};
use crate::macros::*;
use crate::prelude::*;

// Istio only writes status when the distribution tracking / validation features are turned on,
// and it has historically written the condition status in lowercase, so be forgiving about both.
pub fn istio_condition_ready(status: Option<&IstioStatus>) -> bool {
    status.is_some_and(|s| has_true_condition_ignore_case(&s.conditions, READY_CONDITION))
}

macro_rules! impl_istio_ready {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl Ready for $kind {
                fn is_ready(&self) -> bool {
                    istio_condition_ready(self.status.as_ref())
                }
            }
        )+
    };
}

impl_istio_ready!(
    Gateway,
    VirtualService,
    DestinationRule,
    ServiceEntry,
    Sidecar,
    EnvoyFilter,
    WorkloadEntry,
    WorkloadGroup,
    PeerAuthentication,
    RequestAuthentication,
);

namespaced_ready_helpers! {
    Gateway: gateway, gateways;
    VirtualService: virtual_service, virtual_services;
    DestinationRule: destination_rule, destination_rules;
    ServiceEntry: service_entry, service_entries;
    Sidecar: sidecar, sidecars;
    EnvoyFilter: envoy_filter, envoy_filters;
    WorkloadEntry: workload_entry, workload_entries;
    WorkloadGroup: workload_group, workload_groups;
    PeerAuthentication: peer_authentication, peer_authentications;
    RequestAuthentication: request_authentication, request_authentications;
}
