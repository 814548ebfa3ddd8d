use kw_api::argo::events::*;

use crate::conditions::has_true_condition;
use crate::macros::*;
use crate::prelude::*;

// Argo Events controllers all publish a top-level "Ready" condition that rolls up the
// per-component ones (Deployed, SourcesProvided, etc.)
impl_ready_from_condition!(READY_CONDITION => EventSource, EventBus, Sensor);

namespaced_ready_helpers! {
    EventSource: event_source, event_sources;
    EventBus: event_bus, event_buses;
    Sensor: sensor, sensors;
}

pub fn has_ready_condition(conds: &[Condition], type_: &str) -> bool {
    has_true_condition(conds, type_)
}
