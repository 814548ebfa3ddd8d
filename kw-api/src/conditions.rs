use serde::{
    Deserialize,
    Serialize,
};

pub const CONDITION_TRUE: &str = "True";
pub const CONDITION_FALSE: &str = "False";

pub const READY_CONDITION: &str = "Ready";

// Most controllers follow the metav1.Condition shape, but enough of them leave out fields that
// are "required" upstream (Istio, Argo, ESO) that we can't reuse the k8s-openapi type directly.
// observedGeneration is left off because Istio writes it as a string.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

impl Condition {
    pub fn new(type_: &str, status: &str) -> Condition {
        Condition { type_: type_.into(), status: status.into(), ..Default::default() }
    }

    pub fn is(&self, type_: &str, status: &str) -> bool {
        self.type_ == type_ && self.status == status
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionedStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl ConditionedStatus {
    pub fn with_conditions(conditions: Vec<Condition>) -> ConditionedStatus {
        ConditionedStatus { conditions, ..Default::default() }
    }
}
