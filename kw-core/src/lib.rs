pub mod argo;
pub mod certmanager;
pub mod conditions;
pub mod config;
pub mod constants;
pub mod errors;
pub mod externalsecrets;
pub mod flux;
pub mod istio;
pub mod k8s;
pub mod linkerd;
pub mod logging;
pub mod macros;
pub mod velero;
pub mod wait;

pub mod prelude {
    pub use k8s_openapi::api::apps::v1 as appsv1;
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1 as apiextv1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::api::ListParams;
    pub use kube::ResourceExt;
    pub use kw_api::{
        CONDITION_TRUE,
        Condition,
        ConditionedStatus,
        READY_CONDITION,
    };

    pub use crate::conditions::Ready;
    pub use crate::config::ClusterOptions;
    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::k8s::{
        GVK,
        KubeResourceExt,
    };
    pub use crate::wait::WaitOptions;
}

#[cfg(test)]
mod tests;
