//! Argo project resources (Argo CD, Argo Events, Argo Rollouts, Argo Workflows).  Every kind here
//! lives in the `argoproj.io/v1alpha1` API group.
pub mod cd;
pub mod events;
pub mod rollouts;
pub mod workflows;
