//! Trimmed-down definitions of the custom resources that the kubewait helpers read.  Only the
//! fields that the readiness checks (and a handful of commonly-inspected spec fields) care about
//! are modelled; everything else in the object is ignored on deserialization.
pub mod argo;
pub mod certmanager;
pub mod conditions;
pub mod externalsecrets;
pub mod flux;
pub mod istio;
pub mod linkerd;
pub mod velero;

pub use conditions::*;
