mod crds;
mod dynamic;
mod gvk;
mod secrets;
mod statefulset;
mod util;

pub use crds::*;
pub use dynamic::*;
pub use gvk::*;
pub use secrets::*;
pub use statefulset::*;
pub use util::*;

use crate::errors::*;

err_impl! {ApiError,
    #[error("no API resource found for kind: {0}")]
    UnknownKind(GVK),
}

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
}

#[cfg(test)]
pub mod tests;
