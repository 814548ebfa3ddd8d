use std::time::Duration;

use kw_core::k8s::{
    DynamicApis,
    split_namespaced_name,
    wait_for_dynamic_exists,
};
use kw_core::prelude::*;

use crate::cluster::ClusterArgs;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(long_help = "kind to look for, as group/version.Kind (e.g. split.smi-spec.io/v1alpha1.TrafficSplit)")]
    pub gvk: GVK,

    #[arg(long_help = "name of the object, optionally as namespace/name")]
    pub name: String,

    #[command(flatten)]
    pub cluster: ClusterArgs,

    #[arg(
        short,
        long,
        long_help = "how long to wait before giving up",
        default_value = "5m",
        value_parser = humantime::parse_duration
    )]
    pub timeout: Duration,
}

// Works for any kind the apiserver knows about, typed or not; the namespace is dropped for
// cluster-scoped kinds once discovery tells us what the kind is.
pub async fn cmd(args: &Args, client: kube::Client, default_ns: &str) -> anyhow::Result<String> {
    let (ns, name) = split_namespaced_name(&args.name);
    let ns = if ns.is_empty() { default_ns.to_string() } else { ns };

    let mut apis = DynamicApis::new(client);
    let opts = WaitOptions::with_timeout(args.timeout);
    let obj = wait_for_dynamic_exists(&mut apis, &args.gvk, Some(&ns), &name, &opts).await?;
    Ok(obj.namespaced_name())
}
