use std::fmt::Debug;

use clap::ValueEnum;
use kube::api::DynamicObject;
use kw_api::argo::{
    cd,
    events,
    rollouts,
    workflows,
};
use kw_api::{
    certmanager,
    externalsecrets,
    flux,
    istio,
    linkerd,
};
use kw_core::k8s::api_for_gvk_with_plural;
use kw_core::prelude::*;
use kw_core::wait::{
    list_cluster,
    list_namespaced,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cluster::ClusterArgs;
use crate::kinds::ResourceKind;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Name,
    Json,
    Yaml,
}

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(value_enum, long_help = "kind of object to list")]
    pub kind: ResourceKind,

    #[command(flatten)]
    pub cluster: ClusterArgs,

    #[arg(short = 'A', long, long_help = "list across all namespaces")]
    pub all_namespaces: bool,

    #[arg(short = 'l', long, long_help = "only list objects matching this label selector")]
    pub selector: Option<String>,

    #[arg(short, long, value_enum, long_help = "output format", default_value = "name")]
    pub output: OutputFormat,
}

pub fn render<K: kube::Resource + Serialize>(objs: &[K], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Name => objs.iter().map(|o| format!("{}\n", o.namespaced_name())).collect(),
        OutputFormat::Json => serde_json::to_string_pretty(objs)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(objs)?,
    })
}

async fn list_in<K>(client: kube::Client, ns: Option<&str>, lp: &ListParams) -> anyhow::Result<Vec<K>>
where
    K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    match ns {
        Some(ns) => list_namespaced(client, ns, lp).await,
        None => list_cluster(client, lp).await,
    }
}

// Returns the rendered listing; `default_ns` is ignored for cluster-scoped kinds or when listing
// across all namespaces.
pub async fn cmd(args: &Args, client: kube::Client, default_ns: &str) -> anyhow::Result<String> {
    let ns = (!args.all_namespaces && args.kind.is_namespaced()).then_some(default_ns);
    let mut lp = ListParams::default();
    if let Some(sel) = &args.selector {
        lp = lp.labels(sel);
    }
    let fmt = args.output;

    macro_rules! list {
        (namespaced $kind:ty) => {
            render(&list_in::<$kind>(client, ns, &lp).await?, fmt)
        };
        (cluster $kind:ty) => {
            render(&list_cluster::<$kind>(client, &lp).await?, fmt)
        };
    }

    use ResourceKind as RK;
    match args.kind {
        RK::Application => list!(namespaced cd::Application),
        RK::ApplicationSet => list!(namespaced cd::ApplicationSet),
        RK::AppProject => list!(namespaced cd::AppProject),

        RK::EventSource => list!(namespaced events::EventSource),
        RK::EventBus => list!(namespaced events::EventBus),
        RK::Sensor => list!(namespaced events::Sensor),

        RK::Rollout => list!(namespaced rollouts::Rollout),

        RK::Workflow => list!(namespaced workflows::Workflow),
        RK::CronWorkflow => list!(namespaced workflows::CronWorkflow),
        RK::WorkflowTemplate => list!(namespaced workflows::WorkflowTemplate),
        RK::ClusterWorkflowTemplate => list!(cluster workflows::ClusterWorkflowTemplate),
        RK::WorkflowTaskResult => list!(namespaced workflows::WorkflowTaskResult),
        RK::WorkflowTaskSet => list!(namespaced workflows::WorkflowTaskSet),

        RK::Certificate => list!(namespaced certmanager::Certificate),
        RK::CertificateRequest => list!(namespaced certmanager::CertificateRequest),
        RK::Issuer => list!(namespaced certmanager::Issuer),
        RK::ClusterIssuer => list!(cluster certmanager::ClusterIssuer),
        RK::Order => list!(namespaced certmanager::Order),
        RK::Challenge => list!(namespaced certmanager::Challenge),

        RK::ExternalSecret => list!(namespaced externalsecrets::ExternalSecret),
        RK::SecretStore => list!(namespaced externalsecrets::SecretStore),
        RK::ClusterSecretStore => list!(cluster externalsecrets::ClusterSecretStore),
        RK::ClusterExternalSecret => list!(cluster externalsecrets::ClusterExternalSecret),
        RK::PushSecret => list!(namespaced externalsecrets::PushSecret),

        RK::Bucket => list!(namespaced flux::Bucket),
        RK::GitRepository => list!(namespaced flux::GitRepository),
        RK::HelmRepository => list!(namespaced flux::HelmRepository),
        RK::HelmChart => list!(namespaced flux::HelmChart),
        RK::OciRepository => list!(namespaced flux::OCIRepository),
        RK::Kustomization => list!(namespaced flux::Kustomization),
        RK::HelmRelease => list!(namespaced flux::HelmRelease),

        RK::Gateway => list!(namespaced istio::Gateway),
        RK::VirtualService => list!(namespaced istio::VirtualService),
        RK::DestinationRule => list!(namespaced istio::DestinationRule),
        RK::ServiceEntry => list!(namespaced istio::ServiceEntry),
        RK::Sidecar => list!(namespaced istio::Sidecar),
        RK::EnvoyFilter => list!(namespaced istio::EnvoyFilter),
        RK::WorkloadEntry => list!(namespaced istio::WorkloadEntry),
        RK::WorkloadGroup => list!(namespaced istio::WorkloadGroup),
        RK::PeerAuthentication => list!(namespaced istio::PeerAuthentication),
        RK::RequestAuthentication => list!(namespaced istio::RequestAuthentication),

        RK::Server => list!(namespaced linkerd::Server),
        RK::ServerAuthorization => list!(namespaced linkerd::ServerAuthorization),
        RK::AuthorizationPolicy => list!(namespaced linkerd::AuthorizationPolicy),
        RK::HttpRoute => list!(namespaced linkerd::HTTPRoute),
        RK::MeshTlsAuthentication => list!(namespaced linkerd::MeshTLSAuthentication),
        RK::NetworkAuthentication => list!(namespaced linkerd::NetworkAuthentication),
        RK::ServiceProfile => list!(namespaced linkerd::ServiceProfile),
        RK::TrafficSplit => {
            let api = api_for_gvk_with_plural(client, &TRAFFIC_SPLIT_GVK, TRAFFIC_SPLIT_PLURAL, ns);
            let splits: Vec<DynamicObject> = api.list(&lp).await?.items;
            render(&splits, fmt)
        },

        RK::Backup => list!(namespaced kw_api::velero::Backup),
        RK::Restore => list!(namespaced kw_api::velero::Restore),
        RK::Schedule => list!(namespaced kw_api::velero::Schedule),
        RK::BackupStorageLocation => list!(namespaced kw_api::velero::BackupStorageLocation),

        RK::StatefulSet => list!(namespaced appsv1::StatefulSet),
        RK::CustomResourceDefinition => list!(cluster apiextv1::CustomResourceDefinition),
    }
}
