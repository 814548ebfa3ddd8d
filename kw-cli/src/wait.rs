use std::fmt::Debug;
use std::time::Duration;

use kw_api::argo::{
    cd,
    events,
    rollouts,
    workflows,
};
use kw_api::argo::workflows::{
    CronWorkflowPhase,
    WorkflowPhase,
};
use kw_api::{
    certmanager,
    externalsecrets,
    flux,
    istio,
    linkerd,
};
use kw_core::errors::*;
use kw_core::k8s::{
    api_for_gvk_with_plural,
    split_namespaced_name,
};
use kw_core::prelude::*;
use kw_core::wait::wait_for;
use serde::de::DeserializeOwned;
use tracing::*;

use crate::cluster::ClusterArgs;
use crate::kinds::ResourceKind;

err_impl! {WaitArgsError,
    #[error("--phase does not apply to {0}")]
    PhaseNotSupported(String),

    #[error("--paused does not apply to {0}")]
    PausedNotSupported(String),

    #[error("--check-secret does not apply to {0}")]
    CheckSecretNotSupported(String),

    #[error("invalid phase: {0}")]
    InvalidPhase(String),
}

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(value_enum, long_help = "kind of object to wait for")]
    pub kind: ResourceKind,

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

    #[arg(
        long,
        long_help = "how long to wait between checks",
        default_value = "2s",
        value_parser = humantime::parse_duration
    )]
    pub interval: Duration,

    #[arg(
        long,
        long_help = "phase to wait for (workflows default to Succeeded, cron workflows to Active)"
    )]
    pub phase: Option<String>,

    #[arg(long, long_help = "wait for a rollout to pause instead of becoming healthy")]
    pub paused: bool,

    #[arg(long, long_help = "after a certificate is ready, check that its secret holds the TLS keypair")]
    pub check_secret: bool,
}

impl Args {
    pub fn wait_options(&self) -> WaitOptions {
        WaitOptions::with_timeout(self.timeout).interval(self.interval)
    }

    // Splits "namespace/name" apart; a bare name falls back to `default_ns`.  Cluster-scoped kinds
    // never look at the namespace.
    pub fn target(&self, default_ns: &str) -> (String, String) {
        let (ns, name) = split_namespaced_name(&self.name);
        if ns.is_empty() { (default_ns.into(), name) } else { (ns, name) }
    }

    // The kind-specific flags are rejected up front rather than silently ignored.
    pub fn validate(&self) -> EmptyResult {
        use ResourceKind as RK;

        let kind = format!("{:?}", self.kind);
        if self.phase.is_some() && !matches!(self.kind, RK::Workflow | RK::CronWorkflow) {
            return Err(WaitArgsError::phase_not_supported(&kind));
        }
        if self.paused && self.kind != RK::Rollout {
            return Err(WaitArgsError::paused_not_supported(&kind));
        }
        if self.check_secret && self.kind != RK::Certificate {
            return Err(WaitArgsError::check_secret_not_supported(&kind));
        }
        Ok(())
    }
}

fn ready<K: Ready>(obj: &K) -> bool {
    obj.is_ready()
}

fn exists<K>(_: &K) -> bool {
    true
}

async fn wait_until<K, P>(api: kube::Api<K>, name: &str, opts: &WaitOptions, pred: P) -> anyhow::Result<String>
where
    K: kube::Resource + Clone + DeserializeOwned + Debug,
    P: Fn(&K) -> bool,
{
    let obj = wait_for(&api, name, opts, pred).await?;
    Ok(obj.namespaced_name())
}

// Waits for the object named in `args` and returns its namespaced name once the kind's readiness
// check passes.
pub async fn cmd(args: &Args, client: kube::Client, default_ns: &str) -> anyhow::Result<String> {
    args.validate()?;
    let (ns, name) = args.target(default_ns);
    let opts = args.wait_options();

    let what = if args.kind.is_namespaced() { format!("{ns}/{name}") } else { name.clone() };
    let state = if args.kind.has_readiness() { "be ready" } else { "exist" };
    info!(
        "waiting up to {} for {:?} {what} to {state}",
        humantime::format_duration(opts.timeout),
        args.kind
    );

    macro_rules! wait {
        (namespaced $kind:ty, $pred:expr) => {
            wait_until(kube::Api::<$kind>::namespaced(client.clone(), &ns), &name, &opts, $pred).await
        };
        (cluster $kind:ty, $pred:expr) => {
            wait_until(kube::Api::<$kind>::all(client.clone()), &name, &opts, $pred).await
        };
    }

    use ResourceKind as RK;
    let target = match args.kind {
        RK::Application => wait!(namespaced cd::Application, ready),
        RK::ApplicationSet => wait!(namespaced cd::ApplicationSet, ready),
        RK::AppProject => wait!(namespaced cd::AppProject, exists),

        RK::EventSource => wait!(namespaced events::EventSource, ready),
        RK::EventBus => wait!(namespaced events::EventBus, ready),
        RK::Sensor => wait!(namespaced events::Sensor, ready),

        RK::Rollout if args.paused => {
            wait!(namespaced rollouts::Rollout, kw_core::argo::rollouts::is_rollout_paused)
        },
        RK::Rollout => wait!(namespaced rollouts::Rollout, ready),

        RK::Workflow => {
            let phase = parse_phase(args.phase.as_deref(), WorkflowPhase::Succeeded)?;
            wait!(namespaced workflows::Workflow, |wf| kw_core::argo::workflows::workflow_in_phase(wf, phase))
        },
        RK::CronWorkflow => {
            let phase = parse_phase(args.phase.as_deref(), CronWorkflowPhase::Active)?;
            wait!(namespaced workflows::CronWorkflow, |cwf| {
                kw_core::argo::workflows::cron_workflow_in_phase(cwf, phase)
            })
        },
        RK::WorkflowTemplate => wait!(namespaced workflows::WorkflowTemplate, exists),
        RK::ClusterWorkflowTemplate => wait!(cluster workflows::ClusterWorkflowTemplate, exists),
        RK::WorkflowTaskResult => wait!(namespaced workflows::WorkflowTaskResult, exists),
        RK::WorkflowTaskSet => wait!(namespaced workflows::WorkflowTaskSet, exists),

        RK::Certificate => {
            let target = wait!(namespaced certmanager::Certificate, ready)?;
            if args.check_secret {
                kw_core::certmanager::validate_certificate_secret(client.clone(), &ns, &name).await?;
            }
            Ok(target)
        },
        RK::CertificateRequest => wait!(namespaced certmanager::CertificateRequest, ready),
        RK::Issuer => wait!(namespaced certmanager::Issuer, ready),
        RK::ClusterIssuer => wait!(cluster certmanager::ClusterIssuer, ready),
        RK::Order => wait!(namespaced certmanager::Order, kw_core::certmanager::is_order_valid),
        RK::Challenge => wait!(namespaced certmanager::Challenge, kw_core::certmanager::is_challenge_valid),

        RK::ExternalSecret => wait!(namespaced externalsecrets::ExternalSecret, ready),
        RK::SecretStore => wait!(namespaced externalsecrets::SecretStore, ready),
        RK::ClusterSecretStore => wait!(cluster externalsecrets::ClusterSecretStore, ready),
        RK::ClusterExternalSecret => wait!(cluster externalsecrets::ClusterExternalSecret, ready),
        RK::PushSecret => wait!(namespaced externalsecrets::PushSecret, ready),

        RK::Bucket => wait!(namespaced flux::Bucket, ready),
        RK::GitRepository => wait!(namespaced flux::GitRepository, ready),
        RK::HelmRepository => wait!(namespaced flux::HelmRepository, ready),
        RK::HelmChart => wait!(namespaced flux::HelmChart, ready),
        RK::OciRepository => wait!(namespaced flux::OCIRepository, ready),
        RK::Kustomization => wait!(namespaced flux::Kustomization, ready),
        RK::HelmRelease => wait!(namespaced flux::HelmRelease, ready),

        RK::Gateway => wait!(namespaced istio::Gateway, ready),
        RK::VirtualService => wait!(namespaced istio::VirtualService, ready),
        RK::DestinationRule => wait!(namespaced istio::DestinationRule, ready),
        RK::ServiceEntry => wait!(namespaced istio::ServiceEntry, ready),
        RK::Sidecar => wait!(namespaced istio::Sidecar, ready),
        RK::EnvoyFilter => wait!(namespaced istio::EnvoyFilter, ready),
        RK::WorkloadEntry => wait!(namespaced istio::WorkloadEntry, ready),
        RK::WorkloadGroup => wait!(namespaced istio::WorkloadGroup, ready),
        RK::PeerAuthentication => wait!(namespaced istio::PeerAuthentication, ready),
        RK::RequestAuthentication => wait!(namespaced istio::RequestAuthentication, ready),

        RK::Server => wait!(namespaced linkerd::Server, exists),
        RK::ServerAuthorization => wait!(namespaced linkerd::ServerAuthorization, exists),
        RK::AuthorizationPolicy => wait!(namespaced linkerd::AuthorizationPolicy, exists),
        RK::HttpRoute => wait!(namespaced linkerd::HTTPRoute, exists),
        RK::MeshTlsAuthentication => wait!(namespaced linkerd::MeshTLSAuthentication, exists),
        RK::NetworkAuthentication => wait!(namespaced linkerd::NetworkAuthentication, exists),
        RK::ServiceProfile => wait!(namespaced linkerd::ServiceProfile, exists),
        RK::TrafficSplit => {
            let api = api_for_gvk_with_plural(client.clone(), &TRAFFIC_SPLIT_GVK, TRAFFIC_SPLIT_PLURAL, Some(&ns));
            wait_until(api, &name, &opts, exists).await
        },

        RK::Backup => wait!(namespaced kw_api::velero::Backup, ready),
        RK::Restore => wait!(namespaced kw_api::velero::Restore, ready),
        RK::Schedule => wait!(namespaced kw_api::velero::Schedule, ready),
        RK::BackupStorageLocation => wait!(namespaced kw_api::velero::BackupStorageLocation, ready),

        RK::StatefulSet => wait!(namespaced appsv1::StatefulSet, ready),
        RK::CustomResourceDefinition => wait!(cluster apiextv1::CustomResourceDefinition, ready),
    }?;

    Ok(target)
}

fn parse_phase<P>(phase: Option<&str>, default: P) -> anyhow::Result<P>
where
    P: std::str::FromStr<Err = String>,
{
    match phase {
        Some(p) => p.parse().map_err(|err: String| WaitArgsError::invalid_phase(&err)),
        None => Ok(default),
    }
}
