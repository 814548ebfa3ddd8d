use clap::ValueEnum;

// Every kind kwctl knows how to wait on or list.  The kebab-case value names are what gets typed
// on the command line, e.g. `kwctl wait git-repository flux-system/podinfo`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ResourceKind {
    // Argo CD
    Application,
    ApplicationSet,
    AppProject,

    // Argo Events
    EventSource,
    EventBus,
    Sensor,

    // Argo Rollouts
    Rollout,

    // Argo Workflows
    Workflow,
    CronWorkflow,
    WorkflowTemplate,
    ClusterWorkflowTemplate,
    WorkflowTaskResult,
    WorkflowTaskSet,

    // cert-manager
    Certificate,
    CertificateRequest,
    Issuer,
    ClusterIssuer,
    Order,
    Challenge,

    // External Secrets
    ExternalSecret,
    SecretStore,
    ClusterSecretStore,
    ClusterExternalSecret,
    PushSecret,

    // Flux
    Bucket,
    GitRepository,
    HelmRepository,
    HelmChart,
    OciRepository,
    Kustomization,
    HelmRelease,

    // Istio
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

    // Linkerd
    Server,
    ServerAuthorization,
    AuthorizationPolicy,
    HttpRoute,
    MeshTlsAuthentication,
    NetworkAuthentication,
    ServiceProfile,
    TrafficSplit,

    // Velero
    Backup,
    Restore,
    Schedule,
    BackupStorageLocation,

    // Kubernetes
    StatefulSet,
    CustomResourceDefinition,
}

impl ResourceKind {
    pub fn is_namespaced(&self) -> bool {
        !matches!(
            self,
            ResourceKind::ClusterWorkflowTemplate
                | ResourceKind::ClusterIssuer
                | ResourceKind::ClusterSecretStore
                | ResourceKind::ClusterExternalSecret
                | ResourceKind::CustomResourceDefinition
        )
    }

    // Kinds with no status worth checking; waiting on these only waits for them to exist
    pub fn has_readiness(&self) -> bool {
        !matches!(
            self,
            ResourceKind::AppProject
                | ResourceKind::WorkflowTemplate
                | ResourceKind::ClusterWorkflowTemplate
                | ResourceKind::WorkflowTaskResult
                | ResourceKind::WorkflowTaskSet
                | ResourceKind::Server
                | ResourceKind::ServerAuthorization
                | ResourceKind::AuthorizationPolicy
                | ResourceKind::HttpRoute
                | ResourceKind::MeshTlsAuthentication
                | ResourceKind::NetworkAuthentication
                | ResourceKind::ServiceProfile
                | ResourceKind::TrafficSplit
        )
    }
}
