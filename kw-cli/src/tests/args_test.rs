use std::time::Duration;

use super::*;
use crate::kinds::ResourceKind;
use crate::list::OutputFormat;
use crate::wait::WaitArgsError;

#[rstest]
fn test_parse_wait_args() {
    let args = parse_wait("git-repository", "flux-system/podinfo", &["--context", TEST_CONTEXT]);
    assert_eq!(args.kind, ResourceKind::GitRepository);
    assert_eq!(args.timeout, Duration::from_millis(250));
    assert_eq!(args.interval, Duration::from_millis(20));
    assert_eq!(args.cluster.context.as_deref(), Some(TEST_CONTEXT));
    assert_eq!(args.target(TEST_NAMESPACE), ("flux-system".into(), "podinfo".into()));
}

#[rstest]
fn test_parse_wait_default_namespace() {
    let args = parse_wait("oci-repository", "podinfo", &[]);
    assert_eq!(args.kind, ResourceKind::OciRepository);
    assert_eq!(args.target(TEST_NAMESPACE), (TEST_NAMESPACE.into(), "podinfo".into()));
}

#[rstest]
#[case::unknown_kind(&["kwctl", "wait", "deployment", "foo"])]
#[case::bad_duration(&["kwctl", "wait", "rollout", "foo", "--timeout", "soon"])]
#[case::missing_name(&["kwctl", "wait", "rollout"])]
#[case::bad_gvk(&["kwctl", "exists", "a/b/c.Kind", "foo"])]
fn test_parse_invalid(#[case] args: &[&str]) {
    assert!(KwCommandRoot::try_parse_from(args).is_err());
}

#[rstest]
fn test_parse_list_args() {
    let args = parse_list("http-route", &["-A", "-o", "yaml", "-l", "app=web"]);
    assert_eq!(args.kind, ResourceKind::HttpRoute);
    assert!(args.all_namespaces);
    assert_eq!(args.output, OutputFormat::Yaml);
    assert_eq!(args.selector.as_deref(), Some("app=web"));
}

#[rstest]
fn test_parse_exists_args() {
    let KwSubcommand::Exists(args) = parse(&["kwctl", "exists", "split.smi-spec.io/v1alpha1.TrafficSplit", "foo"]) else {
        panic!("expected an exists subcommand");
    };
    assert_eq!(args.gvk, *TRAFFIC_SPLIT_GVK);
    assert_eq!(args.timeout, Duration::from_secs(300));
}

#[rstest]
#[case::cluster_issuer(ResourceKind::ClusterIssuer, false, true)]
#[case::crd(ResourceKind::CustomResourceDefinition, false, true)]
#[case::server(ResourceKind::Server, true, false)]
#[case::rollout(ResourceKind::Rollout, true, true)]
fn test_resource_kind_properties(#[case] kind: ResourceKind, #[case] namespaced: bool, #[case] readiness: bool) {
    assert_eq!(kind.is_namespaced(), namespaced);
    assert_eq!(kind.has_readiness(), readiness);
}

#[rstest]
#[case::paused_rollout("rollout", &["--paused"])]
#[case::check_secret_certificate("certificate", &["--check-secret"])]
#[case::phase_cron_workflow("cron-workflow", &["--phase", "stopped"])]
fn test_validate_wait_flags(#[case] kind: &str, #[case] extra: &[&str]) {
    assert!(parse_wait(kind, TEST_NAME, extra).validate().is_ok());
}

#[rstest]
fn test_validate_paused_not_supported() {
    let err = parse_wait("kustomization", TEST_NAME, &["--paused"]).validate().unwrap_err();
    assert!(matches!(err.downcast_ref::<WaitArgsError>(), Some(WaitArgsError::PausedNotSupported(_))));
}

#[rstest]
fn test_validate_check_secret_not_supported() {
    let err = parse_wait("issuer", TEST_NAME, &["--check-secret"]).validate().unwrap_err();
    assert!(matches!(err.downcast_ref::<WaitArgsError>(), Some(WaitArgsError::CheckSecretNotSupported(_))));
}
