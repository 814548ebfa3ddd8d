use std::collections::BTreeMap;

use k8s_openapi::ByteString;
use k8s_openapi::api::core::v1 as corev1;
use kw_api::argo::rollouts::*;
use kw_api::argo::workflows::*;
use kw_api::certmanager::*;
use kw_core::certmanager::CertManagerError;
use kw_core::wait::WaitError;

use super::*;
use crate::wait::WaitArgsError;

fn argo_path(plural: &str) -> String {
    format!("/apis/argoproj.io/v1alpha1/namespaces/{TEST_NAMESPACE}/{plural}/{TEST_NAME}")
}

fn test_rollout(phase: &str) -> Rollout {
    let mut rollout = Rollout::new(TEST_NAME, Default::default());
    rollout.metadata.namespace = Some(TEST_NAMESPACE.into());
    rollout.status = Some(RolloutStatus { phase: Some(phase.into()), ..Default::default() });
    rollout
}

fn test_workflow(phase: &str) -> Workflow {
    let mut wf = Workflow::new(TEST_NAME, Default::default());
    wf.metadata.namespace = Some(TEST_NAMESPACE.into());
    wf.status = Some(WorkflowStatus { phase: Some(phase.into()), ..Default::default() });
    wf
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_rollout_paused() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_get(argo_path("rollouts"), test_rollout(ROLLOUT_PHASE_PAUSED)).build();

    let args = parse_wait("rollout", TEST_NAME, &["--paused"]);
    let target = wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(target, format!("{TEST_NAMESPACE}/{TEST_NAME}"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_rollout_paused_is_not_healthy() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_get(argo_path("rollouts"), test_rollout(ROLLOUT_PHASE_PAUSED)).build();

    let args = parse_wait("rollout", TEST_NAME, &[]);
    let err = wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap_err();
    fake_apiserver.assert_hits_at_least(2);
    assert!(matches!(err.downcast_ref::<WaitError>(), Some(WaitError::Timeout(_))));
}

#[rstest]
#[case::default_phase("Succeeded", &[])]
#[case::explicit_phase("Running", &["--phase", "running"])]
#[traced_test]
#[tokio::test]
async fn test_wait_workflow_phase(#[case] phase: &str, #[case] extra: &[&str]) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_get(argo_path("workflows"), test_workflow(phase)).build();

    let args = parse_wait("workflow", &format!("{TEST_NAMESPACE}/{TEST_NAME}"), extra);
    wait::cmd(&args, client, "default").await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_invalid_phase() {
    let (_, client) = make_fake_apiserver();
    let args = parse_wait("workflow", TEST_NAME, &["--phase", "finished"]);
    let err = wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<WaitArgsError>(), Some(WaitArgsError::InvalidPhase(_))));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_phase_not_supported() {
    let (_, client) = make_fake_apiserver();
    let args = parse_wait("sensor", TEST_NAME, &["--phase", "running"]);
    let err = wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<WaitArgsError>(), Some(WaitArgsError::PhaseNotSupported(_))));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_cluster_issuer_ignores_namespace(ready_conditions: Vec<kw_api::Condition>) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut issuer = ClusterIssuer::new(TEST_NAME, Default::default());
    issuer.status = Some(kw_api::ConditionedStatus::with_conditions(ready_conditions));
    fake_apiserver
        .handle_get(format!("/apis/cert-manager.io/v1/clusterissuers/{TEST_NAME}"), issuer)
        .build();

    let args = parse_wait("cluster-issuer", TEST_NAME, &[]);
    let target = wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(target, TEST_NAME);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_certificate_check_secret_missing_key(ready_conditions: Vec<kw_api::Condition>) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut cert = Certificate::new(
        TEST_NAME,
        CertificateSpec { secret_name: TEST_SECRET_NAME.into(), ..Default::default() },
    );
    cert.metadata.namespace = Some(TEST_NAMESPACE.into());
    cert.status = Some(CertificateStatus { conditions: ready_conditions, ..Default::default() });
    let secret = corev1::Secret {
        metadata: test_metadata(TEST_SECRET_NAME, Some(TEST_NAMESPACE)),
        data: Some(BTreeMap::from([(TLS_CERT_KEY.to_string(), ByteString(b"cert".to_vec()))])),
        ..Default::default()
    };
    fake_apiserver
        .handle_get(format!("/apis/cert-manager.io/v1/namespaces/{TEST_NAMESPACE}/certificates/{TEST_NAME}"), cert)
        .handle_get(format!("/api/v1/namespaces/{TEST_NAMESPACE}/secrets/{TEST_SECRET_NAME}"), secret)
        .build();

    let args = parse_wait("certificate", TEST_NAME, &["--check-secret"]);
    let err = wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap_err();
    fake_apiserver.assert_hits_at_least(1);
    assert!(matches!(err.downcast_ref::<CertManagerError>(), Some(CertManagerError::SecretKeyMissing(_))));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_traffic_split_exists() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let split = serde_json::json!({
        "apiVersion": "split.smi-spec.io/v1alpha1",
        "kind": "TrafficSplit",
        "metadata": {"name": TEST_NAME, "namespace": TEST_NAMESPACE},
        "spec": {"service": "web", "backends": [{"service": "web-v1", "weight": 100}]},
    });
    fake_apiserver
        .handle_get(format!("/apis/split.smi-spec.io/v1alpha1/namespaces/{TEST_NAMESPACE}/trafficsplits/{TEST_NAME}"), split)
        .build();

    let args = parse_wait("traffic-split", TEST_NAME, &[]);
    wait::cmd(&args, client, TEST_NAMESPACE).await.unwrap();
    fake_apiserver.assert();
}
