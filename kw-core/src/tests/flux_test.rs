use kw_api::flux::*;

use super::*;
use crate::flux::*;

fn test_kustomization(conditions: Vec<Condition>) -> Kustomization {
    let mut ks = Kustomization::new(
        TEST_NAME,
        KustomizationSpec {
            path: Some("./clusters/test".into()),
            prune: true,
            ..Default::default()
        },
    );
    ks.status = Some(FluxStatus { conditions, ..Default::default() });
    ks
}

#[rstest]
fn test_has_ready_condition(ready_conditions: Vec<Condition>, not_ready_conditions: Vec<Condition>) {
    assert!(has_ready_condition(&ready_conditions));
    assert!(!has_ready_condition(&not_ready_conditions));
    assert!(!has_ready_condition(&[]));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_kustomization_ready(ready_conditions: Vec<Condition>) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            namespaced_path("kustomize.toolkit.fluxcd.io/v1", "kustomizations", TEST_NAME),
            test_kustomization(ready_conditions),
        )
        .build();
    let ks = wait_for_kustomization_ready(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();
    assert!(ks.spec.prune);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_kustomization_ready_timeout(not_ready_conditions: Vec<Condition>) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            namespaced_path("kustomize.toolkit.fluxcd.io/v1", "kustomizations", TEST_NAME),
            test_kustomization(not_ready_conditions),
        )
        .build();
    assert_timed_out(wait_for_kustomization_ready(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT).await);
    fake_apiserver.assert_hits_at_least(2);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_oci_repository_ready(ready_conditions: Vec<Condition>) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut repo = OCIRepository::new(TEST_NAME, Default::default());
    repo.status = Some(FluxStatus { conditions: ready_conditions, ..Default::default() });
    fake_apiserver
        .handle_get(namespaced_path("source.toolkit.fluxcd.io/v1beta2", "ocirepositories", TEST_NAME), repo)
        .build();
    wait_for_oci_repository_ready(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_helm_releases() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let releases = vec![
        HelmRelease::new("podinfo", Default::default()),
        HelmRelease::new("ingress-nginx", Default::default()),
    ];
    fake_apiserver
        .handle_list(
            format!("/apis/helm.toolkit.fluxcd.io/v2/namespaces/{TEST_NAMESPACE}/helmreleases"),
            list_body("helm.toolkit.fluxcd.io/v2", "HelmRelease", &releases),
        )
        .build();
    let res = list_helm_releases(client, TEST_NAMESPACE).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(res.iter().map(|r| r.name_any()).collect::<Vec<_>>(), vec!["podinfo", "ingress-nginx"]);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_kustomization_ready_controller_shape() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            namespaced_path("kustomize.toolkit.fluxcd.io/v1", "kustomizations", TEST_NAME),
            raw_flux_kustomization(CONDITION_TRUE),
        )
        .build();
    let ks = wait_for_kustomization_ready(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();
    assert_eq!(ks.spec.source_ref.kind, "GitRepository");
    assert_eq!(ks.status.unwrap().observed_generation, Some(2));
}
