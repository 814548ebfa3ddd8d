use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use assertables::*;

use super::*;
use crate::wait::*;

const STS_PATH: &str = "/apis/apps/v1/namespaces/test-namespace/statefulsets/test-object";

#[fixture]
fn opts() -> WaitOptions {
    WaitOptions::with_timeout(TEST_TIMEOUT).interval(TEST_INTERVAL)
}

#[rstest]
fn test_wait_options_default() {
    let opts = WaitOptions::default();
    assert_eq!(opts.interval, DEFAULT_POLL_INTERVAL);
    assert!(opts.immediate);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_poll_until_eventually_satisfied(opts: WaitOptions) {
    let attempts = AtomicUsize::new(0);
    let attempts = &attempts;
    let res = poll_until(&opts, "counter", move || async move {
        let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        Ok::<_, anyhow::Error>((n >= 3).then_some(n))
    })
    .await
    .unwrap();
    assert_eq!(res, 3);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_poll_until_retries_errors(opts: WaitOptions) {
    let attempts = AtomicUsize::new(0);
    let attempts = &attempts;
    let res = poll_until(&opts, "flaky", move || async move {
        if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
            bail!("connection refused");
        }
        Ok(Some("done"))
    })
    .await
    .unwrap();
    assert_eq!(res, "done");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_poll_until_timeout_reports_last_error(opts: WaitOptions) {
    let err = poll_until(&opts, "always-broken", || async { Err::<Option<()>, _>(anyhow!("the flux capacitor is broken")) })
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert_contains!(msg, "always-broken");
    assert_contains!(msg, "the flux capacitor is broken");
    assert!(matches!(err.downcast_ref::<WaitError>(), Some(WaitError::Timeout(_))));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_poll_until_not_immediate(opts: WaitOptions) {
    let attempts = AtomicUsize::new(0);
    let attempts = &attempts;
    let opts = opts.immediate(false);
    let res = poll_until(&opts, "delayed", move || async move {
        attempts.fetch_add(1, Ordering::SeqCst);
        Ok::<_, anyhow::Error>(Some(()))
    })
    .await;
    assert_ok!(res);
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_ready_immediately(opts: WaitOptions) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(STS_PATH.into(), test_stateful_set(3, 3, 3, 3))
        .build();
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, TEST_NAMESPACE);
    let sts = wait_for_ready(&api, TEST_NAME, &opts).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(sts.name_any(), TEST_NAME);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_ready_times_out(opts: WaitOptions) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(STS_PATH.into(), test_stateful_set(3, 1, 1, 3))
        .build();
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, TEST_NAMESPACE);
    assert_timed_out(wait_for_ready(&api, TEST_NAME, &opts).await);
    fake_apiserver.assert_hits_at_least(2);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_exists_not_found(opts: WaitOptions) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_not_found(STS_PATH.into()).build();
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, TEST_NAMESPACE);
    let err = wait_for_exists(&api, TEST_NAME, &opts).await.unwrap_err();
    assert_contains!(err.to_string(), "last error");
    fake_apiserver.assert_hits_at_least(2);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_predicate(opts: WaitOptions) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(STS_PATH.into(), test_stateful_set(3, 1, 1, 3))
        .build();
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, TEST_NAMESPACE);
    let sts = wait_for(&api, TEST_NAME, &opts, |sts| sts.status.as_ref().is_some_and(|s| s.replicas == 3))
        .await
        .unwrap();
    fake_apiserver.assert();
    assert_eq!(sts.status.unwrap().updated_replicas, Some(1));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_deleted(opts: WaitOptions) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_not_found(STS_PATH.into()).build();
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, TEST_NAMESPACE);
    wait_for_deleted(&api, TEST_NAME, &opts).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_deleted_still_present(opts: WaitOptions) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(STS_PATH.into(), test_stateful_set(1, 1, 1, 1))
        .build();
    let api = kube::Api::<appsv1::StatefulSet>::namespaced(client, TEST_NAMESPACE);
    assert_timed_out(wait_for_deleted(&api, TEST_NAME, &opts).await);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_namespaced() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let objs = vec![test_stateful_set(1, 1, 1, 1), test_stateful_set(2, 0, 0, 0)];
    fake_apiserver
        .handle_list(
            format!("/apis/apps/v1/namespaces/{TEST_NAMESPACE}/statefulsets"),
            list_body("apps/v1", "StatefulSet", &objs),
        )
        .build();
    let res: Vec<appsv1::StatefulSet> = list_namespaced(client, TEST_NAMESPACE, &ListParams::default())
        .await
        .unwrap();
    fake_apiserver.assert();
    assert_len_eq_x!(res, 2);
}
