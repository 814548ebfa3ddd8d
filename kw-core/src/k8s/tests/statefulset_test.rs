use super::*;

const STS_PATH: &str = "/apis/apps/v1/namespaces/test-namespace/statefulsets/test-object";

#[rstest]
#[case::all_up_to_date(3, 3, 3, 3, true)]
#[case::rolling(3, 1, 3, 3, false)]
#[case::not_available(3, 3, 2, 3, false)]
#[case::old_revision(3, 3, 3, 2, false)]
#[case::scaled_to_zero(0, 0, 0, 0, true)]
fn test_is_stateful_set_up_to_date(
    #[case] replicas: i32,
    #[case] updated: i32,
    #[case] available: i32,
    #[case] current: i32,
    #[case] expected: bool,
) {
    let sts = test_stateful_set(replicas, updated, available, current);
    assert_eq!(is_stateful_set_up_to_date(&sts), expected);
}

#[rstest]
fn test_is_stateful_set_up_to_date_no_status() {
    let mut sts = test_stateful_set(1, 1, 1, 1);
    sts.status = None;
    assert!(!is_stateful_set_up_to_date(&sts));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_stateful_set() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(STS_PATH.into(), test_stateful_set(2, 2, 2, 2))
        .build();
    let sts = get_stateful_set(client, TEST_NAMESPACE, TEST_NAME).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(sts.spec.unwrap().replicas, Some(2));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_stateful_set_ready() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(STS_PATH.into(), test_stateful_set(2, 2, 2, 2))
        .build();
    wait_for_stateful_set_ready(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_stateful_sets_label_selector() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let objs = vec![test_stateful_set(1, 1, 1, 1)];
    fake_apiserver
        .handle(move |when, then| {
            when.path(format!("/apis/apps/v1/namespaces/{TEST_NAMESPACE}/statefulsets"))
                .query_param("labelSelector", "app=db");
            then.json_body(list_body("apps/v1", "StatefulSet", &objs));
        })
        .build();
    let lp = ListParams::default().labels("app=db");
    let res = list_stateful_sets(client, TEST_NAMESPACE, &lp).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(res.len(), 1);
}
