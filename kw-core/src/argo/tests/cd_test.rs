use kw_api::argo::cd::*;

use super::*;
use crate::argo::cd::*;

fn test_application(health: Option<&str>, sync: Option<&str>) -> Application {
    let mut app = Application::new(
        TEST_NAME,
        ApplicationSpec {
            project: "default".into(),
            source: Some(ApplicationSource {
                repo_url: "https://github.com/argoproj/argocd-example-apps".into(),
                path: Some("guestbook".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    app.metadata.namespace = Some(TEST_NAMESPACE.into());
    app.status = Some(ApplicationStatus {
        health: HealthStatus { status: health.map(String::from), ..Default::default() },
        sync: SyncStatus { status: sync.map(String::from), ..Default::default() },
        ..Default::default()
    });
    app
}

#[rstest]
#[case::healthy_synced(Some(HEALTH_STATUS_HEALTHY), Some(SYNC_STATUS_SYNCED), true)]
#[case::healthy_out_of_sync(Some(HEALTH_STATUS_HEALTHY), Some(SYNC_STATUS_OUT_OF_SYNC), false)]
#[case::progressing(Some(HEALTH_STATUS_PROGRESSING), Some(SYNC_STATUS_SYNCED), false)]
#[case::unknown(None, None, false)]
fn test_is_application_healthy_and_synced(
    #[case] health: Option<&str>,
    #[case] sync: Option<&str>,
    #[case] expected: bool,
) {
    assert_eq!(is_application_healthy_and_synced(&test_application(health, sync)), expected);
}

#[rstest]
fn test_application_set_ready() {
    let mut appset = ApplicationSet::new(TEST_NAME, Default::default());
    assert!(!appset.is_ready());

    appset.status = Some(ApplicationSetStatus {
        conditions: vec![
            Condition::new("ErrorOccurred", "False"),
            Condition::new(APPLICATION_SET_RESOURCES_UP_TO_DATE, CONDITION_TRUE),
        ],
        ..Default::default()
    });
    assert!(appset.is_ready());
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_application_healthy_and_synced() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            argo_path("applications", TEST_NAME),
            test_application(Some(HEALTH_STATUS_HEALTHY), Some(SYNC_STATUS_SYNCED)),
        )
        .build();
    let app = wait_for_application_healthy_and_synced(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();
    assert_eq!(app.spec.project, "default");
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_application_degraded_times_out() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            argo_path("applications", TEST_NAME),
            test_application(Some(HEALTH_STATUS_DEGRADED), Some(SYNC_STATUS_SYNCED)),
        )
        .build();
    assert_timed_out(wait_for_application_healthy_and_synced(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT).await);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_app_project_exists() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let project = AppProject::new(
        TEST_NAME,
        AppProjectSpec { source_repos: vec!["*".into()], ..Default::default() },
    );
    fake_apiserver.handle_get(argo_path("appprojects", TEST_NAME), project).build();
    let project = wait_for_app_project_exists(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();
    assert_eq!(project.spec.source_repos, vec!["*"]);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_applications() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let apps = vec![test_application(None, None)];
    fake_apiserver
        .handle_list(
            format!("/apis/argoproj.io/v1alpha1/namespaces/{TEST_NAMESPACE}/applications"),
            list_body("argoproj.io/v1alpha1", "Application", &apps),
        )
        .build();
    let res = list_applications(client, TEST_NAMESPACE).await.unwrap();
    fake_apiserver.assert();
    assert_eq!(res[0].namespaced_name(), format!("{TEST_NAMESPACE}/{TEST_NAME}"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_application_controller_shape() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            argo_path("applications", TEST_NAME),
            raw_argo_application(HEALTH_STATUS_HEALTHY, SYNC_STATUS_SYNCED),
        )
        .build();
    let app = wait_for_application_healthy_and_synced(client, TEST_NAMESPACE, TEST_NAME, TEST_TIMEOUT)
        .await
        .unwrap();
    fake_apiserver.assert();

    let source = app.spec.source.unwrap();
    assert_eq!(source.repo_url, "https://github.com/argoproj/argocd-example-apps.git");
    assert_eq!(source.target_revision.as_deref(), Some("HEAD"));
    let status = app.status.unwrap();
    assert_eq!(status.conditions[0].type_, "SharedResourceWarning");
}

#[rstest]
fn test_application_controller_shape_out_of_sync() {
    let app: Application =
        serde_json::from_value(raw_argo_application(HEALTH_STATUS_HEALTHY, SYNC_STATUS_OUT_OF_SYNC)).unwrap();
    assert!(!is_application_healthy_and_synced(&app));
}
