mod cd_test;

use kw_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use crate::prelude::*;
use crate::wait::WaitError;

fn argo_path(plural: &str, name: &str) -> String {
    format!("/apis/argoproj.io/v1alpha1/namespaces/{TEST_NAMESPACE}/{plural}/{name}")
}

fn assert_timed_out(res: anyhow::Result<impl std::fmt::Debug>) {
    let err = res.unwrap_err();
    assert!(matches!(err.downcast_ref::<WaitError>(), Some(WaitError::Timeout(_))), "unexpected error: {err}");
}
