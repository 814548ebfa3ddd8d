mod flux_test;
mod wait_test;

use kw_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use crate::errors::*;
use crate::prelude::*;
use crate::wait::WaitError;

fn assert_timed_out(res: anyhow::Result<impl std::fmt::Debug>) {
    let err = res.unwrap_err();
    assert!(matches!(err.downcast_ref::<WaitError>(), Some(WaitError::Timeout(_))), "unexpected error: {err}");
}

fn namespaced_path(group_version: &str, plural: &str, name: &str) -> String {
    format!("/apis/{group_version}/namespaces/{TEST_NAMESPACE}/{plural}/{name}")
}
