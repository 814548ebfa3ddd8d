mod statefulset_test;

use kw_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::prelude::*;
