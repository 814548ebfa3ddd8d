use std::time::Duration;

pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_NAME: &str = "test-object";
pub const TEST_SECRET_NAME: &str = "test-object-tls";
pub const TEST_CONTEXT: &str = "test-context";

// Long enough for a handful of requests against the local mock server, short enough that tests
// exercising the timeout path don't drag
pub const TEST_TIMEOUT: Duration = Duration::from_millis(250);
pub const TEST_INTERVAL: Duration = Duration::from_millis(20);
