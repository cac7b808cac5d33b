//! Helpers shared by the service crates' router tests.

pub mod http_test_utils;
pub mod test_logging;
