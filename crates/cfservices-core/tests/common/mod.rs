//! Shared helpers for integration tests

use cfservices_core::{Services, Source};
use tracing_subscriber::EnvFilter;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Services reading fixed text reported as `VCAP_SERVICES`.
#[allow(dead_code)]
pub fn services(text: impl Into<String>) -> Services {
    init_tracing();
    Services::from_source(Source::inline("VCAP_SERVICES", text))
}
