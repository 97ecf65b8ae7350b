#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring `RUST_LOG`; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collect a byte view into a `String`
pub fn chars<I: IntoIterator<Item = u8>>(items: I) -> String {
    items.into_iter().map(char::from).collect()
}
