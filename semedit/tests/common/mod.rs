use tracing_subscriber::{fmt, EnvFilter};

/// Routes editor trace events to the test output. Filter with `RUST_LOG=semedit=trace`.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
