//! Quiet, once-only tracing setup for tests.
//!
//! Unit tests call [`init`] from a `ctor` hook; integration tests call it at
//! the top of each test. Either way the subscriber is installed at most once
//! per process.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber.
///
/// The filter is taken from `CHECKERS_TEST_LOG`, then `RUST_LOG`, and
/// defaults to `warn` so normal runs stay silent. Selection handling logs at
/// `debug`, so `CHECKERS_TEST_LOG=checkers=debug` shows every tap.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("CHECKERS_TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
