//! Test logging bootstrap shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the tracing subscriber for a test binary.
///
/// Idempotent and race-safe: safe to call from every test. Verbosity comes
/// from `ENGINE_TEST_LOG`, falling back to `RUST_LOG`, defaulting to `warn`
/// so passing runs stay quiet.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("ENGINE_TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
