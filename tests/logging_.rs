use tracing::Level;

/// Installs a test-writer subscriber once per test binary. Later calls are no-ops.
pub fn init() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(Level::TRACE).try_init();
}
