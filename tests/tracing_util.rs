use tracing::Level;

/// Installs a thread-local subscriber that writes through the test harness
/// for as long as the guard lives.
pub struct TestTracing {
    _guard: tracing::subscriber::DefaultGuard,
}

impl TestTracing {
    pub fn init() -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
