use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the fmt subscriber once per test binary so tracing output shows
/// up under `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}
