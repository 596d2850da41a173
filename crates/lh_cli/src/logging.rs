use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub const DEFAULT_FILTER: &str = "info";

/// Install the fmt subscriber once. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter));
            tracing_subscriber::fmt().with_env_filter(filter).init();
        });
    }
}
