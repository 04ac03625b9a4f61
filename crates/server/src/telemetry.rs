use tower_http::trace::{HttpMakeClassifier, TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,server=debug,tower_http=info";

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG` for filtering. Returns an error if a subscriber is
/// already installed.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// HTTP request/response spans for the REST router.
pub fn http_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
