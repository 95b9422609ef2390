use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Install the global tracing subscriber. Level comes from RUST_LOG,
/// falling back to debug in debug builds and info in release.
pub fn init_tracing(service_name: &'static str) {
    let is_release = cfg!(not(debug_assertions));
    let default_level = if is_release { "info" } else { "debug" };

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .pretty();

    Registry::default().with(filter_layer).with(fmt_layer).init();

    info!("{} tracing initialized", service_name);
}
