use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The `trace_init` function installs a [`tracing_subscriber`] formatter filtered by the
/// `RUST_LOG` environment variable.  Without `RUST_LOG`, we report `info` and above from this
/// crate and keep the graphics stack quiet unless it has something to complain about.
///
/// Calling it twice is harmless, the second call finds a subscriber already in place and leaves
/// it alone.
pub fn trace_init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jester=info,wgpu_core=warn,wgpu_hal=warn"));
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .is_ok()
    {
        tracing::trace!("Subscriber initialized.");
    }
}
