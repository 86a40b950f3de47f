use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Honors `RUST_LOG` when set; defaults to info-level output with noisy
/// dependencies quieted.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,tower=warn,hyper=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
