#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use alumni_server::api::AppState;
use alumni_server::config::Config;
use alumni_server::{api, storage, telemetry};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_tracing();

    let boot_span = tracing::info_span!("boot_server");
    let (listener, app, shutdown_rx) = async {
        // Phase 1: Infrastructure
        let gateway =
            storage::init_gateway(&config.storage, config.messaging.conversation_fetch_cap).await?;
        tracing::info!(backend = ?gateway.backend(), "Storage ready");

        storage::seed::seed_event_catalog(gateway.as_ref()).await?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        alumni_server::spawn_signal_handler(shutdown_tx);

        // Phase 2: Wiring
        let state = AppState::new(config.clone(), gateway, shutdown_rx.clone());
        let app = api::app_router(state);

        // Phase 3: Listener
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
        tracing::info!(address = %addr, "listening");
        let listener = tokio::net::TcpListener::bind(addr).await?;

        Ok::<_, anyhow::Error>((listener, app, shutdown_rx))
    }
    .instrument(boot_span)
    .await?;

    let mut serve_rx = shutdown_rx.clone();
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move {
            let _ = serve_rx.wait_for(|&stop| stop).await;
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
