use crate::api::AppState;
use axum::{
    extract::{
        Path, State,
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tracing::Instrument;
use uuid::Uuid;

/// Upgrades the live-delivery channel for the user identity in the path.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, user_id))
}

async fn handle_socket(socket: WebSocket, state: AppState, user_id: String) {
    let span = tracing::info_span!(
        "websocket_session",
        user_id = %user_id,
        ws.session_id = %Uuid::new_v4()
    );

    async move {
        tracing::info!("WebSocket connected");

        let (outbound_tx, mut outbound_rx) =
            tokio::sync::mpsc::channel(state.config.websocket.outbound_buffer_size);
        // The registry owns the only strong sender. The session keeps a weak
        // handle for teardown, so a replacement dropping the registry's
        // sender actually closes this channel.
        let outbound_weak = outbound_tx.downgrade();
        state.registry.connect(&user_id, outbound_tx);

        let (mut ws_sink, mut ws_stream) = socket.split();
        let mut shutdown_rx = state.shutdown_rx.clone();

        loop {
            if *shutdown_rx.borrow() {
                tracing::info!("Shutdown signal received, closing WebSocket");
                let _ = ws_sink
                    .send(WsMessage::Close(Some(axum::extract::ws::CloseFrame {
                        code: axum::extract::ws::close_code::AWAY,
                        reason: "Server shutting down".into(),
                    })))
                    .await;
                break;
            }

            tokio::select! {
                biased;

                _ = shutdown_rx.changed() => {}

                event = outbound_rx.recv() => {
                    match event {
                        Some(event) => {
                            let Ok(payload) = serde_json::to_string(&event) else { continue };
                            if ws_sink.send(WsMessage::Text(payload.into())).await.is_err() {
                                break;
                            }
                        }
                        // Sender dropped: this session was replaced by a
                        // newer connection for the same identity.
                        None => break,
                    }
                }

                msg = ws_stream.next() => {
                    match msg {
                        Some(Ok(WsMessage::Close(_))) | None => break,
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "WebSocket error");
                            break;
                        }
                        // Inbound traffic is received but not acted upon.
                        Some(Ok(_)) => {}
                    }
                }
            }
        }

        let _ = ws_sink.close().await;
        // If the weak handle no longer upgrades, the registry already
        // dropped this session's sender; there is nothing left to remove.
        if let Some(channel) = outbound_weak.upgrade() {
            state.registry.disconnect_channel(&user_id, &channel);
        }
        tracing::info!("WebSocket disconnected");
    }
    .instrument(span)
    .await;
}
