use crate::config::Config;
use crate::services::account_service::AccountService;
use crate::services::directory_service::DirectoryService;
use crate::services::donation_service::DonationService;
use crate::services::event_service::EventService;
use crate::services::feedback_service::FeedbackService;
use crate::services::message_service::MessageService;
use crate::services::registry::ConnectionRegistry;
use crate::storage::StorageGateway;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod dashboard;
pub mod donations;
pub mod events;
pub mod feedback;
pub mod messages;
pub mod middleware;
pub mod profile;
pub mod schemas;
pub mod users;
pub mod ws;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<dyn StorageGateway>,
    pub account_service: AccountService,
    pub directory_service: DirectoryService,
    pub event_service: EventService,
    pub message_service: MessageService,
    pub donation_service: DonationService,
    pub feedback_service: FeedbackService,
    pub registry: ConnectionRegistry,
    pub shutdown_rx: tokio::sync::watch::Receiver<bool>,
}

impl AppState {
    /// Wires every service against the shared persistence gateway. The
    /// connection registry is created here and handed to the message
    /// service explicitly; nothing reaches it as ambient global state.
    #[must_use]
    pub fn new(
        config: Config,
        gateway: Arc<dyn StorageGateway>,
        shutdown_rx: tokio::sync::watch::Receiver<bool>,
    ) -> Self {
        let registry = ConnectionRegistry::new();

        Self {
            account_service: AccountService::new(config.auth.clone(), Arc::clone(&gateway)),
            directory_service: DirectoryService::new(Arc::clone(&gateway)),
            event_service: EventService::new(Arc::clone(&gateway)),
            message_service: MessageService::new(Arc::clone(&gateway), registry.clone()),
            donation_service: DonationService::new(Arc::clone(&gateway)),
            feedback_service: FeedbackService::new(Arc::clone(&gateway)),
            registry,
            gateway,
            config,
            shutdown_rx,
        }
    }
}

async fn root() -> Json<schemas::Ack> {
    Json(schemas::Ack::new("Global Horizon University Alumni Network API"))
}

/// Configures and returns the application router.
pub fn app_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(root))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/user/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/events", get(events::list_events))
        .route("/events/{event_id}/register", post(events::register_for_event))
        .route("/users/search", get(users::search))
        .route("/messages", post(messages::send_message))
        .route("/messages/{other_user_id}", get(messages::get_conversation))
        .route("/donations", post(donations::create_donation))
        .route("/feedback", post(feedback::submit_feedback));

    Router::new()
        .nest("/api", api_routes)
        .route("/ws/{user_id}", get(ws::websocket_handler))
        .layer(cors_layer(&state.config.server.cors_origins))
        .layer(PropagateRequestIdLayer::new(axum::http::HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "user_id" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            middleware::MakeRequestUuid,
        ))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let list = origins.iter().filter_map(|origin| origin.parse::<HeaderValue>().ok());
        cors.allow_origin(AllowOrigin::list(list))
    }
}
