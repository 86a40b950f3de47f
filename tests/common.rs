use alumni_server::api::{self, AppState};
use alumni_server::config::{
    AuthConfig, Config, MessagingConfig, ServerConfig, StorageConfig, WsConfig,
};
use alumni_server::storage::sqlite::SqliteGateway;
use alumni_server::storage::{self, Backend, StorageGateway};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Once;
use tokio::sync::watch;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("alumni_server=debug".parse().unwrap())
            .add_directive("sqlx=warn".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("tungstenite=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // 0 means let OS choose
            cors_origins: vec!["*".to_string()],
            shutdown_timeout_secs: 10,
        },
        storage: StorageConfig {
            backend: Backend::Sqlite,
            database_url: "sqlite::memory:".to_string(),
            mongo_database: "alumni_network".to_string(),
        },
        auth: AuthConfig { jwt_secret: "test_secret".to_string(), token_ttl_days: 7 },
        messaging: MessagingConfig { conversation_fetch_cap: 1000 },
        websocket: WsConfig { outbound_buffer_size: 32 },
    }
}

/// Opens a fresh in-memory SQLite gateway with migrations applied.
#[allow(dead_code)]
pub async fn test_gateway(conversation_fetch_cap: i64) -> SqliteGateway {
    setup_tracing();
    let pool = storage::sqlite::connect("sqlite::memory:").await.expect("in-memory SQLite");
    SqliteGateway::new(pool, conversation_fetch_cap)
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub state: AppState,
    // Keeps the shutdown watch channel open for the life of the test server.
    _shutdown_tx: watch::Sender<bool>,
}

impl TestApp {
    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn ws_url(&self, user_id: &str) -> String {
        format!("ws://{}/ws/{}", self.addr, user_id)
    }
}

/// Boots a full server on an OS-assigned port, backed by in-memory SQLite
/// with the event catalog seeded.
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    setup_tracing();
    let config = test_config();

    let pool = storage::sqlite::connect("sqlite::memory:").await.expect("in-memory SQLite");
    let gateway: Arc<dyn StorageGateway> =
        Arc::new(SqliteGateway::new(pool, config.messaging.conversation_fetch_cap));
    storage::seed::seed_event_catalog(gateway.as_ref()).await.expect("seed catalog");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let state = AppState::new(config, gateway, shutdown_rx);
    let app = api::app_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });

    TestApp { addr, client: reqwest::Client::new(), state, _shutdown_tx: shutdown_tx }
}

/// Registers an account over HTTP and returns its `(token, user_id)`.
#[allow(dead_code)]
pub async fn register_user(app: &TestApp, full_name: &str, email: &str) -> (String, String) {
    let response = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "full_name": full_name,
            "email": email,
            "password": "password12345",
            "passout_year": 2015,
            "current_location": "San Francisco",
            "current_company": "Acme Corp",
            "domain": "Engineering",
            "phone": "(555) 123-4567",
        }))
        .send()
        .await
        .expect("register request");
    assert_eq!(response.status(), 200, "registration should succeed");

    let body: serde_json::Value = response.json().await.expect("register body");
    let token = body["token"].as_str().expect("token").to_string();
    let user_id = body["user"]["id"].as_str().expect("user id").to_string();
    (token, user_id)
}
