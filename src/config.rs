use crate::storage::Backend;
use clap::{Args, Parser};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub storage: StorageConfig,

    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(flatten)]
    pub messaging: MessagingConfig,

    #[command(flatten)]
    pub websocket: WsConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "ALUMNI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "ALUMNI_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins; "*" allows any origin
    #[arg(long, env = "ALUMNI_CORS_ORIGINS", default_value = "*", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Grace period for in-flight requests during shutdown
    #[arg(long, env = "ALUMNI_SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct StorageConfig {
    /// Which persistence backend to run against
    #[arg(long, env = "ALUMNI_STORAGE_BACKEND", value_enum, default_value_t = Backend::Sqlite)]
    pub backend: Backend,

    /// Database connection URL (SQLite path or MongoDB URI, depending on backend)
    #[arg(long, env = "ALUMNI_DATABASE_URL", default_value = "sqlite:alumni.db")]
    pub database_url: String,

    /// MongoDB database name (document backend only)
    #[arg(long, env = "ALUMNI_MONGO_DATABASE", default_value = "alumni_network")]
    pub mongo_database: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthConfig {
    /// Secret key for JWT signing
    #[arg(long, env = "ALUMNI_JWT_SECRET")]
    pub jwt_secret: String,

    /// Access token time-to-live in days
    #[arg(long, env = "ALUMNI_TOKEN_TTL_DAYS", default_value_t = 7)]
    pub token_ttl_days: i64,
}

#[derive(Clone, Debug, Args)]
pub struct MessagingConfig {
    /// Maximum number of messages returned for a single conversation fetch.
    /// A retrieval cap, not a correctness property; conversations at this
    /// system's scale stay far below it.
    #[arg(long, env = "ALUMNI_CONVERSATION_FETCH_CAP", default_value_t = 1000)]
    pub conversation_fetch_cap: i64,
}

#[derive(Clone, Debug, Args)]
pub struct WsConfig {
    /// Size of the per-connection outbound event buffer
    #[arg(long, env = "ALUMNI_WS_OUTBOUND_BUFFER_SIZE", default_value_t = 32)]
    pub outbound_buffer_size: usize,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
