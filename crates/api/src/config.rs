/// Where campground documents are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// Process-local map; contents are lost on shutdown.
    Memory,
}

impl StoreBackend {
    /// The `STORE_BACKEND` value selecting this backend.
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{name} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Store implementation to construct at startup.
    pub store_backend: StoreBackend,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Time allowed for closing the database pool after the server stops.
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                               |
    /// | `PORT`                 | `3000`                                  |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/yelp_camp`   |
    /// | `STORE_BACKEND`        | `postgres` (or `memory`)                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse("PORT", var("PORT", "3000"), "a valid port number")?;
        let database_url = var("DATABASE_URL", "postgres://localhost:5432/yelp_camp");

        let backend = var("STORE_BACKEND", "postgres");
        let store_backend = match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            _ => {
                return Err(ConfigError {
                    name: "STORE_BACKEND",
                    expected: "`postgres` or `memory`",
                    value: backend,
                })
            }
        };

        let request_timeout_secs = parse(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;
        let shutdown_timeout_secs = parse(
            "SHUTDOWN_TIMEOUT_SECS",
            var("SHUTDOWN_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            store_backend,
            request_timeout_secs,
            shutdown_timeout_secs,
        })
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        name,
        expected,
        value,
    })
}
