/// Output format for tracing logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Connection pool size (default: `10`).
    pub db_max_connections: u32,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `DATABASE_URL`         | (required)                 |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let log_format = LogFormat::parse(
            &std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".into()),
        );

        Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            log_format,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
