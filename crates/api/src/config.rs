use crate::auth::jwt::JwtConfig;

/// Default upstream for the GitHub contributions proxy.
const DEFAULT_CONTRIBUTIONS_URL: &str = "https://github-contributions-api.jogruber.de/v4";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the upstream GitHub contributions API.
    pub github_contributions_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                        |
    /// |----------------------------|------------------------------------------------|
    /// | `HOST`                     | `0.0.0.0`                                      |
    /// | `PORT`                     | `3000`                                         |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`                        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                           |
    /// | `GITHUB_CONTRIBUTIONS_URL` | `https://github-contributions-api.jogruber.de/v4` |
    pub fn from_env() -> Self {
        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            github_contributions_url: env_or("GITHUB_CONTRIBUTIONS_URL", DEFAULT_CONTRIBUTIONS_URL),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
