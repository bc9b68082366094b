use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Default bearer token lifetime: 7 days.
const DEFAULT_TOKEN_TTL_HOURS: i64 = 168;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. `JWT_SECRET` / `DATABASE_URL` (deployment-facing names)
    /// 2. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Fails when `jwt.secret` or `database.url` resolves to nothing; the
    /// process must not come up unauthenticated or unconnected.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = ConfigBuilder::builder()
            .set_default("server.http_port", 3000)?
            .set_default("jwt.expiration_hours", DEFAULT_TOKEN_TTL_HOURS)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"));

        // JWT_SECRET and DATABASE_URL are the names deployments actually set
        if let Ok(secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", secret)?;
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;

        Ok(config)
    }
}
