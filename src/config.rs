use std::env;

/// AppConfig
///
/// Holds the application's entire configuration state. The struct is immutable
/// once loaded and is shared across all requests through the application state
/// (pulled out of it via FromRef where needed, e.g. by the auth extractor).
#[derive(Clone)]
pub struct AppConfig {
    // Database host, e.g. "localhost".
    pub db_host: String,
    // Database port. Postgres default is 5432.
    pub db_port: u16,
    // Database role used for all connections.
    pub db_user: String,
    // Password for the database role.
    pub db_password: String,
    // Name of the database holding the products table.
    pub db_name: String,
    // The shared secret every request must present as a bearer token.
    pub api_token: String,
    // TCP port the HTTP server listens on.
    pub port: u16,
    // Runtime environment marker. Controls log formatting and fallbacks.
    pub env: Env,
}

/// Env
///
/// Distinguishes local development (pretty logs, permissive fallbacks) from
/// production (JSON logs, mandatory secrets).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Safe, non-panicking values for test setup. Tests that need a specific
    /// token or port override the fields directly.
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "postgres".to_string(),
            db_password: "password".to_string(),
            db_name: "inventory_test".to_string(),
            api_token: "local-dev-token".to_string(),
            port: 3000,
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads all settings from environment variables at startup.
    ///
    /// # Panics
    /// Panics if a variable required in the current environment is missing or
    /// malformed. Production demands every database setting and the API token
    /// explicitly; local development falls back to Docker-friendly defaults.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("FATAL: PORT must be a valid TCP port number");

        let db_port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .expect("FATAL: DB_PORT must be a valid TCP port number");

        match env {
            Env::Local => Self {
                db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                db_port,
                db_user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                db_password: env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string()),
                db_name: env::var("DB_NAME").unwrap_or_else(|_| "inventory".to_string()),
                // A fallback token keeps local setups running, but the real
                // value should still come from .env.
                api_token: env::var("API_TOKEN").unwrap_or_else(|_| "local-dev-token".to_string()),
                port,
                env: Env::Local,
            },
            Env::Production => Self {
                db_host: env::var("DB_HOST").expect("FATAL: DB_HOST required in production"),
                db_port,
                db_user: env::var("DB_USER").expect("FATAL: DB_USER required in production"),
                db_password: env::var("DB_PASSWORD")
                    .expect("FATAL: DB_PASSWORD required in production"),
                db_name: env::var("DB_NAME").expect("FATAL: DB_NAME required in production"),
                api_token: env::var("API_TOKEN").expect("FATAL: API_TOKEN required in production"),
                port,
                env: Env::Production,
            },
        }
    }

    /// Assembles the Postgres connection URL from the discrete settings.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
