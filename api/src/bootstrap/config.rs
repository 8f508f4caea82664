use std::env;

const DEV_JWT_SECRET: &str = "development-secret-change-me";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expires_secs: i64,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);
        let frontend_url = env::var("FRONTEND_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://chirp.db".into());
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.into());
        let jwt_expires_secs = env::var("JWT_EXPIRES_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60 * 60);
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        if jwt_expires_secs <= 0 {
            anyhow::bail!("JWT_EXPIRES_SECS must be a positive number of seconds");
        }
        if database_max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }
        if is_production && (jwt_secret == DEV_JWT_SECRET || jwt_secret.len() < 16) {
            anyhow::bail!("JWT_SECRET must be set to a strong secret in production");
        }

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_expires_secs,
            is_production,
        })
    }
}
