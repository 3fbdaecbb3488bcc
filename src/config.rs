use std::env;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub app_name: String,
    pub max_connections: u32,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let session_key = env::var("SESSION_KEY").ok();
        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "Employee Management".to_string());
        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);
        let seed_demo = env::var("SEED_DEMO")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Config {
            database_url,
            bind_addr,
            session_key,
            app_name,
            max_connections,
            seed_demo,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// App name shared with every rendered page.
#[derive(Debug, Clone)]
pub struct AppName(pub String);
