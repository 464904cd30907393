use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    /// Base URL of the notification service (no trailing slash).
    pub notifications_url: String,
    /// Base URL of the RBAC service (no trailing slash).
    pub rbac_url: String,
    pub rest_client_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "policies".to_string()),
            notifications_url: trim_base_url(
                env::var("NOTIFICATIONS_URL")
                    .unwrap_or_else(|_| "http://localhost:8085".to_string()),
            ),
            rbac_url: trim_base_url(
                env::var("RBAC_URL").unwrap_or_else(|_| "http://localhost:8086".to_string()),
            ),
            rest_client_timeout_secs: env::var("REST_CLIENT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("REST_CLIENT_TIMEOUT_SECS must be a valid number"),
        }
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://rbac:8080/".to_string()), "http://rbac:8080");
        assert_eq!(trim_base_url("http://rbac:8080".to_string()), "http://rbac:8080");
    }
}
