use std::env;

use secrecy::SecretString;

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_COMPLETION_MODEL: &str = "deepseek-chat";

#[derive(Clone, Debug)]
pub struct Config {
    pub completion_base_url: String,
    pub completion_api_key: SecretString,
    pub completion_model: String,
    pub completion_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            completion_base_url: env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_BASE_URL.to_string()),
            // A missing key is not rejected here; it surfaces as a provider
            // auth failure on the first completion call.
            completion_api_key: SecretString::from(
                env::var("COMPLETION_API_KEY").unwrap_or_default(),
            ),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_timeout_secs: env::var("COMPLETION_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            completion_base_url: "http://localhost:1".to_string(),
            completion_api_key: SecretString::from("test_api_key".to_string()),
            completion_model: "deepseek-chat".to_string(),
            completion_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
