use crate::error::{MmctlError, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub url: String,
    pub auth_token: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// 1 resolves references strictly one after another
    pub max_concurrent_requests: usize,
}

/// Load settings from the process environment, reading `.env` first if present
pub fn load_settings() -> Result<Settings> {
    dotenvy::dotenv().ok();

    load_settings_from(|key| std::env::var(key).ok())
}

/// Load settings through an arbitrary variable lookup
pub fn load_settings_from<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let url = lookup("MM_SERVICE_URL")
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| MmctlError::Config("MM_SERVICE_URL not set".to_string()))?;

    let server = ServerConfig {
        url: url.trim_end_matches('/').to_string(),
        auth_token: lookup("MM_AUTH_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| MmctlError::Config("MM_AUTH_TOKEN not set".to_string()))?,
        request_timeout_secs: lookup("MM_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| MmctlError::Config("Invalid MM_REQUEST_TIMEOUT_SECS".to_string()))?,
    };

    let resolver = ResolverConfig {
        max_concurrent_requests: lookup("MM_MAX_CONCURRENT_REQUESTS")
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .map_err(|_| MmctlError::Config("Invalid MM_MAX_CONCURRENT_REQUESTS".to_string()))?,
    };

    Ok(Settings { server, resolver })
}
