use crate::api::{ApiResult, AppError, Channel, Team};
use crate::config::ServerConfig;
use crate::error::{MmctlError, Result};
use async_trait::async_trait;
use reqwest::header::IF_NONE_MATCH;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

/// Read-only lookups the channel resolver needs from the server.
///
/// Every call takes an etag; an empty string asks for an unconditional fetch.
#[async_trait]
pub trait ChannelApi: Send + Sync {
    async fn get_channel(&self, channel_id: &str, etag: &str) -> ApiResult<Channel>;

    async fn get_team(&self, team_id: &str, etag: &str) -> ApiResult<Team>;

    /// Look a channel up by its handle within a team, archived channels included
    async fn get_channel_by_name_include_deleted(
        &self,
        channel_name: &str,
        team_id: &str,
        etag: &str,
    ) -> ApiResult<Channel>;
}

/// `ChannelApi` over the server's REST API v4
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    auth_token: String,
}

impl HttpClient {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| MmctlError::Config(format!("Invalid MM_SERVICE_URL: {}", e)))?;

        if base_url.cannot_be_a_base() {
            return Err(MmctlError::Config(format!(
                "Invalid MM_SERVICE_URL: {} cannot be used as a base",
                config.url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token,
        })
    }

    /// Build `<base>/api/v4/<segments...>`, percent-encoding each segment
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "v4"]).extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, etag: &str) -> ApiResult<T> {
        tracing::debug!(url = %url, etag = %etag, "Sending GET request");

        let mut request = self.client.get(url.clone()).bearer_auth(&self.auth_token);
        if !etag.is_empty() {
            request = request.header(IF_NONE_MATCH, etag);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(url = %url, error = %e, "Request failed before a response");
            AppError::transport(e)
        })?;

        let status = response.status();

        if status == StatusCode::NOT_MODIFIED {
            return Err(AppError::new(
                "api.client.not_modified",
                "resource not modified",
                "",
                status.as_u16(),
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!(url = %url, error = %e, "Failed to read error body");
                String::new()
            });
            tracing::debug!(url = %url, status = %status, "Server returned an error");
            return Err(AppError::from_response(status.as_u16(), &body));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::new(
                "api.client.decode",
                "could not decode response body",
                e.to_string(),
                status.as_u16(),
            )
        })
    }
}

#[async_trait]
impl ChannelApi for HttpClient {
    async fn get_channel(&self, channel_id: &str, etag: &str) -> ApiResult<Channel> {
        let url = self.endpoint(&["channels", channel_id]);
        self.get_json(url, etag).await
    }

    async fn get_team(&self, team_id: &str, etag: &str) -> ApiResult<Team> {
        let url = self.endpoint(&["teams", team_id]);
        self.get_json(url, etag).await
    }

    async fn get_channel_by_name_include_deleted(
        &self,
        channel_name: &str,
        team_id: &str,
        etag: &str,
    ) -> ApiResult<Channel> {
        let mut url = self.endpoint(&["teams", team_id, "channels", "name", channel_name]);
        url.query_pairs_mut().append_pair("include_deleted", "true");
        self.get_json(url, etag).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> HttpClient {
        HttpClient::new(ServerConfig {
            url: url.to_string(),
            auth_token: "token".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_channel_endpoint() {
        let client = client_for("https://chat.example.com");

        assert_eq!(
            client.endpoint(&["channels", "abc"]).as_str(),
            "https://chat.example.com/api/v4/channels/abc"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client_for("https://example.com/chat/");

        assert_eq!(
            client.endpoint(&["teams", "t1"]).as_str(),
            "https://example.com/chat/api/v4/teams/t1"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client_for("http://localhost:8065");

        assert_eq!(
            client.endpoint(&["teams", "a/b", "channels", "name", "x y"]).as_str(),
            "http://localhost:8065/api/v4/teams/a%2Fb/channels/name/x%20y"
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = HttpClient::new(ServerConfig {
            url: "not a url".to_string(),
            auth_token: "token".to_string(),
            request_timeout_secs: 5,
        });

        assert!(matches!(result, Err(MmctlError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Reserve a free port, then release it so nothing is listening there
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client_for(&format!("http://127.0.0.1:{}", port));

        let err = client.get_channel("abc", "").await.unwrap_err();

        assert_eq!(err.status_code, 0);
        assert_eq!(err.id, "api.client.request");
    }
}
