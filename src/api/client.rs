//! HTTP client for communicating with the Langfuse public API.

use crate::utils::config::{
    API_PREFIX, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PUBLIC_KEY_ENV, SECRET_KEY_ENV,
};
use crate::utils::error::ApiError;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Connection settings for the API
#[derive(Clone)]
pub struct ClientConfig {
    pub public_key: String,
    pub secret_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for the default cloud endpoint
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read credentials and an optional base URL from the environment
    ///
    /// # Errors
    /// * `ApiError::MissingCredentials` - either key is unset or empty
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ApiError::MissingCredentials(format!("{} must be set", name)))
        };

        let mut config = Self::new(required(PUBLIC_KEY_ENV)?, required(SECRET_KEY_ENV)?);

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.is_empty()) {
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Authenticated transport shared by every resource client
///
/// Each call is a single attempt; retrying is left to the caller.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        if config.public_key.is_empty() || config.secret_key.is_empty() {
            return Err(ApiError::MissingCredentials(
                "public and secret key must both be non-empty".to_string(),
            ));
        }

        // Fail early on a malformed base URL rather than on the first request
        build_url(&config.base_url, &[])?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// URL of an endpoint under `/api/public`, each segment percent-escaped
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        build_url(&self.config.base_url, segments)
    }

    /// GET a JSON document
    ///
    /// # Errors
    /// * `ApiError::Status` - non-2xx response
    /// * `ApiError::EmptyResponse` - success status without a body
    /// * `ApiError::DecodeFailed` - body is not the expected JSON
    pub fn get_json<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        let (status, body) = self.dispatch(self.request(Method::GET, url))?;

        if body.trim().is_empty() {
            return Err(ApiError::EmptyResponse {
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(ApiError::DecodeFailed)
    }

    /// Send a JSON body, ignoring any response payload
    pub fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<(), ApiError> {
        let payload = serde_json::to_vec(body).map_err(ApiError::EncodeFailed)?;
        self.dispatch(self.request(method, url).body(payload))?;
        Ok(())
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);

        self.client
            .request(method, url)
            .basic_auth(&self.config.public_key, Some(&self.config.secret_key))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
    }

    fn dispatch(&self, request: RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let response = request.send().map_err(ApiError::RequestFailed)?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok((status, String::new()));
        }

        let body = response.text().map_err(ApiError::RequestFailed)?;
        debug!("HTTP {} ({} bytes)", status, body.len());
        Ok((status, body))
    }
}

/// Join `segments` under `<base_url>/api/public`
pub fn build_url(base_url: &str, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base URL", base_url)))?
        .pop_if_empty()
        .extend(API_PREFIX.iter().chain(segments.iter()));

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_build_url_escapes_segments() {
        let url = build_url("https://cloud.langfuse.com", &["traces", "a/b c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.langfuse.com/api/public/traces/a%2Fb%20c"
        );
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let url = build_url("http://localhost:3000/langfuse/", &["health"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/langfuse/api/public/health");
    }

    #[test]
    fn test_build_url_rejects_garbage() {
        assert!(matches!(
            build_url("not a url", &["health"]),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (PUBLIC_KEY_ENV, "pk-lf-1"),
            (SECRET_KEY_ENV, "sk-lf-1"),
            (BASE_URL_ENV, "http://localhost:3000"),
        ]
        .into_iter()
        .collect();

        let config =
            ClientConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.public_key, "pk-lf-1");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_config_from_lookup_missing_secret() {
        let result = ClientConfig::from_lookup(|name| {
            (name == PUBLIC_KEY_ENV).then(|| "pk-lf-1".to_string())
        });
        assert!(matches!(result, Err(ApiError::MissingCredentials(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new("pk-lf-1", "sk-lf-secret");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("pk-lf-1"));
        assert!(!rendered.contains("sk-lf-secret"));
    }

    #[test]
    fn test_http_client_requires_keys() {
        let result = HttpClient::new(ClientConfig::new("", "sk"));
        assert!(matches!(result, Err(ApiError::MissingCredentials(_))));
    }
}
