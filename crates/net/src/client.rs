//! HTTP client with connection pooling and retry logic

use pokerep_errors::{Error, NetworkError};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Network client configuration
#[derive(Debug, Clone)]
pub struct NetConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub retry_count: u32,
    pub retry_delay: Duration,
    pub user_agent: String,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            retry_count: 3,
            retry_delay: Duration::from_secs(1),
            user_agent: format!("pokerep/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&pokerep_config::NetworkConfig> for NetConfig {
    fn from(config: &pokerep_config::NetworkConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
            retry_count: config.retry_count,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            ..Self::default()
        }
    }
}

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct NetClient {
    client: Client,
    config: NetConfig,
}

impl NetClient {
    /// Create a new network client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client fails to
    /// initialize.
    pub fn new(config: NetConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| NetworkError::ConnectionRefused(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created with default
    /// settings.
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(NetConfig::default())
    }

    /// Execute a GET request and parse the JSON body
    ///
    /// GETs are idempotent, so they are retried on timeout, connection
    /// failure and server errors.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-2xx status, a transport failure after all
    /// retry attempts, or a body that is not valid JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value, Error> {
        let response = self.retry_request(|| self.client.get(url).send()).await?;
        Self::json_body(response).await
    }

    /// Execute a POST request with a JSON body and parse the JSON response
    ///
    /// Creation is not idempotent; the request is issued exactly once. An
    /// automatic retry here could generate a duplicate report.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-2xx status, a transport failure, or a
    /// body that is not valid JSON.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, Error> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Self::classify_transport_error)?;
        Self::json_body(response).await
    }

    /// Execute a DELETE request and parse the JSON response
    ///
    /// Issued exactly once; the caller decides how to react to the
    /// per-target outcome sequence.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-2xx status, a transport failure, or a
    /// body that is not valid JSON.
    pub async fn delete_json(&self, url: &str) -> Result<Value, Error> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(Self::classify_transport_error)?;
        Self::json_body(response).await
    }

    /// Stream a file to disk
    ///
    /// Used for artifact retrieval; returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the destination cannot be
    /// created, or a chunk cannot be read or written.
    pub async fn download_file(&self, url: &str, dest: &std::path::Path) -> Result<u64, Error> {
        use futures::StreamExt;

        let response = self.retry_request(|| self.client.get(url).send()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::http_error(status).into());
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| NetworkError::DownloadFailed(e.to_string()))?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| NetworkError::DownloadFailed(e.to_string()))?;
            tokio::io::AsyncWriteExt::write_all(&mut file, &chunk)
                .await
                .map_err(|e| NetworkError::DownloadFailed(e.to_string()))?;
            written += chunk.len() as u64;
        }

        Ok(written)
    }

    /// Check status and parse the response body as JSON.
    ///
    /// A non-2xx status fails the call without touching the body. On
    /// success the raw body is logged at debug level for diagnostics.
    async fn json_body(response: Response) -> Result<Value, Error> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::http_error(status).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;
        tracing::debug!(status = %status, body = %body, "API response");

        serde_json::from_str(&body)
            .map_err(|e| NetworkError::InvalidJson(e.to_string()).into())
    }

    fn http_error(status: StatusCode) -> NetworkError {
        NetworkError::HttpError {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        }
    }

    fn classify_transport_error(e: reqwest::Error) -> Error {
        if e.is_timeout() {
            NetworkError::Timeout {
                url: e
                    .url()
                    .map(std::string::ToString::to_string)
                    .unwrap_or_default(),
            }
            .into()
        } else if e.is_connect() {
            NetworkError::ConnectionRefused(e.to_string()).into()
        } else {
            NetworkError::RequestFailed(e.to_string()).into()
        }
    }

    /// Execute a request with retries
    async fn retry_request<F, Fut>(&self, mut f: F) -> Result<Response, Error>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<Response, reqwest::Error>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.retry_count {
            if attempt > 0 {
                tokio::time::sleep(self.config.retry_delay * attempt).await;
            }

            match f().await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    let retryable = Self::should_retry(&e);
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        match last_error {
            Some(e) => Err(Self::classify_transport_error(e)),
            None => Err(NetworkError::RequestFailed("unknown error".to_string()).into()),
        }
    }

    /// Determine if an error should be retried
    fn should_retry(error: &reqwest::Error) -> bool {
        error.is_timeout()
            || error.is_connect()
            || error.status().is_none_or(|s| s.is_server_error())
    }

    /// Get the underlying reqwest client for advanced usage
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}
