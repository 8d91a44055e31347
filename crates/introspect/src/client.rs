//! Configurable GraphQL introspection client.
//!
//! Supports custom headers, timeouts and optional retry with exponential
//! backoff. The default configuration performs a single attempt.

use crate::{IntrospectionError, IntrospectionResponse, Result, INTROSPECTION_QUERY};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default timeout for introspection requests (30 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// A client for executing the introspection query against a GraphQL endpoint.
///
/// # Examples
///
/// ```no_run
/// use graphql_introspect::IntrospectionClient;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrospectionClient::new()
///     .with_header("Authorization", "Bearer token")
///     .with_timeout(Duration::from_secs(60));
/// let response = client.execute("https://api.example.com/graphql").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    headers: BTreeMap<String, String>,
    timeout: Duration,
    connect_timeout: Duration,
    retries: u32,
}

impl Default for IntrospectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionClient {
    /// Creates a client with a 30s request timeout, a 10s connection timeout,
    /// no custom headers and no retries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: BTreeMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retries: 0,
        }
    }

    /// Adds an HTTP header sent with the introspection request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds multiple HTTP headers from an iterator.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Sets the total request timeout (connection + transfer).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection-establishment timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the number of retry attempts on retryable failures.
    ///
    /// Retries back off exponentially starting at 1 second. Default is 0,
    /// i.e. one attempt.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Fetches and deserializes an introspection response.
    ///
    /// A `200` response whose body carries a non-empty top-level `errors`
    /// array is rejected: the server answered, but not with a usable schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all attempts, the server
    /// returns an HTTP error status, the response reports GraphQL errors, or
    /// the body does not deserialize as an introspection document.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<IntrospectionResponse> {
        let body = self.fetch(url).await?;

        if let Some(errors) = body.get("errors") {
            if errors.as_array().is_some_and(|a| !a.is_empty()) {
                tracing::error!(%errors, "Introspection query returned GraphQL errors");
                return Err(IntrospectionError::Graphql(errors.to_string()));
            }
        }

        let introspection: IntrospectionResponse =
            serde_json::from_value(body).map_err(|e| IntrospectionError::Parse(e.to_string()))?;

        tracing::info!(
            types = introspection.data.schema.types.len(),
            "Introspection successful"
        );

        Ok(introspection)
    }

    /// Fetches the raw introspection JSON without deserializing it.
    #[tracing::instrument(skip(self))]
    pub async fn execute_raw(&self, url: &str) -> Result<serde_json::Value> {
        self.fetch(url).await
    }

    /// Single request path shared by [`execute`](Self::execute) and
    /// [`execute_raw`](Self::execute_raw), with retry handling.
    async fn fetch(&self, url: &str) -> Result<serde_json::Value> {
        let mut last_error = None;
        let attempts = self.retries + 1;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = Duration::from_secs(1 << (attempt - 1)); // 1s, 2s, 4s, ...
                tracing::info!(attempt, delay_secs = delay.as_secs(), "Retrying after delay");
                tokio::time::sleep(delay).await;
            }

            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Introspection request failed");
                    let retryable = Self::is_retryable(&e);
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| IntrospectionError::Network("no attempts made".to_string())))
    }

    async fn fetch_once(&self, url: &str) -> Result<serde_json::Value> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| {
                IntrospectionError::Network(format!("failed to create HTTP client: {e}"))
            })?;

        let query_body = serde_json::json!({
            "query": INTROSPECTION_QUERY
        });

        tracing::debug!("Sending introspection query");
        let mut request = client.post(url).header("Content-Type", "application/json");

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .json(&query_body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(IntrospectionError::Http(status.as_u16(), error_body));
        }

        response
            .json()
            .await
            .map_err(|e| IntrospectionError::Parse(e.to_string()))
    }

    /// Network errors and 5xx responses are retryable; parse failures,
    /// GraphQL-level errors and 4xx responses are not.
    fn is_retryable(error: &IntrospectionError) -> bool {
        match error {
            IntrospectionError::Network(_) => true,
            IntrospectionError::Http(status, _) => *status >= 500,
            IntrospectionError::Parse(_) | IntrospectionError::Graphql(_) => false,
        }
    }
}
