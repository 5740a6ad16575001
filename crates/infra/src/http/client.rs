//! Retrying HTTP transport for the backend API
//!
//! Every request is attempted up to `retry_count` times in total. Connection
//! failures, timeouts and 5xx answers are retried after a linearly growing
//! pause; any other response is handed back to the caller as is.

use std::time::Duration;

use dashlens_domain::{Config, DashLensError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, Request, Response};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("dashlens/", env!("CARGO_PKG_VERSION"));
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Backend transport honouring the configured timeout, attempts and headers
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    retry_delay: Duration,
}

impl HttpClient {
    /// # Errors
    /// Returns `DashLensError::Config` if a configured header name or value
    /// is not valid HTTP.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(header_map(&config.request_headers)?)
            .no_proxy()
            .build()
            .map_err(to_domain)?;

        Ok(Self { client, max_attempts: config.retry_count.max(1), retry_delay: DEFAULT_RETRY_DELAY })
    }

    /// Pause before the first retry; later retries wait proportionally longer
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// # Errors
    /// Returns a transport error once every attempt has failed.
    pub async fn get(&self, url: &Url) -> Result<Response> {
        self.send(Method::GET, url, None).await
    }

    /// POST `body` encoded as JSON
    ///
    /// # Errors
    /// Returns `DashLensError::Parse` if `body` cannot be encoded, or a
    /// transport error once every attempt has failed.
    pub async fn post_json<B>(&self, url: &Url, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body).map_err(|err| {
            let infra: InfraError = err.into();
            DashLensError::from(infra)
        })?;
        self.send(Method::POST, url, Some(bytes)).await
    }

    async fn send(&self, method: Method, url: &Url, body: Option<Vec<u8>>) -> Result<Response> {
        let mut attempt = 1;

        loop {
            let request = self.build(&method, url, body.as_deref())?;
            debug!(attempt, %method, %url, "sending backend request");

            let outcome = self.client.execute(request).await;
            let transient = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            };

            if !transient || attempt >= self.max_attempts {
                return outcome.map_err(to_domain);
            }

            warn!(attempt, max_attempts = self.max_attempts, %url, "backend request failed, retrying");
            tokio::time::sleep(self.delay_before(attempt)).await;
            attempt += 1;
        }
    }

    fn build(&self, method: &Method, url: &Url, body: Option<&[u8]>) -> Result<Request> {
        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body.to_vec());
        }
        builder.build().map_err(to_domain)
    }

    fn delay_before(&self, attempt: usize) -> Duration {
        self.retry_delay.saturating_mul(u32::try_from(attempt).unwrap_or(u32::MAX))
    }
}

fn to_domain(err: reqwest::Error) -> DashLensError {
    let infra: InfraError = err.into();
    infra.into()
}

fn header_map<'a>(
    headers: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            DashLensError::Config(format!("invalid request header name '{name}': {err}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| {
            DashLensError::Config(format!("invalid value for request header '{name}': {err}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
