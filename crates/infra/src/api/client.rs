//! Backend API client
//!
//! Thin layer over [`HttpClient`]: builds URLs from [`Config`], encodes
//! request bodies and decodes the response envelopes. Retries, timeouts and
//! configured headers are handled by the transport.

use async_trait::async_trait;
use dashlens_core::{SqlExecutor, SqlRow};
use dashlens_domain::constants::DEFAULT_HEALTH_ENDPOINT;
use dashlens_domain::{Config, DashLensError, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};
use url::Url;

use super::envelope::{HealthStatus, SqlRequest, SqlResponse};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for the analytics backend
#[derive(Clone)]
pub struct BackendClient {
    http: HttpClient,
    sql_url: Url,
    health_url: Url,
}

impl BackendClient {
    /// Create a client from application configuration
    ///
    /// # Errors
    /// Returns `DashLensError::Config` if the configuration is invalid or the
    /// endpoint URLs cannot be parsed.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::with_http(config, HttpClient::from_config(config)?)
    }

    /// Create a client that uses an already configured transport
    ///
    /// # Errors
    /// Returns `DashLensError::Config` if the endpoint URLs cannot be parsed.
    pub fn with_http(config: &Config, http: HttpClient) -> Result<Self> {
        Ok(Self {
            http,
            sql_url: parse_url(&config.sql_url())?,
            health_url: parse_url(&config.endpoint_url(DEFAULT_HEALTH_ENDPOINT))?,
        })
    }

    /// Run a query on the backend and return its rows
    ///
    /// # Errors
    /// - `DashLensError::Backend` when the backend reports a failed query
    /// - `DashLensError::Network` / `InvalidInput` / `NotFound` for transport
    ///   and HTTP status failures
    /// - `DashLensError::Parse` when the envelope cannot be decoded
    #[instrument(skip(self, params), fields(url = %self.sql_url))]
    pub async fn execute_sql(
        &self,
        query: &str,
        params: &Map<String, Value>,
    ) -> Result<Vec<SqlRow>> {
        let body = SqlRequest::new(query, params);
        let response = self.http.post_json(&self.sql_url, &body).await?;

        let envelope: SqlResponse = decode(response).await?;
        let reported = envelope.row_count;
        let rows = envelope.into_rows()?;
        debug!(rows = rows.len(), reported_rows = ?reported, "SQL query returned");

        Ok(rows)
    }

    /// Probe the backend health endpoint
    ///
    /// # Errors
    /// Returns `DashLensError::Backend` if the backend answers with any
    /// status other than `ok`, or a transport error if it cannot be reached.
    #[instrument(skip(self), fields(url = %self.health_url))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.http.get(&self.health_url).await?;
        let status: HealthStatus = decode(response).await?;

        if !status.is_ok() {
            let message = format!("backend reported status '{}'", status.status);
            return Err(DashLensError::Backend(message));
        }

        info!("backend is healthy");
        Ok(status)
    }
}

#[async_trait]
impl SqlExecutor for BackendClient {
    async fn execute_sql(&self, query: &str, params: &Map<String, Value>) -> Result<Vec<SqlRow>> {
        BackendClient::execute_sql(self, query, params).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = response.error_for_status().map_err(infra_error)?;
    let bytes = response.bytes().await.map_err(infra_error)?;
    serde_json::from_slice(&bytes).map_err(infra_error)
}

fn infra_error(err: impl Into<InfraError>) -> DashLensError {
    let infra: InfraError = err.into();
    infra.into()
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|err| DashLensError::Config(format!("invalid backend URL '{raw}': {err}")))
}
