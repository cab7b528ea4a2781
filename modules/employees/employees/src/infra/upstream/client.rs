use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use employees_sdk::Employee;
use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use http::{HeaderValue, Method, Request, StatusCode, Uri};
use http_body_util::{BodyExt, Full, Limited};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use serde::de::DeserializeOwned;
use tower::timeout::Timeout;
use tower::{BoxError, ServiceBuilder, ServiceExt};

use super::envelope::{EmployeeRecord, Envelope};
use crate::config::UpstreamConfig;
use crate::domain::gateway::{EmployeeGateway, UpstreamError};

/// Maximum characters of an error body kept in `UpstreamError::Transport`.
const BODY_PREVIEW_CHARS: usize = 256;

type UpstreamService = Timeout<Client<HttpConnector, Full<Bytes>>>;

/// Gateway to the remote employee service over plain HTTP/1.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpEmployeeGateway {
    service: UpstreamService,
    base_url: String,
    user_agent: HeaderValue,
    max_body_size: usize,
    request_timeout: Duration,
}

impl HttpEmployeeGateway {
    /// Build a gateway from configuration.
    ///
    /// # Errors
    /// Returns `UpstreamError::InvalidRequest` if the base URL or user agent
    /// cannot be used in a request.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let uri: Uri = base_url
            .parse()
            .map_err(|e| UpstreamError::InvalidRequest(format!("base url '{base_url}': {e}")))?;
        // The connector speaks plain HTTP only.
        if uri.scheme_str() != Some("http") || uri.authority().is_none() {
            return Err(UpstreamError::InvalidRequest(format!(
                "base url '{base_url}' must be an absolute http:// URL"
            )));
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| UpstreamError::InvalidRequest(format!("user agent: {e}")))?;

        // pool_timer is required for the idle pool timeout to fire
        let client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .build_http::<Full<Bytes>>();

        let service = ServiceBuilder::new()
            .timeout(config.request_timeout)
            .service(client);

        Ok(Self {
            service,
            base_url,
            user_agent,
            max_body_size: config.max_body_size,
            request_timeout: config.request_timeout,
        })
    }

    fn collection_uri(&self) -> Result<Uri, UpstreamError> {
        parse_uri(&self.base_url)
    }

    fn item_uri(&self, id: &str) -> Result<Uri, UpstreamError> {
        parse_uri(&format!("{}/{}", self.base_url, urlencoding::encode(id)))
    }

    /// Perform one round trip and unwrap the response envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        uri: Uri,
        body: Option<&serde_json::Value>,
    ) -> Result<T, UpstreamError> {
        let mut builder = Request::builder()
            .method(method.clone())
            .uri(uri.clone())
            .header(USER_AGENT, self.user_agent.clone())
            .header(ACCEPT, "application/json");

        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                let bytes = serde_json::to_vec(json)
                    .map_err(|e| UpstreamError::InvalidRequest(format!("request body: {e}")))?;
                Full::new(Bytes::from(bytes))
            }
            None => Full::new(Bytes::new()),
        };

        let request = builder
            .body(body)
            .map_err(|e| UpstreamError::InvalidRequest(e.to_string()))?;

        let response = self
            .service
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        let bytes = Limited::new(response.into_body(), self.max_body_size)
            .collect()
            .await
            .map_err(|e| {
                UpstreamError::transport(Some(status), format!("failed to read response body: {e}"))
            })?
            .to_bytes();

        tracing::debug!(%method, %uri, status = status.as_u16(), bytes = bytes.len(), "upstream call completed");

        if !status.is_success() {
            return Err(UpstreamError::transport(
                Some(status),
                error_message(status, &bytes),
            ));
        }

        let envelope: Envelope<T> = serde_json::from_slice(&bytes).map_err(|e| {
            UpstreamError::transport(Some(status), format!("failed to decode response: {e}"))
        })?;

        envelope.into_data()
    }

    fn map_send_error(&self, err: &BoxError) -> UpstreamError {
        if err.is::<tower::timeout::error::Elapsed>() {
            UpstreamError::transport(
                None,
                format!(
                    "request timed out after {}",
                    humantime::format_duration(self.request_timeout)
                ),
            )
        } else {
            UpstreamError::transport(None, err.to_string())
        }
    }
}

#[async_trait]
impl EmployeeGateway for HttpEmployeeGateway {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let records: Vec<EmployeeRecord> =
            self.call(Method::GET, self.collection_uri()?, None).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Employee, UpstreamError> {
        let record: EmployeeRecord = self.call(Method::GET, self.item_uri(id)?, None).await?;
        Ok(record.into())
    }

    async fn create(&self, payload: serde_json::Value) -> Result<Employee, UpstreamError> {
        let record: EmployeeRecord = self
            .call(Method::POST, self.collection_uri()?, Some(&payload))
            .await?;
        Ok(record.into())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, UpstreamError> {
        let payload = serde_json::json!({ "name": name });
        self.call(Method::DELETE, self.collection_uri()?, Some(&payload))
            .await
    }
}

fn parse_uri(raw: &str) -> Result<Uri, UpstreamError> {
    raw.parse()
        .map_err(|e| UpstreamError::InvalidRequest(format!("url '{raw}': {e}")))
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown status");
    let preview: String = String::from_utf8_lossy(body)
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect();
    if preview.trim().is_empty() {
        reason.to_owned()
    } else {
        format!("{reason}: {preview}")
    }
}
