//! HTTP client for the booking backend

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::{sync::Arc, time::Duration};
use tracing::{debug, warn};

use super::{
    envelope::{ApiResponse, PageData, SUCCESS_CODE, TOKEN_EXPIRED_CODE},
    errors::{ApiError, ApiResult},
};
use crate::config::Config;
use crate::pager::{PageFetcher, PageRequest};
use crate::session::{SessionStore, TOKEN_KEY};

/// Client that attaches the stored bearer token to each request and
/// watches responses for token expiry
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> ApiResult<Self> {
        if config.api_url.is_empty() {
            return Err(ApiError::ConfigError("API URL not configured".to_string()));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request
    pub async fn get<T>(&self, path: &str) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Attach the bearer token read from the session at send time
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle_response<T>(&self, response: Response) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let text = response.text().await?;
        let envelope = parse_envelope(status, &text)?;
        self.intercept(&envelope)?;
        decode_data(envelope)
    }

    /// Drop the stored token when the backend reports it expired
    fn intercept(&self, envelope: &ApiResponse<serde_json::Value>) -> ApiResult<()> {
        if envelope.code != TOKEN_EXPIRED_CODE {
            return Ok(());
        }

        warn!("Session token expired: {}", envelope.message);
        if let Err(e) = self.session.remove(TOKEN_KEY) {
            warn!("Failed to clear expired token: {}", e);
        }
        Err(ApiError::TokenExpired)
    }
}

/// Read the envelope from a response body.
///
/// A non-2xx status is only accepted when the body is an envelope reporting
/// an application failure.
fn parse_envelope(status: StatusCode, text: &str) -> ApiResult<ApiResponse<serde_json::Value>> {
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(text) {
        Ok(envelope) if status.is_success() || envelope.code != SUCCESS_CODE => Ok(envelope),
        Ok(_) => Err(ApiError::StatusError {
            status: status.as_u16(),
            body: text.to_string(),
        }),
        Err(_) if !status.is_success() => Err(ApiError::StatusError {
            status: status.as_u16(),
            body: text.to_string(),
        }),
        Err(e) => Err(ApiError::JsonError(e)),
    }
}

/// Type the payload of a successful envelope; failures keep no data
fn decode_data<T>(envelope: ApiResponse<serde_json::Value>) -> ApiResult<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let data = if envelope.code == SUCCESS_CODE {
        envelope.data.map(serde_json::from_value).transpose()?
    } else {
        None
    };

    Ok(ApiResponse {
        code: envelope.code,
        message: envelope.message,
        data,
    })
}

#[async_trait]
impl<T> PageFetcher<T> for ApiClient
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<ApiResponse<PageData<T>>> {
        self.get(&request.to_path()).await
    }
}
