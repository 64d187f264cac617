//! HTTP implementation of [`BackgroundApiPort`].

use std::time::Duration;

use async_trait::async_trait;
use fw_core::ports::{ApiError, BackgroundApiPort};
use fw_core::wizard::{BackgroundFormData, BackgroundRecord};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

pub const BACKGROUND_PATH: &str = "/supporters/background";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpBackgroundApiConfig {
    pub base_url: String,
    /// Sent as a bearer token when present.
    pub token: Option<String>,
    pub timeout: Duration,
}

pub struct HttpBackgroundApi {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpBackgroundApi {
    pub fn new(config: HttpBackgroundApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), BACKGROUND_PATH),
            token: config.token.filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl BackgroundApiPort for HttpBackgroundApi {
    async fn fetch_background(&self) -> Result<Option<BackgroundRecord>, ApiError> {
        let response = self
            .authorized(self.client.get(&self.endpoint))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        debug!(status = %status, "fetched supporter background");
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        let record = response
            .json::<BackgroundRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(record))
    }

    async fn submit_background(&self, form: &BackgroundFormData) -> Result<(), ApiError> {
        let response = self
            .authorized(self.client.post(&self.endpoint))
            .json(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        debug!(status = %status, "submitted supporter background");
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if let Some(status) = error.status() {
        map_status_code(status)
    } else if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "server rejected supporter background");
            ApiError::Validation(body)
        }
        _ => map_status_code(status),
    }
}

fn map_status_code(code: StatusCode) -> ApiError {
    match code {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::Timeout,
        _ => ApiError::Server(code.as_u16()),
    }
}
