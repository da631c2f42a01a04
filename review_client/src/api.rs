use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{ChangeStatusRequest, ChangeStatusResponse, ViewApplicationsResponse};

pub const VIEW_APPLICATIONS_PATH: &str = "company/view-applications";
pub const CHANGE_STATUS_PATH: &str = "company/change-status";

/// Header carrying the company bearer token on every request.
pub const TOKEN_HEADER: &str = "token";

/// The remote company API as seen by the review controller.
///
/// Implementations return the decoded envelope as-is; interpreting
/// `success` is left to the caller.
#[async_trait]
pub trait ApplicationsApi: Send + Sync {
    async fn view_applications(&self, token: &str) -> Result<ViewApplicationsResponse>;

    async fn change_status(
        &self,
        token: &str,
        request: &ChangeStatusRequest,
    ) -> Result<ChangeStatusResponse>;
}

#[async_trait]
impl<T: ApplicationsApi + ?Sized> ApplicationsApi for Arc<T> {
    async fn view_applications(&self, token: &str) -> Result<ViewApplicationsResponse> {
        (**self).view_applications(token).await
    }

    async fn change_status(
        &self,
        token: &str,
        request: &ChangeStatusRequest,
    ) -> Result<ChangeStatusResponse> {
        (**self).change_status(token, request).await
    }
}

pub struct HttpApplicationsApi {
    client: Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl HttpApplicationsApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(config.request_timeout).build()?,
            base_url: config.api_base_url.clone(),
        })
    }

    fn headers(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(TOKEN_HEADER),
            HeaderValue::from_str(token).map_err(|_| ClientError::InvalidToken)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn post<B, T>(&self, path: &str, token: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        let mut request = self.client.post(url).headers(Self::headers(token)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<MessageBody>(&bytes)
                .ok()
                .and_then(|b| b.message);
            tracing::warn!(path, status = status.as_u16(), "Company API returned an error status");
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ApplicationsApi for HttpApplicationsApi {
    async fn view_applications(&self, token: &str) -> Result<ViewApplicationsResponse> {
        self.post::<(), _>(VIEW_APPLICATIONS_PATH, token, None).await
    }

    async fn change_status(
        &self,
        token: &str,
        request: &ChangeStatusRequest,
    ) -> Result<ChangeStatusResponse> {
        self.post(CHANGE_STATUS_PATH, token, Some(request)).await
    }
}
