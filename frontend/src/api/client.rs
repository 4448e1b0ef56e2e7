use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(mocked) = mock_registry::respond(&request) {
            return mocked.await;
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    async fn parse_error(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("Request failed with status {}", status)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
