//! Remote HTTP store.
//!
//! Client for the bills API with configurable auth (Bearer token or
//! X-API-Key). The create phase uploads the receipt as multipart form data;
//! update and list exchange JSON.

use std::time::Duration;

use async_trait::async_trait;
use billfold_core::models::{Bill, CreatedReceipt, ReceiptUpload};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::traits::{BillStore, StoreError, StoreResult};

/// Authentication strategy for the bills API.
#[derive(Clone, Debug)]
pub enum Auth {
    /// `Authorization: Bearer {token}`
    Bearer(String),
    /// `X-API-Key: {key}`
    XApiKey(String),
}

/// HTTP-backed bill store.
#[derive(Clone, Debug)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl RemoteStore {
    pub fn new(base_url: String, auth: Auth) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| StoreError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create a store from environment: BILLFOLD_API_URL, BILLFOLD_API_TOKEN.
    /// Uses Bearer auth.
    pub fn from_env() -> StoreResult<Self> {
        let base_url = std::env::var("BILLFOLD_API_URL")
            .unwrap_or_else(|_| "http://localhost:5678".to_string());

        let token = std::env::var("BILLFOLD_API_TOKEN").map_err(|_| {
            StoreError::Network("Missing API token. Set BILLFOLD_API_TOKEN".to_string())
        })?;

        Self::new(base_url, Auth::Bearer(token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
            Auth::XApiKey(key) => request.header("X-API-Key", key.as_str()),
        }
    }

    /// Send a request, mapping non-success statuses onto `StoreError::Api`
    /// and body failures onto `InvalidResponse`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> StoreResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "bills API request failed");
            return Err(StoreError::Api(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl BillStore for RemoteStore {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        let part = reqwest::multipart::Part::bytes(upload.data)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| StoreError::InvalidPayload(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("email", upload.email);

        let request = self.apply_auth(self.client.post(self.build_url("/bills")).multipart(form));
        self.execute(request).await
    }

    async fn update(&self, key: &str, bill: &Bill) -> StoreResult<Bill> {
        let request = self.apply_auth(
            self.client
                .put(self.build_url(&format!("/bills/{}", key)))
                .json(bill),
        );
        self.execute(request).await
    }

    async fn list(&self) -> StoreResult<Vec<Bill>> {
        let request = self.apply_auth(self.client.get(self.build_url("/bills")));
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let store = RemoteStore::new(
            "http://localhost:5678/".to_string(),
            Auth::Bearer("token".to_string()),
        )
        .unwrap();
        assert_eq!(store.base_url(), "http://localhost:5678");
        assert_eq!(store.build_url("/bills"), "http://localhost:5678/bills");
    }
}
