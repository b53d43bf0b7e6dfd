//! Store abstraction trait
//!
//! The bill collection lives behind a remote API; this trait is the only
//! surface the services see. Backends map their transport failures onto
//! `StoreError`.

use async_trait::async_trait;
use billfold_core::models::{Bill, CreatedReceipt, ReceiptUpload};
use thiserror::Error;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// API-level failure, displayed the way the backend reports it
    /// ("Erreur 404", "Erreur 500"). Callers surface the message without
    /// interpreting the status.
    #[error("Erreur {0}")]
    Api(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid upload payload: {0}")]
    InvalidPayload(String),

    #[error("Bill not found: {0}")]
    NotFound(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Bill collection accessor.
///
/// `create` is the first persistence phase: it uploads the receipt and yields
/// the record key and public file URL. `update` persists the full field set
/// against that key. `list` returns every bill visible to the caller.
#[async_trait]
pub trait BillStore: Send + Sync {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt>;

    async fn update(&self, key: &str, bill: &Bill) -> StoreResult<Bill>;

    async fn list(&self) -> StoreResult<Vec<Bill>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_http_status() {
        assert_eq!(StoreError::Api(404).to_string(), "Erreur 404");
        assert_eq!(StoreError::Api(500).to_string(), "Erreur 500");
    }
}
