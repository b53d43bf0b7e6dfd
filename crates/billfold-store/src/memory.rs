//! In-memory bill store.
//!
//! Backend used by tests and local runs. Keys are uuids; file URLs are
//! deterministic pseudo-URLs derived from a base URL, the way a real backend
//! would expose the uploaded receipt.

use async_trait::async_trait;
use billfold_core::models::{Bill, BillStatus, CreatedReceipt, ReceiptUpload};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::traits::{BillStore, StoreError, StoreResult};

/// In-memory bill store
pub struct InMemoryStore {
    base_url: String,
    bills: RwLock<Vec<Bill>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_bills(Vec::new())
    }

    /// Create a store seeded with existing bills.
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            base_url: "memory://receipts".to_string(),
            bills: RwLock::new(bills),
        }
    }

    fn generate_url(&self, key: &str, file_name: &str) -> String {
        format!("{}/{}/{}", self.base_url, key, file_name)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillStore for InMemoryStore {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        let key = Uuid::new_v4().to_string();
        let file_url = self.generate_url(&key, &upload.file_name);

        // Placeholder record; the update phase fills the remaining fields.
        let placeholder = Bill {
            id: Some(key.clone()),
            email: upload.email,
            bill_type: String::new(),
            name: String::new(),
            amount: 0.0,
            date: String::new(),
            vat: String::new(),
            pct: 0,
            commentary: String::new(),
            file_url: Some(file_url.clone()),
            file_name: Some(upload.file_name),
            status: BillStatus::Pending.as_str().to_string(),
        };
        self.bills.write().await.push(placeholder);

        Ok(CreatedReceipt { file_url, key })
    }

    async fn update(&self, key: &str, bill: &Bill) -> StoreResult<Bill> {
        let mut bills = self.bills.write().await;
        let slot = bills
            .iter_mut()
            .find(|b| b.id.as_deref() == Some(key))
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        *slot = Bill {
            id: Some(key.to_string()),
            ..bill.clone()
        };
        Ok(slot.clone())
    }

    async fn list(&self) -> StoreResult<Vec<Bill>> {
        Ok(self.bills.read().await.clone())
    }
}
