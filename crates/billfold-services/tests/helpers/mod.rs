#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use billfold_core::models::{Bill, CreatedReceipt, ReceiptFile, ReceiptUpload};
use billfold_services::{Navigator, Route, SessionContext};
use billfold_store::{BillStore, InMemoryStore, StoreError, StoreResult};

pub const TEST_EMAIL: &str = "employee@test.tld";

pub fn test_session() -> SessionContext {
    SessionContext::new(TEST_EMAIL, "Employee")
}

/// A receipt file with a 1x1 PNG payload; the name decides validation.
pub fn receipt_file(name: &str) -> ReceiptFile {
    let png_data = vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
        0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD,
        0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60,
        0x82, // IEND chunk
    ];
    ReceiptFile {
        name: name.to_string(),
        content_type: "image/png".to_string(),
        data: png_data,
    }
}

pub fn bill_fixture(date: &str, status: &str) -> Bill {
    Bill {
        id: None,
        email: TEST_EMAIL.to_string(),
        bill_type: "Transports".to_string(),
        name: "Vol Paris Londres".to_string(),
        amount: 348.0,
        date: date.to_string(),
        vat: "70".to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: Some("https://test.storage.tld/vol.jpg".to_string()),
        file_name: Some("vol.jpg".to_string()),
        status: status.to_string(),
    }
}

/// Navigator recording every route it was asked to reach.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Store double wrapping `InMemoryStore` with call counters and switchable
/// failure injection.
pub struct FlakyStore {
    pub inner: InMemoryStore,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryStore::new(),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl BillStore for FlakyStore {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(StoreError::Api(500));
        }
        self.inner.create(upload).await
    }

    async fn update(&self, key: &str, bill: &Bill) -> StoreResult<Bill> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StoreError::Api(500));
        }
        self.inner.update(key, bill).await
    }

    async fn list(&self) -> StoreResult<Vec<Bill>> {
        self.inner.list().await
    }
}

/// Store whose every call rejects with the given HTTP status.
pub struct FailingStore {
    pub status: u16,
}

#[async_trait]
impl BillStore for FailingStore {
    async fn create(&self, _upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        Err(StoreError::Api(self.status))
    }

    async fn update(&self, _key: &str, _bill: &Bill) -> StoreResult<Bill> {
        Err(StoreError::Api(self.status))
    }

    async fn list(&self) -> StoreResult<Vec<Bill>> {
        Err(StoreError::Api(self.status))
    }
}
