use serde::{Deserialize, Serialize};

/// A receipt file as handed over by the presentation layer.
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    /// Original filename, extension included.
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Create-phase payload: the receipt plus the submitting user.
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    pub email: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Create-phase response: the stored file URL and the new record key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReceipt {
    pub file_url: String,
    pub key: String,
}
