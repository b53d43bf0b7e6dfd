//! Receipt file validation.
//!
//! The submission form only accepts image receipts; anything else is refused
//! before a single network call is made.

use crate::error::AppError;

/// Extensions accepted for receipt uploads. Matching is case-sensitive.
pub const ACCEPTED_RECEIPT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// User-facing rejection message for unsupported receipt files.
pub const RECEIPT_EXTENSION_REJECTED: &str =
    "Seuls les fichiers avec les extensions jpg, jpeg ou png sont acceptés.";

/// Extension of a filename: the substring after the last `.`, if any.
pub fn receipt_extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Whether a filename carries an accepted receipt extension.
pub fn is_accepted_receipt(file_name: &str) -> bool {
    receipt_extension(file_name)
        .map(|ext| ACCEPTED_RECEIPT_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Validate a receipt filename against the allow-list, returning the extension.
pub fn validate_receipt_extension(file_name: &str) -> Result<&str, AppError> {
    match receipt_extension(file_name) {
        Some(ext) if ACCEPTED_RECEIPT_EXTENSIONS.contains(&ext) => Ok(ext),
        _ => Err(AppError::InvalidInput(
            RECEIPT_EXTENSION_REJECTED.to_string(),
        )),
    }
}
