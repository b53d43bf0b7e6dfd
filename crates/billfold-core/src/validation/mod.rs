//! Validation modules

pub mod receipt;

pub use receipt::{
    is_accepted_receipt, receipt_extension, validate_receipt_extension,
    ACCEPTED_RECEIPT_EXTENSIONS, RECEIPT_EXTENSION_REJECTED,
};
