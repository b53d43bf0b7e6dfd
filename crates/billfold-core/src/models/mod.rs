pub mod bill;
pub mod receipt;

pub use bill::{Bill, BillForm, BillStatus, EXPENSE_TYPES};
pub use receipt::{CreatedReceipt, ReceiptFile, ReceiptUpload};
