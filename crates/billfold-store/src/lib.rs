//! Bill store abstraction.
//!
//! This crate defines the `BillStore` trait the submission and listing
//! services depend on, plus two backends: `RemoteStore` (the bills HTTP API)
//! and `InMemoryStore` (tests and local runs).

pub mod memory;
pub mod remote;
pub mod traits;

pub use memory::InMemoryStore;
pub use remote::{Auth, RemoteStore};
pub use traits::{BillStore, StoreError, StoreResult};
