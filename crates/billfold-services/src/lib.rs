//! Billfold services.
//!
//! `SubmissionPipeline` drives the two-phase bill submission (receipt upload,
//! then field persistence); `ListingService` reads the collection back with
//! display normalization. Both reach the outside world only through the
//! `BillStore`, `Navigator`, and `SessionContext` seams.

pub mod listing;
pub mod navigator;
pub mod session;
pub mod submission;

pub use listing::{sort_anti_chronological, ListingService};
pub use navigator::{Navigator, Route};
pub use session::SessionContext;
pub use submission::{SubmissionError, SubmissionPipeline, SubmissionState};
