//! Bill listing.
//!
//! Fetches the user's bills and normalizes each record for display. A single
//! corrupted record never fails the whole listing: its raw date is kept and
//! the failure is logged with the record attached.

use std::sync::Arc;

use billfold_core::format::{format_date, format_status};
use billfold_core::models::Bill;
use billfold_store::{BillStore, StoreResult};

/// Read side of the bills collection.
pub struct ListingService<S> {
    store: Arc<S>,
}

impl<S: BillStore> ListingService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch all bills with `date` and `status` rendered for display.
    ///
    /// Store failures propagate unmodified, so the caller can surface the
    /// HTTP-class message ("Erreur 404", "Erreur 500") as-is. Input order is
    /// preserved; use [`get_bills_sorted`](Self::get_bills_sorted) for the
    /// display ordering.
    #[tracing::instrument(skip(self))]
    pub async fn get_bills(&self) -> StoreResult<Vec<Bill>> {
        let bills = self.store.list().await?;
        Ok(render(bills))
    }

    /// Fetch all bills ordered newest first, then rendered for display.
    ///
    /// Sorting happens on the raw ISO dates, before formatting.
    #[tracing::instrument(skip(self))]
    pub async fn get_bills_sorted(&self) -> StoreResult<Vec<Bill>> {
        let mut bills = self.store.list().await?;
        sort_anti_chronological(&mut bills);
        Ok(render(bills))
    }
}

fn render(bills: Vec<Bill>) -> Vec<Bill> {
    bills
        .into_iter()
        .map(|mut bill| {
            match format_date(&bill.date) {
                Ok(formatted) => bill.date = formatted,
                Err(e) => {
                    // Corrupted data: keep the raw date so the record still renders.
                    tracing::error!(error = %e, bill = ?bill, "could not format bill date");
                }
            }
            bill.status = format_status(&bill.status);
            bill
        })
        .collect()
}

/// Order bills newest first by raw ISO date.
///
/// Lexical comparison is exact on `YYYY-MM-DD` strings; the sort is stable so
/// equal dates keep their insertion order.
pub fn sort_anti_chronological(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}
