//! Two-phase bill submission.
//!
//! Phase one uploads the receipt (`create`) and yields the record key; phase
//! two persists the full field set against that key (`update`). The state
//! machine keeps the two strictly ordered and rejects overlapping
//! submissions, so a duplicate update can never fire.

use std::sync::Arc;

use billfold_core::models::{Bill, BillForm, BillStatus, ReceiptFile, ReceiptUpload};
use billfold_core::validation::{validate_receipt_extension, RECEIPT_EXTENSION_REJECTED};
use billfold_store::{BillStore, StoreError};

use crate::navigator::{Navigator, Route};
use crate::session::SessionContext;

/// VAT percentage applied when the form value does not parse.
const DEFAULT_PCT: u32 = 20;

/// Submission progress of a single pipeline instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Uploading,
    Uploaded {
        key: String,
        file_url: String,
        file_name: String,
    },
    Submitting,
    Navigated,
    Failed,
}

/// Error raised by the submission pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The selected file is not an accepted receipt image. The message is the
    /// one shown to the user.
    #[error("{}", RECEIPT_EXTENSION_REJECTED)]
    UnsupportedExtension,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No receipt has been uploaded for this bill")]
    ReceiptMissing,

    #[error("A submission is already in flight")]
    InFlight,

    #[error("This bill has already been submitted")]
    AlreadySubmitted,

    #[error("Receipt upload failed: {0}")]
    Upload(#[source] StoreError),

    #[error("Bill submission failed: {0}")]
    Submission(#[source] StoreError),
}

/// Pipeline driving one bill from receipt selection to navigation.
pub struct SubmissionPipeline<S, N> {
    store: Arc<S>,
    navigator: Arc<N>,
    session: SessionContext,
    state: SubmissionState,
}

impl<S, N> SubmissionPipeline<S, N>
where
    S: BillStore,
    N: Navigator,
{
    pub fn new(store: Arc<S>, navigator: Arc<N>, session: SessionContext) -> Self {
        Self {
            store,
            navigator,
            session,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Validate and upload the selected receipt (create phase).
    ///
    /// A rejected file leaves the pipeline untouched: no network call is made
    /// and the caller surfaces the returned message to the user.
    #[tracing::instrument(skip(self, receipt), fields(file_name = %receipt.name))]
    pub async fn handle_file_selection(
        &mut self,
        receipt: ReceiptFile,
    ) -> Result<(), SubmissionError> {
        match self.state {
            SubmissionState::Idle | SubmissionState::Failed => {}
            SubmissionState::Navigated => return Err(SubmissionError::AlreadySubmitted),
            _ => return Err(SubmissionError::InFlight),
        }

        if validate_receipt_extension(&receipt.name).is_err() {
            tracing::warn!(file_name = %receipt.name, "receipt rejected, unsupported extension");
            return Err(SubmissionError::UnsupportedExtension);
        }

        let file_name = receipt.name.clone();
        self.state = SubmissionState::Uploading;

        let upload = ReceiptUpload {
            email: self.session.email().to_string(),
            file_name: file_name.clone(),
            content_type: receipt.content_type,
            data: receipt.data,
        };

        match self.store.create(upload).await {
            Ok(created) => {
                self.state = SubmissionState::Uploaded {
                    key: created.key,
                    file_url: created.file_url,
                    file_name,
                };
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "receipt upload failed");
                self.state = SubmissionState::Failed;
                Err(SubmissionError::Upload(e))
            }
        }
    }

    /// Persist the full bill against the uploaded receipt (update phase).
    ///
    /// Never issues the update before the create phase has yielded a key. On
    /// success the navigator is invoked exactly once with the bills route; on
    /// store failure the pipeline returns to `Uploaded` so the same form can
    /// be resubmitted.
    #[tracing::instrument(skip(self, form))]
    pub async fn handle_submit(&mut self, form: BillForm) -> Result<Bill, SubmissionError> {
        let (key, file_url, file_name) = match &self.state {
            SubmissionState::Uploaded {
                key,
                file_url,
                file_name,
            } => (key.clone(), file_url.clone(), file_name.clone()),
            SubmissionState::Idle | SubmissionState::Failed => {
                return Err(SubmissionError::ReceiptMissing)
            }
            SubmissionState::Navigated => return Err(SubmissionError::AlreadySubmitted),
            _ => return Err(SubmissionError::InFlight),
        };

        let bill = self.build_bill(form, file_url.clone(), file_name.clone())?;

        self.state = SubmissionState::Submitting;
        match self.store.update(&key, &bill).await {
            Ok(stored) => {
                self.navigator.navigate(Route::Bills);
                self.state = SubmissionState::Navigated;
                Ok(stored)
            }
            Err(e) => {
                tracing::error!(error = %e, key = %key, "bill submission failed");
                self.state = SubmissionState::Uploaded {
                    key,
                    file_url,
                    file_name,
                };
                Err(SubmissionError::Submission(e))
            }
        }
    }

    /// Coerce the raw form into the persisted payload. `amount` must parse
    /// and be non-negative; `pct` falls back to the default; `vat` is kept as
    /// entered; `status` is forced to pending and `email` comes from the
    /// session, never the form.
    fn build_bill(
        &self,
        form: BillForm,
        file_url: String,
        file_name: String,
    ) -> Result<Bill, SubmissionError> {
        let amount = form
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| SubmissionError::InvalidAmount(form.amount.clone()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(SubmissionError::InvalidAmount(form.amount.clone()));
        }

        let pct = form.pct.trim().parse::<u32>().unwrap_or(DEFAULT_PCT);

        Ok(Bill {
            id: None,
            email: self.session.email().to_string(),
            bill_type: form.bill_type,
            name: form.name,
            amount,
            date: form.date,
            vat: form.vat,
            pct,
            commentary: form.commentary,
            file_url: Some(file_url),
            file_name: Some(file_name),
            status: BillStatus::Pending.as_str().to_string(),
        })
    }
}
