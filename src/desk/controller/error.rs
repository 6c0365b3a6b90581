use crate::desk::api::ApiError;
use crate::desk::session::SessionError;
use derive_more::{Display, Error};

/// Failures shown to the cashier. The display text is the alert message.
#[derive(Debug, Display, Error)]
pub(crate) enum DeskError {
    #[display("Please enter customer email")]
    MissingEmail,
    #[display("Please enter customer email to view previous bills")]
    MissingHistoryEmail,
    #[display("Please add at least one product")]
    NoItems,
    #[display("Invalid quantity {quantity:?} for product {product_id} (row {row})")]
    InvalidQuantity {
        row: usize,
        product_id: String,
        quantity: String,
    },
    #[display("No cash input for denomination ₹{_0}")]
    UnknownDenomination(#[error(not(source))] u32),
    #[display("Cash received is too large to total")]
    CashOverflow,
    /// the backend refused the bill and said why
    #[display("{_0}")]
    Rejected(#[error(not(source))] String),
    #[display("Error generating bill")]
    BillFailed(ApiError),
    #[display("Error generating bill")]
    HandOffFailed(SessionError),
    #[display("No previous bills found for this customer")]
    NoPreviousBills,
    #[display("Error fetching previous bills")]
    HistoryFailed(ApiError),
    #[display("Error loading products")]
    CatalogFailed(ApiError),
    #[display("Error reading bill data")]
    SessionFailed(SessionError),
}
