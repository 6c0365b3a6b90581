use crate::desk::api::BillingApi;
use crate::desk::controller::error::DeskError;
use crate::desk::controller::BillingDesk;
use crate::desk::model::bill::Bill;
use crate::desk::session::SessionStore;
use log::{error, info};

impl<A: BillingApi, S: SessionStore> BillingDesk<A, S> {
    /// Bills previously issued to a customer. An empty history is reported
    /// as an error so the cashier gets the notice instead of a blank list.
    pub async fn previous_bills(&self, customer_email: &str) -> Result<Vec<Bill>, DeskError> {
        let customer_email = customer_email.trim();
        if customer_email.is_empty() {
            return Err(DeskError::MissingHistoryEmail);
        }
        let bills = self
            .api
            .customer_bills(customer_email)
            .await
            .map_err(|e| {
                error!("previous_bills failed, {}", e);
                DeskError::HistoryFailed(e)
            })?;
        if bills.is_empty() {
            info!("no previous bills for customer={}", customer_email);
            return Err(DeskError::NoPreviousBills);
        }
        Ok(bills)
    }
}
