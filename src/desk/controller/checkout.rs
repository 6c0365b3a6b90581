use crate::desk::api::BillingApi;
use crate::desk::controller::error::DeskError;
use crate::desk::controller::form::BillForm;
use crate::desk::controller::{BillingDesk, Navigation};
use crate::desk::model::bill::CreateBillRequest;
use crate::desk::session::{HandOff, SessionStore};
use crate::desk::util::time;
use log::{error, info, warn};

impl<A: BillingApi, S: SessionStore> BillingDesk<A, S> {
    /// Submit the form as a new bill. Validation failures return before
    /// any request is made. On success the bill and the cash breakdown are
    /// handed off and the desk moves to the bill page.
    pub async fn generate_bill(&self, form: &BillForm) -> Result<Navigation, DeskError> {
        let customer_email = form.customer_email().trim();
        if customer_email.is_empty() {
            warn!("generate_bill refused, no customer email");
            return Err(DeskError::MissingEmail);
        }
        let items = form.collect_items()?;
        if items.is_empty() {
            warn!("generate_bill refused, no items");
            return Err(DeskError::NoItems);
        }

        // cash is tallied before posting
        let denominations = form.tally().inspect_err(|_| {
            warn!("generate_bill refused, cash total overflows");
        })?;
        let request = CreateBillRequest {
            customer_email: customer_email.to_string(),
            items,
            denominations: denominations.breakdown.clone(),
        };

        let bill = match self.api.create_bill(&request).await {
            Ok(bill) => bill,
            Err(e) => {
                error!("generate_bill failed, {}", e);
                return Err(match e.detail().map(str::to_string) {
                    Some(detail) => DeskError::Rejected(detail),
                    None => DeskError::BillFailed(e),
                });
            }
        };
        info!(
            "bill id={:?} created for customer={}, final_amount={}, total_paid={}",
            bill.id, bill.customer_email, bill.final_amount, denominations.total_paid
        );

        let hand_off = HandOff {
            bill,
            denominations: Some(denominations),
            saved_at: time::helper::get_utc_now(),
        };
        self.session.save(&hand_off).map_err(|e| {
            error!("failed to hand off bill, {}", e);
            DeskError::HandOffFailed(e)
        })?;
        Ok(Navigation::BillPage)
    }
}
