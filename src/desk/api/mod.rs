//! Billing backend seam

pub(crate) mod http;

use crate::desk::model::bill::{Bill, CreateBillRequest};
use crate::desk::model::product::Product;
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub(crate) enum ApiError {
    #[display("request failed: {_0}")]
    Request(reqwest::Error),
    #[display("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },
    #[display("invalid backend url: {_0}")]
    Url(#[error(not(source))] String),
}

impl ApiError {
    /// Message the backend attached to a rejected request, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Operations the desk needs from the billing backend.
pub(crate) trait BillingApi {
    /// `GET /api/products/`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    /// `POST /api/bills/`
    async fn create_bill(&self, request: &CreateBillRequest) -> Result<Bill, ApiError>;
    /// `GET /api/bills/{email}`
    async fn customer_bills(&self, customer_email: &str) -> Result<Vec<Bill>, ApiError>;
}

/// for test
#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Canned backend. `bill: None` makes `create_bill` reject with
    /// `detail`; `fail` makes every call error out.
    #[derive(Default)]
    pub(crate) struct MockApi {
        pub products: Vec<Product>,
        pub bill: Option<Bill>,
        pub detail: Option<String>,
        pub history: Vec<Bill>,
        pub fail: bool,
        pub calls: Cell<usize>,
        pub last_request: RefCell<Option<CreateBillRequest>>,
        pub last_email: RefCell<Option<String>>,
    }

    impl MockApi {
        fn hit(&self) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(ApiError::Status {
                    status: 500,
                    detail: None,
                });
            }
            Ok(())
        }
    }

    impl BillingApi for MockApi {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            self.hit()?;
            Ok(self.products.clone())
        }

        async fn create_bill(&self, request: &CreateBillRequest) -> Result<Bill, ApiError> {
            self.hit()?;
            self.last_request.replace(Some(request.clone()));
            self.bill.clone().ok_or_else(|| ApiError::Status {
                status: 400,
                detail: self.detail.clone(),
            })
        }

        async fn customer_bills(&self, customer_email: &str) -> Result<Vec<Bill>, ApiError> {
            self.hit()?;
            self.last_email.replace(Some(customer_email.to_string()));
            Ok(self.history.clone())
        }
    }
}
