//! Billing desk page controller

pub(crate) mod catalog;
pub(crate) mod checkout;
pub(crate) mod error;
pub(crate) mod form;
pub(crate) mod history;
pub(crate) mod receipt;

/// Where the desk goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Navigation {
    Home,
    BillPage,
}

/// Ties the backend and the hand-off store together behind the screen
/// operations.
pub(crate) struct BillingDesk<A, S> {
    api: A,
    session: S,
}

impl<A, S> BillingDesk<A, S> {
    pub fn new(api: A, session: S) -> Self {
        Self { api, session }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }
}
