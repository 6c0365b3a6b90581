use crate::desk::api::BillingApi;
use crate::desk::controller::error::DeskError;
use crate::desk::controller::{BillingDesk, Navigation};
use crate::desk::session::{HandOff, SessionStore};
use log::{error, warn};

/// What the bill page shows.
#[derive(Debug)]
pub(crate) enum Screen {
    Bill(HandOff),
    /// nothing was handed off, go elsewhere
    Redirect(Navigation),
}

impl<A: BillingApi, S: SessionStore> BillingDesk<A, S> {
    pub fn bill_page(&self) -> Result<Screen, DeskError> {
        match self.session.load() {
            Ok(Some(hand_off)) => Ok(Screen::Bill(hand_off)),
            Ok(None) => {
                warn!("no bill handed off, redirecting home");
                Ok(Screen::Redirect(Navigation::Home))
            }
            Err(e) => {
                error!("bill_page failed, {}", e);
                Err(DeskError::SessionFailed(e))
            }
        }
    }
}
