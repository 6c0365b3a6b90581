//! main file for the billing desk

pub(crate) mod api;
pub(crate) mod cli;
pub(crate) mod controller;
pub(crate) mod model;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod util;

use crate::desk::api::BillingApi;
use crate::desk::cli::{CashArg, Command, ItemArg};
use crate::desk::controller::catalog::product_options;
use crate::desk::controller::error::DeskError;
use crate::desk::controller::form::BillForm;
use crate::desk::controller::receipt::Screen;
use crate::desk::controller::{BillingDesk, Navigation};
use crate::desk::session::SessionStore;

const NOTHING_TO_SHOW: &str = "No bill to display, create one with `billing-desk bill`.\n";

/// Run one command and return the screen to print.
pub(crate) async fn run<A: BillingApi, S: SessionStore>(
    desk: &BillingDesk<A, S>,
    denominations: &[u32],
    command: Command,
) -> Result<String, DeskError> {
    match command {
        Command::Products => {
            let products = desk.load_products().await?;
            Ok(render::product_options(&product_options(&products)))
        }
        Command::Bill { email, items, cash } => {
            let form = fill_form(denominations, &email, &items, &cash)?;
            let to = desk.generate_bill(&form).await?;
            navigate(desk, to)
        }
        Command::Show => navigate(desk, Navigation::BillPage),
        Command::History { email } => {
            let bills = desk.previous_bills(&email).await?;
            Ok(render::previous_bills(email.trim(), &bills))
        }
    }
}

/// Render the screen behind `to`, following redirects.
fn navigate<A: BillingApi, S: SessionStore>(
    desk: &BillingDesk<A, S>,
    to: Navigation,
) -> Result<String, DeskError> {
    match to {
        Navigation::Home => Ok(NOTHING_TO_SHOW.to_string()),
        Navigation::BillPage => match desk.bill_page()? {
            Screen::Bill(hand_off) => Ok(render::bill_page(&hand_off)),
            Screen::Redirect(next) => navigate(desk, next),
        },
    }
}

fn fill_form(
    denominations: &[u32],
    email: &str,
    items: &[ItemArg],
    cash: &[CashArg],
) -> Result<BillForm, DeskError> {
    let mut form = BillForm::new(denominations);
    form.set_customer_email(email);
    for (i, item) in items.iter().enumerate() {
        let row = if i == 0 { 0 } else { form.add_product_row() };
        form.select_product(row, &item.product_id);
        if let Some(quantity) = &item.quantity {
            form.set_quantity(row, quantity);
        }
    }
    for entry in cash {
        if !form.set_denomination_count(entry.value, &entry.count) {
            return Err(DeskError::UnknownDenomination(entry.value));
        }
    }
    Ok(form)
}
