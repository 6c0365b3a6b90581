//! Plain text screens

use crate::desk::model::bill::Bill;
use crate::desk::model::denomination::{settle, Balance, DenominationBreakdown};
use crate::desk::model::product::ProductOption;
use crate::desk::session::HandOff;
use crate::desk::util::money::rupees;
use crate::desk::util::time::display_local;
use std::fmt::Write;

pub(crate) fn product_options(options: &[ProductOption]) -> String {
    let mut out = String::new();
    for option in options {
        if option.value.is_empty() {
            let _ = writeln!(out, "{}:", option.label);
        } else {
            let _ = writeln!(out, "  {:<10} {}", option.value, option.label);
        }
    }
    out
}

pub(crate) fn balance(balance: Balance) -> String {
    match balance {
        Balance::Change(amount) => format!("{} (Change)", rupees(amount)),
        Balance::Due(amount) => format!("{} (Due)", rupees(amount)),
    }
}

pub(crate) fn denominations(cash: &DenominationBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14}{:>8}{:>14}", "Denomination", "Count", "Total");
    for (value, count) in &cash.breakdown {
        // a hand-off file may hold counts no tally would accept
        let total = (*value as u64)
            .checked_mul(*count)
            .map_or_else(|| "-".to_string(), |t| rupees(t as f64));
        let _ = writeln!(
            out,
            "{:<14}{:>8}{:>14}",
            rupees(*value as f64),
            count,
            total
        );
    }
    out
}

/// The printable bill: header, items, totals and, when cash was recorded,
/// the denomination table with the change or amount due.
pub(crate) fn bill_page(hand_off: &HandOff) -> String {
    let bill = &hand_off.bill;
    let mut out = String::new();
    let _ = writeln!(out, "Customer Email: {}", bill.customer_email);
    let _ = writeln!(out, "Date: {}", display_local(&bill.created_at));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<12}{:<16}{:>6}{:>14}{:>12}{:>14}",
        "Product ID", "Name", "Qty", "Unit Price", "Tax", "Total"
    );
    for item in &bill.items {
        let _ = writeln!(
            out,
            "{:<12}{:<16}{:>6}{:>14}{:>12}{:>14}",
            item.product_id.to_string(),
            item.name.as_deref().unwrap_or("-"),
            item.quantity,
            rupees(item.unit_price),
            rupees(item.tax_amount),
            rupees(item.total_price)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Amount: {}", rupees(bill.total_amount));
    let _ = writeln!(out, "Tax Amount: {}", rupees(bill.tax_amount));
    let _ = writeln!(out, "Final Amount: {}", rupees(bill.final_amount));

    if let Some(cash) = &hand_off.denominations {
        let _ = writeln!(out);
        out.push_str(&denominations(cash));
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Balance: {}",
            balance(settle(cash.total_paid, bill.final_amount))
        );
    }
    out
}

pub(crate) fn previous_bills(customer_email: &str, bills: &[Bill]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Previous Bills for {}", customer_email);
    for bill in bills {
        let _ = writeln!(out);
        let _ = writeln!(out, "Date: {}", display_local(&bill.created_at));
        let _ = writeln!(out, "Total Amount: {}", rupees(bill.total_amount));
        let _ = writeln!(out, "Tax Amount: {}", rupees(bill.tax_amount));
        let _ = writeln!(out, "Final Amount: {}", rupees(bill.final_amount));
    }
    out
}
