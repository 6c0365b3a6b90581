use crate::desk::util::money::parse_int_prefix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cash input on the billing form: the note/coin value and the count
/// typed by the cashier.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DenominationInput {
    pub value: u32,
    pub count: String,
}

impl DenominationInput {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            count: "0".to_string(),
        }
    }

    /// Count as entered; anything unreadable or negative is zero.
    pub fn parsed_count(&self) -> u64 {
        parse_int_prefix(&self.count)
            .filter(|n| *n > 0)
            .map_or(0, |n| n as u64)
    }
}

/// Cash received, by denomination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct DenominationBreakdown {
    /// value -> count, only denominations with a positive count
    pub breakdown: BTreeMap<u32, u64>,
    pub total_paid: u64,
}

/// Sum the cash inputs. Inputs with the same value are merged.
/// `None` when a count or the total does not fit in a `u64`.
pub(crate) fn tally(inputs: &[DenominationInput]) -> Option<DenominationBreakdown> {
    inputs
        .iter()
        .map(|input| (input.value, input.parsed_count()))
        .filter(|(_, count)| *count > 0)
        .try_fold(DenominationBreakdown::default(), |mut acc, (value, count)| {
            let merged = acc.breakdown.entry(value).or_default();
            *merged = merged.checked_add(count)?;
            acc.total_paid = (value as u64)
                .checked_mul(count)
                .and_then(|paid| acc.total_paid.checked_add(paid))?;
            Some(acc)
        })
}

/// Outcome of comparing cash received with the bill's final amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Balance {
    Change(f64),
    Due(f64),
}

/// The balance is rounded to cents first, so float noise in the backend
/// amount never turns an exact payment into a zero amount due.
pub(crate) fn settle(total_paid: u64, final_amount: f64) -> Balance {
    let balance = ((total_paid as f64 - final_amount) * 100.0).round() / 100.0;
    if balance >= 0.0 {
        Balance::Change(balance.abs())
    } else {
        Balance::Due(balance.abs())
    }
}
