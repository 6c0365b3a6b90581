use crate::desk::controller::error::DeskError;
use crate::desk::model::bill::LineItem;
use crate::desk::model::denomination::{tally, DenominationBreakdown, DenominationInput};
use crate::desk::util::money::parse_int_prefix;

const DEFAULT_QUANTITY: &str = "1";

/// One product line of the billing form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductRow {
    pub product_id: Option<String>,
    pub quantity: String,
}

impl Default for ProductRow {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: DEFAULT_QUANTITY.to_string(),
        }
    }
}

/// State of the billing screen: customer, product lines and cash received.
#[derive(Debug, Clone)]
pub(crate) struct BillForm {
    customer_email: String,
    rows: Vec<ProductRow>,
    denominations: Vec<DenominationInput>,
}

impl BillForm {
    /// A fresh form with a single empty product line and one zeroed cash
    /// input per denomination.
    pub fn new(denominations: &[u32]) -> Self {
        Self {
            customer_email: String::new(),
            rows: vec![ProductRow::default()],
            denominations: denominations.iter().copied().map(DenominationInput::new).collect(),
        }
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn set_customer_email(&mut self, email: &str) {
        self.customer_email = email.to_string();
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    /// Append an empty line, returning its index.
    pub fn add_product_row(&mut self) -> usize {
        self.rows.push(ProductRow::default());
        self.rows.len() - 1
    }

    #[cfg(test)]
    pub fn remove_product_row(&mut self, row: usize) -> Option<ProductRow> {
        (row < self.rows.len()).then(|| self.rows.remove(row))
    }

    pub fn select_product(&mut self, row: usize, product_id: &str) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.product_id = Some(product_id.to_string()).filter(|id| !id.is_empty());
                true
            }
            None => false,
        }
    }

    pub fn set_quantity(&mut self, row: usize, quantity: &str) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.quantity = quantity.to_string();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn denominations(&self) -> &[DenominationInput] {
        &self.denominations
    }

    /// Returns false when the form has no input for `value`.
    pub fn set_denomination_count(&mut self, value: u32, count: &str) -> bool {
        match self.denominations.iter_mut().find(|d| d.value == value) {
            Some(input) => {
                input.count = count.to_string();
                true
            }
            None => false,
        }
    }

    pub fn tally(&self) -> Result<DenominationBreakdown, DeskError> {
        tally(&self.denominations).ok_or(DeskError::CashOverflow)
    }

    /// Line items for submission. Lines without a product or with a blank
    /// quantity are skipped; any other quantity must be a positive integer.
    pub fn collect_items(&self) -> Result<Vec<LineItem>, DeskError> {
        let mut items = Vec::with_capacity(self.rows.len());
        for (row, line) in self.rows.iter().enumerate() {
            let Some(product_id) = line.product_id.as_deref() else {
                continue;
            };
            if line.quantity.trim().is_empty() {
                continue;
            }
            let quantity = parse_int_prefix(&line.quantity)
                .filter(|q| *q > 0)
                .and_then(|q| u32::try_from(q).ok())
                .ok_or_else(|| DeskError::InvalidQuantity {
                    row,
                    product_id: product_id.to_string(),
                    quantity: line.quantity.clone(),
                })?;
            items.push(LineItem {
                product_id: product_id.to_string(),
                quantity,
            });
        }
        Ok(items)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_with_one_blank_line() {
        let form = BillForm::new(&[500, 100]);
        assert_eq!(form.rows(), &[ProductRow::default()]);
        assert_eq!(form.denominations().len(), 2);
        assert_eq!(form.tally().unwrap().total_paid, 0);
        assert!(form.collect_items().unwrap().is_empty());
    }

    #[test]
    fn add_and_remove_lines() {
        let mut form = BillForm::new(&[]);
        let second = form.add_product_row();
        assert_eq!(second, 1);
        assert!(form.select_product(second, "MS001"));
        assert!(form.set_quantity(second, "3"));
        assert!(form.remove_product_row(0).is_some());
        assert!(form.remove_product_row(5).is_none());
        assert!(!form.select_product(5, "LP001"));

        let items = form.collect_items().unwrap();
        assert_eq!(
            items,
            vec![LineItem {
                product_id: "MS001".to_string(),
                quantity: 3
            }]
        );
    }

    #[test]
    fn skips_unselected_and_blank_lines() {
        let mut form = BillForm::new(&[]);
        form.select_product(0, "LP001");
        form.set_quantity(0, "");
        let row = form.add_product_row();
        form.set_quantity(row, "4");
        let row = form.add_product_row();
        form.select_product(row, "KB001");
        assert_eq!(
            form.collect_items().unwrap(),
            vec![LineItem {
                product_id: "KB001".to_string(),
                quantity: 1
            }]
        );
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let mut form = BillForm::new(&[]);
        form.select_product(0, "LP001");
        form.set_quantity(0, "0");
        assert!(matches!(
            form.collect_items(),
            Err(DeskError::InvalidQuantity { row: 0, .. })
        ));
        form.set_quantity(0, "many");
        assert!(form.collect_items().is_err());
    }

    #[test]
    fn cash_inputs() {
        let mut form = BillForm::new(&[2000, 500, 100]);
        assert!(form.set_denomination_count(2000, "2"));
        assert!(form.set_denomination_count(100, "5"));
        assert!(!form.set_denomination_count(7, "1"));
        let breakdown = form.tally().unwrap();
        assert_eq!(breakdown.total_paid, 4500);
        assert_eq!(breakdown.breakdown.len(), 2);
    }

    #[test]
    fn oversized_cash_count() {
        let mut form = BillForm::new(&[2000]);
        form.set_denomination_count(2000, "9999999999999999");
        assert!(matches!(form.tally(), Err(DeskError::CashOverflow)));
    }
}
