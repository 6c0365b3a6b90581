use crate::desk::api::BillingApi;
use crate::desk::controller::error::DeskError;
use crate::desk::controller::BillingDesk;
use crate::desk::model::product::{Product, ProductOption};
use crate::desk::session::SessionStore;
use crate::desk::util::money::{format_amount, CURRENCY};
use log::{error, info, warn};

const PLACEHOLDER: &str = "Select Product";

impl<A: BillingApi, S: SessionStore> BillingDesk<A, S> {
    /// Fetch the catalog. No retry and no caching.
    pub async fn load_products(&self) -> Result<Vec<Product>, DeskError> {
        match self.api.list_products().await {
            Ok(products) => {
                info!("loaded {} product(s)", products.len());
                Ok(products)
            }
            Err(e) => {
                error!("Error loading products: {}", e);
                Err(DeskError::CatalogFailed(e))
            }
        }
    }
}

/// Picker entries: the placeholder followed by one option per product.
pub(crate) fn product_options(products: &[Product]) -> Vec<ProductOption> {
    let mut options = Vec::with_capacity(products.len() + 1);
    options.push(ProductOption {
        value: String::new(),
        label: PLACEHOLDER.to_string(),
    });
    options.extend(products.iter().filter_map(|product| {
        let Some(value) = product.identifier() else {
            warn!("product {:?} has no identifier, skipping", product.name);
            return None;
        };
        let price = product.price.map(format_amount).unwrap_or_default();
        let stock = product
            .available_stock
            .map(|s| s.to_string())
            .unwrap_or_default();
        Some(ProductOption {
            value,
            label: format!("{} - {}{} (Stock: {})", product.name, CURRENCY, price, stock),
        })
    }));
    options
}
