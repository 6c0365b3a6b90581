use serde::Deserialize;

/// A catalog row as served by `GET /api/products/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "productId")]
    pub product_id: Option<String>,
    pub name: String,
    #[serde(default, alias = "unit_price")]
    pub price: Option<f64>,
    #[serde(default, alias = "availableStock")]
    pub available_stock: Option<i64>,
    #[serde(default)]
    pub tax_percentage: Option<f64>,
}

impl Product {
    /// Identifier used when the product is picked: the product code,
    /// or the backend row id when no code is set.
    pub fn identifier(&self) -> Option<String> {
        self.product_id
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .or_else(|| self.id.map(|id| id.to_string()))
    }
}

/// One entry of the product picker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductOption {
    /// empty for the placeholder
    pub value: String,
    pub label: String,
}
