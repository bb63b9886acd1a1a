use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub(crate) struct ProductListResponse {
    pub result: ProductListResult,
}

#[derive(Deserialize, Debug)]
pub struct ProductListResult {
    #[serde(default)]
    pub items: Vec<ProductItem>,
    pub total: usize,
    #[serde(default)]
    pub last_id: String,
}

#[derive(Deserialize, Debug)]
pub struct ProductItem {
    pub offer_id: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StockUpdate {
    pub offer_id: String,
    pub stock: i64,
}

/// One import-prices entry. The price stays a digit string; the API takes
/// it verbatim.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PriceUpdate {
    pub auto_action_enabled: String,
    pub currency_code: String,
    pub offer_id: String,
    pub old_price: String,
    pub price: String,
}
