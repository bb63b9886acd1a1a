use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub(crate) struct ProductListResponse {
    pub result: ProductListResult,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResult {
    #[serde(default)]
    pub offer_mapping_entries: Vec<OfferMappingEntry>,
    #[serde(default)]
    pub paging: Paging,
}

#[derive(Deserialize, Debug)]
pub struct OfferMappingEntry {
    pub offer: Offer,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub shop_sku: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub next_page_token: Option<String>,
}

/// One catalog entry's stock state, as the update endpoint expects it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub sku: String,
    pub warehouse_id: String,
    pub items: Vec<StockItem>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub count: i64,
    pub r#type: String,
    pub updated_at: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PriceUpdate {
    pub id: String,
    pub price: Price,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub value: i64,
    pub currency_id: String,
}
