use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use feed::FeedRecord;

use crate::schema::{ProductListResponse, ProductListResult};
use crate::sync::{create_prices, create_stocks};
use crate::{Error, PriceUpdate, Result, StockUpdate};

const BASE_URL: &str = "https://api.partner.market.yandex.ru/";
const PAGE_LIMIT: usize = 200;
const STOCK_BATCH: usize = 2000;
const PRICE_BATCH: usize = 500;

pub struct Client {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(BASE_URL, token)
    }

    /// Points the client at another API root, e.g. a test server. The root
    /// must end with a slash.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Fetches one catalog page; an empty `page_token` requests the first.
    pub async fn get_product_list(
        &self,
        page_token: &str,
        campaign_id: &str,
    ) -> Result<ProductListResult> {
        let url = format!("{}campaigns/{campaign_id}/offer-mapping-entries", self.base_url);
        let request = self.client.get(url).query(&[
            ("page_token", page_token.to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ]);
        Ok(self.send::<ProductListResponse>(request).await?.result)
    }

    /// Walks the catalog pages until the API stops returning a next-page
    /// token and collects every listed sku.
    pub async fn get_offer_ids(&self, campaign_id: &str) -> Result<Vec<String>> {
        let mut offer_ids = Vec::new();
        let mut page_token = String::new();
        loop {
            let result = self.get_product_list(&page_token, campaign_id).await?;
            offer_ids.extend(
                result
                    .offer_mapping_entries
                    .into_iter()
                    .map(|entry| entry.offer.shop_sku),
            );
            match result.paging.next_page_token {
                Some(token) if !token.is_empty() => page_token = token,
                _ => break,
            }
        }
        Ok(offer_ids)
    }

    pub async fn update_stocks(&self, stocks: &[StockUpdate], campaign_id: &str) -> Result<()> {
        let url = format!("{}campaigns/{campaign_id}/offers/stocks", self.base_url);
        let request = self.client.put(url).json(&json!({ "skus": stocks }));
        self.send::<Value>(request).await?;
        Ok(())
    }

    pub async fn update_price(&self, prices: &[PriceUpdate], campaign_id: &str) -> Result<()> {
        let url = format!("{}campaigns/{campaign_id}/offer-prices/updates", self.base_url);
        let request = self.client.post(url).json(&json!({ "offers": prices }));
        self.send::<Value>(request).await?;
        Ok(())
    }

    /// Reconciles the feed against the campaign catalog and pushes the
    /// resulting stock updates in batches. Returns what was pushed.
    pub async fn upload_stocks(
        &self,
        remnants: &[FeedRecord],
        campaign_id: &str,
        warehouse_id: &str,
    ) -> Result<Vec<StockUpdate>> {
        let offer_ids = self.get_offer_ids(campaign_id).await?;
        let stocks = create_stocks(remnants, offer_ids, warehouse_id)?;
        for batch in feed::divide(&stocks, STOCK_BATCH) {
            self.update_stocks(batch, campaign_id).await?;
            log::debug!(
                "Pushed {} stock updates to campaign {campaign_id}",
                batch.len()
            );
        }
        Ok(stocks)
    }

    /// Builds price updates for the campaign's listed skus and pushes them
    /// in batches. Returns what was pushed.
    pub async fn upload_prices(
        &self,
        remnants: &[FeedRecord],
        campaign_id: &str,
    ) -> Result<Vec<PriceUpdate>> {
        let offer_ids = self.get_offer_ids(campaign_id).await?;
        let prices = create_prices(remnants, &offer_ids)?;
        for batch in feed::divide(&prices, PRICE_BATCH) {
            self.update_price(batch, campaign_id).await?;
            log::debug!(
                "Pushed {} price updates to campaign {campaign_id}",
                batch.len()
            );
        }
        Ok(prices)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Error::Response(response.status(), response.text().await?))
        }
    }
}
