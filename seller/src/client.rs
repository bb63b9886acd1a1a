use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use feed::FeedRecord;

use crate::schema::{ProductListResponse, ProductListResult};
use crate::sync::{create_prices, create_stocks};
use crate::{Error, PriceUpdate, Result, StockUpdate};

const BASE_URL: &str = "https://api-seller.ozon.ru";
const PAGE_LIMIT: usize = 1000;
const STOCK_BATCH: usize = 100;
const PRICE_BATCH: usize = 1000;

pub struct Client {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    api_key: String,
}

impl Client {
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(BASE_URL, client_id, api_key)
    }

    /// Points the client at another API root, e.g. a test server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            client_id: client_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches one catalog page; an empty `last_id` requests the first.
    pub async fn get_product_list(&self, last_id: &str) -> Result<ProductListResult> {
        let body = json!({
            "filter": { "visibility": "ALL" },
            "last_id": last_id,
            "limit": PAGE_LIMIT,
        });
        let response: ProductListResponse = self.post("/v2/product/list", body).await?;
        Ok(response.result)
    }

    /// Walks the catalog pages until the reported total matches what has
    /// been accumulated and collects every listed offer id.
    pub async fn get_offer_ids(&self) -> Result<Vec<String>> {
        let mut offer_ids = Vec::new();
        let mut last_id = String::new();
        loop {
            let result = self.get_product_list(&last_id).await?;
            offer_ids.extend(result.items.into_iter().map(|item| item.offer_id));
            if result.total == offer_ids.len() {
                break;
            }
            last_id = result.last_id;
        }
        Ok(offer_ids)
    }

    pub async fn update_stocks(&self, stocks: &[StockUpdate]) -> Result<()> {
        self.post::<Value>("/v1/product/import/stocks", json!({ "stocks": stocks }))
            .await?;
        Ok(())
    }

    pub async fn update_price(&self, prices: &[PriceUpdate]) -> Result<()> {
        self.post::<Value>("/v1/product/import/prices", json!({ "prices": prices }))
            .await?;
        Ok(())
    }

    /// Reconciles the feed against the catalog and pushes the resulting
    /// stock updates in batches. Returns what was pushed.
    pub async fn upload_stocks(&self, remnants: &[FeedRecord]) -> Result<Vec<StockUpdate>> {
        let offer_ids = self.get_offer_ids().await?;
        let stocks = create_stocks(remnants, offer_ids)?;
        for batch in feed::divide(&stocks, STOCK_BATCH) {
            self.update_stocks(batch).await?;
            log::debug!("Pushed {} stock updates", batch.len());
        }
        Ok(stocks)
    }

    /// Builds price updates for the listed offers and pushes them in
    /// batches. Returns what was pushed.
    pub async fn upload_prices(&self, remnants: &[FeedRecord]) -> Result<Vec<PriceUpdate>> {
        let offer_ids = self.get_offer_ids().await?;
        let prices = create_prices(remnants, &offer_ids);
        for batch in feed::divide(&prices, PRICE_BATCH) {
            self.update_price(batch).await?;
            log::debug!("Pushed {} price updates", batch.len());
        }
        Ok(prices)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Error::Response(response.status(), response.text().await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn client(server: &MockServer) -> Client {
        Client::with_base_url(server.uri(), "client-id", "api-key")
    }

    fn page(ids: &[&str], total: usize, last_id: &str) -> Value {
        json!({
            "result": {
                "items": ids
                    .iter()
                    .map(|id| json!({ "offer_id": id, "product_id": 1 }))
                    .collect::<Vec<_>>(),
                "total": total,
                "last_id": last_id,
            }
        })
    }

    #[tokio::test]
    async fn pagination_stops_when_total_is_reached() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/product/list"))
            .and(header("Client-Id", "client-id"))
            .and(body_partial_json(json!({ "last_id": "" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&["a", "b"], 3, "b")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/product/list"))
            .and(body_partial_json(json!({ "last_id": "b" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&["c"], 3, "c")))
            .expect(1)
            .mount(&server)
            .await;

        let offer_ids = client(&server).get_offer_ids().await.unwrap();
        assert_eq!(offer_ids, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn empty_catalog_terminates_immediately() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/product/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], 0, "")))
            .expect(1)
            .mount(&server)
            .await;

        let offer_ids = client(&server).get_offer_ids().await.unwrap();
        assert!(offer_ids.is_empty());
    }

    #[tokio::test]
    async fn price_helper_splits_into_thousand_sized_batches() {
        let server = MockServer::start().await;
        let ids: Vec<String> = (0..1200).map(|i| format!("sku-{i}")).collect();
        let remnants: Vec<FeedRecord> = ids
            .iter()
            .map(|id| FeedRecord {
                code: id.clone(),
                quantity: "2".to_string(),
                price: "100 руб.".to_string(),
            })
            .collect();

        Mock::given(method("POST"))
            .and(path("/v2/product/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {
                    "items": ids
                        .iter()
                        .map(|id| json!({ "offer_id": id }))
                        .collect::<Vec<_>>(),
                    "total": ids.len(),
                    "last_id": "",
                }
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/product/import/prices"))
            .respond_with(|request: &Request| {
                let body: Value = request.body_json().unwrap();
                let batch = body["prices"].as_array().unwrap().len();
                assert!(batch <= 1000, "price batch of {batch} exceeds the limit");
                ResponseTemplate::new(200).set_body_json(json!({}))
            })
            .expect(2)
            .mount(&server)
            .await;

        let prices = client(&server).upload_prices(&remnants).await.unwrap();
        assert_eq!(prices.len(), 1200);
    }

    #[tokio::test]
    async fn http_error_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client(&server).get_offer_ids().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Response(status, body) if status == 500 && body == "boom"
        ));
    }
}
