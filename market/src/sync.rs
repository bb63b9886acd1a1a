use time::OffsetDateTime;

use feed::{normalize_quantity, price_conversion, FeedRecord};

use crate::schema::{Price, PriceUpdate, StockItem, StockUpdate};
use crate::{Error, Result};

const STOCK_TYPE: &str = "FIT";
const CURRENCY: &str = "RUR";

/// Matches feed records against the campaign's catalog and builds exactly
/// one stock update per catalog sku: the normalized feed count for skus the
/// feed mentions, zero for the rest.
pub fn create_stocks(
    remnants: &[FeedRecord],
    mut offer_ids: Vec<String>,
    warehouse_id: &str,
) -> Result<Vec<StockUpdate>> {
    let updated_at = updated_at();
    let mut stocks = Vec::with_capacity(offer_ids.len());
    for watch in remnants {
        if let Some(position) = offer_ids.iter().position(|id| *id == watch.code) {
            stocks.push(stock_update(
                offer_ids.remove(position),
                normalize_quantity(&watch.quantity)?,
                warehouse_id,
                &updated_at,
            ));
        }
    }
    // Whatever the feed did not mention is out of stock.
    for offer_id in offer_ids {
        stocks.push(stock_update(offer_id, 0, warehouse_id, &updated_at));
    }
    Ok(stocks)
}

/// Builds a price update for every feed record listed in the catalog.
/// Skus absent from the feed keep their current price.
pub fn create_prices(remnants: &[FeedRecord], offer_ids: &[String]) -> Result<Vec<PriceUpdate>> {
    let mut prices = Vec::new();
    for watch in remnants {
        if offer_ids.iter().any(|id| *id == watch.code) {
            let value = price_conversion(&watch.price)
                .parse()
                .map_err(|err| Error::Price(watch.price.clone(), err))?;
            prices.push(PriceUpdate {
                id: watch.code.clone(),
                price: Price {
                    value,
                    currency_id: CURRENCY.to_string(),
                },
            });
        }
    }
    Ok(prices)
}

fn stock_update(sku: String, count: i64, warehouse_id: &str, updated_at: &str) -> StockUpdate {
    StockUpdate {
        sku,
        warehouse_id: warehouse_id.to_string(),
        items: vec![StockItem {
            count,
            r#type: STOCK_TYPE.to_string(),
            updated_at: updated_at.to_string(),
        }],
    }
}

/// Current UTC time at second precision, e.g. "2023-01-01T00:00:00Z".
fn updated_at() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, quantity: &str, price: &str) -> FeedRecord {
        FeedRecord {
            code: code.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    fn counts(stocks: &[StockUpdate]) -> Vec<(&str, i64)> {
        stocks
            .iter()
            .map(|s| (s.sku.as_str(), s.items[0].count))
            .collect()
    }

    #[test]
    fn every_catalog_sku_gets_exactly_one_update() {
        let remnants = [record("123", "5", "100 руб.")];
        let catalog = vec!["123".to_string(), "456".to_string()];

        let stocks = create_stocks(&remnants, catalog, "wh-1").unwrap();

        assert_eq!(counts(&stocks), [("123", 5), ("456", 0)]);
        assert!(stocks.iter().all(|s| s.warehouse_id == "wh-1"));
        assert!(stocks.iter().all(|s| s.items[0].r#type == "FIT"));
    }

    #[test]
    fn sentinels_are_normalized() {
        let remnants = [record("a", ">10", "1"), record("b", "1", "1")];
        let catalog = vec!["a".to_string(), "b".to_string()];

        let stocks = create_stocks(&remnants, catalog, "wh").unwrap();

        assert_eq!(counts(&stocks), [("a", 100), ("b", 0)]);
    }

    #[test]
    fn feed_records_off_catalog_are_ignored() {
        let remnants = [record("999", "5", "1")];
        let stocks = create_stocks(&remnants, vec!["123".to_string()], "wh").unwrap();
        assert_eq!(counts(&stocks), [("123", 0)]);
    }

    #[test]
    fn malformed_quantity_aborts() {
        let remnants = [record("123", "lots", "1")];
        let result = create_stocks(&remnants, vec!["123".to_string()], "wh");
        assert!(matches!(result, Err(Error::Feed(_))));
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let remnants = [record("1", "3", "1"), record("2", ">10", "1")];
        let catalog = vec!["2".to_string(), "3".to_string()];

        let first = create_stocks(&remnants, catalog.clone(), "wh").unwrap();
        let second = create_stocks(&remnants, catalog, "wh").unwrap();

        assert_eq!(counts(&first), counts(&second));
    }

    #[test]
    fn prices_cover_only_listed_feed_records() {
        let remnants = [
            record("123", "5", "5'990.00 руб."),
            record("999", "5", "100 руб."),
        ];
        let catalog = vec!["123".to_string(), "456".to_string()];

        let prices = create_prices(&remnants, &catalog).unwrap();

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].id, "123");
        assert_eq!(prices[0].price.value, 5990);
        assert_eq!(prices[0].price.currency_id, "RUR");
    }

    #[test]
    fn unpriced_feed_record_aborts() {
        let remnants = [record("123", "5", "руб.")];
        let result = create_prices(&remnants, &["123".to_string()]);
        assert!(matches!(result, Err(Error::Price(..))));
    }
}
