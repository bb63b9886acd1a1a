use feed::{normalize_quantity, price_conversion, FeedRecord};

use crate::schema::{PriceUpdate, StockUpdate};
use crate::Result;

const AUTO_ACTION: &str = "UNKNOWN";
const CURRENCY: &str = "RUB";
const OLD_PRICE: &str = "0";

/// Matches feed records against the shop's catalog and builds exactly one
/// stock update per listed offer: the normalized feed count where the feed
/// has the offer, zero for the rest.
pub fn create_stocks(
    remnants: &[FeedRecord],
    mut offer_ids: Vec<String>,
) -> Result<Vec<StockUpdate>> {
    let mut stocks = Vec::with_capacity(offer_ids.len());
    for watch in remnants {
        if let Some(position) = offer_ids.iter().position(|id| *id == watch.code) {
            stocks.push(StockUpdate {
                offer_id: offer_ids.remove(position),
                stock: normalize_quantity(&watch.quantity)?,
            });
        }
    }
    // Whatever the feed did not mention is out of stock.
    for offer_id in offer_ids {
        stocks.push(StockUpdate {
            offer_id,
            stock: 0,
        });
    }
    Ok(stocks)
}

/// Builds a price update for every feed record the catalog lists. Offers
/// absent from the feed keep their current price.
pub fn create_prices(remnants: &[FeedRecord], offer_ids: &[String]) -> Vec<PriceUpdate> {
    remnants
        .iter()
        .filter(|watch| offer_ids.iter().any(|id| *id == watch.code))
        .map(|watch| PriceUpdate {
            auto_action_enabled: AUTO_ACTION.to_string(),
            currency_code: CURRENCY.to_string(),
            offer_id: watch.code.clone(),
            old_price: OLD_PRICE.to_string(),
            price: price_conversion(&watch.price),
        })
        .collect()
}
