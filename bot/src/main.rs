mod config;

use anyhow::Result;
use log::{error, info};

use config::Config;
use feed::FeedRecord;

// The import-prices endpoint takes up to 1000 entries per call; this run
// stays below that on purpose.
const SELLER_PRICE_BATCH: usize = 900;

#[tokio::main]
async fn main() -> Result<()> {
    common::setup_env();
    let config = Config::from_env()?;

    let remnants = match feed::download_stock().await {
        Ok(remnants) => remnants,
        Err(err) => {
            report("Feed download", &feed_category(&err), &err);
            return Ok(());
        }
    };
    info!("Feed holds {} records", remnants.len());

    if let Err(err) = sync_seller(&config, &remnants).await {
        report("Seller sync", &seller_category(&err), &err);
    }
    if let Err(err) = sync_market(&config, &remnants).await {
        report("Market sync", &market_category(&err), &err);
    }

    // A failed section is reported above; the job itself always finishes.
    Ok(())
}

/// Pushes stocks and prices for marketplace B. Each pass fetches the
/// catalog for itself; the stock pass drains its copy while reconciling.
async fn sync_seller(config: &Config, remnants: &[FeedRecord]) -> seller::Result<()> {
    let client = seller::Client::new(&config.client_id, &config.seller_token);

    let stocks = client.upload_stocks(remnants).await?;
    info!("Seller: pushed {} stock updates", stocks.len());

    let offer_ids = client.get_offer_ids().await?;
    let prices = seller::create_prices(remnants, &offer_ids);
    for batch in feed::divide(&prices, SELLER_PRICE_BATCH) {
        client.update_price(batch).await?;
    }
    info!("Seller: pushed {} price updates", prices.len());
    Ok(())
}

/// Pushes stocks and prices for marketplace A, once per campaign.
async fn sync_market(config: &Config, remnants: &[FeedRecord]) -> market::Result<()> {
    let client = market::Client::new(&config.market_token);
    let campaigns = [
        (&config.campaign_fbs_id, &config.warehouse_fbs_id),
        (&config.campaign_dbs_id, &config.warehouse_dbs_id),
    ];

    for (campaign_id, warehouse_id) in campaigns {
        let stocks = client
            .upload_stocks(remnants, campaign_id, warehouse_id)
            .await?;
        info!(
            "Market campaign {campaign_id}: pushed {} stock updates",
            stocks.len()
        );

        let prices = client.upload_prices(remnants, campaign_id).await?;
        info!(
            "Market campaign {campaign_id}: pushed {} price updates",
            prices.len()
        );
    }
    Ok(())
}

fn report(section: &str, category: &str, err: &dyn std::error::Error) {
    error!("{section} failed ({category}): {err}");
}

fn feed_category(err: &feed::Error) -> String {
    match err {
        feed::Error::Timeout(_) => "timeout".to_string(),
        feed::Error::Connection(_) => "connection".to_string(),
        feed::Error::Response(status, _) => format!("http {status}"),
        _ => "error".to_string(),
    }
}

fn market_category(err: &market::Error) -> String {
    match err {
        market::Error::Timeout(_) => "timeout".to_string(),
        market::Error::Connection(_) => "connection".to_string(),
        market::Error::Response(status, _) => format!("http {status}"),
        _ => "error".to_string(),
    }
}

fn seller_category(err: &seller::Error) -> String {
    match err {
        seller::Error::Timeout(_) => "timeout".to_string(),
        seller::Error::Connection(_) => "connection".to_string(),
        seller::Error::Response(status, _) => format!("http {status}"),
        _ => "error".to_string(),
    }
}
