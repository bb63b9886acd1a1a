use std::env;

use anyhow::{Context, Result};

/// Credentials and identifiers for one sync run, read from the environment
/// once at startup.
pub(crate) struct Config {
    pub market_token: String,
    pub campaign_fbs_id: String,
    pub campaign_dbs_id: String,
    pub warehouse_fbs_id: String,
    pub warehouse_dbs_id: String,
    pub client_id: String,
    pub seller_token: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Ok(Self {
            market_token: var("MARKET_TOKEN")?,
            campaign_fbs_id: var("FBS_ID")?,
            campaign_dbs_id: var("DBS_ID")?,
            warehouse_fbs_id: var("WAREHOUSE_FBS_ID")?,
            warehouse_dbs_id: var("WAREHOUSE_DBS_ID")?,
            client_id: var("CLIENT_ID")?,
            seller_token: var("SELLER_TOKEN")?,
        })
    }
}

fn var(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} is not set in the environment"))
}
