//! Client for the partner API of marketplace A ("market"): campaign-scoped
//! catalog listing plus batched stock and price updates.
mod client;
mod error;
mod schema;
mod sync;

pub use client::Client;
pub use error::Error;
pub use schema::{Price, PriceUpdate, StockItem, StockUpdate};
pub use sync::{create_prices, create_stocks};

pub type Result<T> = std::result::Result<T, Error>;
