//! Client for the seller API of marketplace B ("seller"): catalog listing by
//! last-seen id plus batched stock and price imports.
mod client;
mod error;
mod schema;
mod sync;

pub use client::Client;
pub use error::Error;
pub use schema::{PriceUpdate, StockUpdate};
pub use sync::{create_prices, create_stocks};

pub type Result<T> = std::result::Result<T, Error>;
