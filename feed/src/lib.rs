//! Supplier stock feed: downloading the published archive, the record type,
//! and the pure conversion helpers shared by both marketplace crates.
mod convert;
mod download;
mod error;
mod record;

pub use convert::{divide, normalize_quantity, price_conversion};
pub use download::download_stock;
pub use error::Error;
pub use record::FeedRecord;

pub type Result<T> = std::result::Result<T, Error>;
