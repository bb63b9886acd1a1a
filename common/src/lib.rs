use env_logger::Builder;
use log::LevelFilter;

/// Loads `.env` if present and initializes the logger at `info`. Call once,
/// before anything logs.
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::new().filter_level(LevelFilter::Info).init();
}
