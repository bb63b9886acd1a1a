/// One row of the supplier feed, with quantity and price kept exactly as
/// they appear in the spreadsheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedRecord {
    pub code: String,
    pub quantity: String,
    pub price: String,
}
