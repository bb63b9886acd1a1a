use std::io::{Cursor, Read};

use calamine::{Data, Reader, Xls};
use zip::ZipArchive;

use crate::{Error, FeedRecord, Result};

const FEED_URL: &str = "https://timeworld.ru/upload/files/ostatki.zip";
const FEED_ENTRY: &str = "ostatki.xls";
/// Rows above this index are a decorative preamble; this one holds the
/// column names.
const HEADER_ROW: usize = 17;

const CODE_COLUMN: &str = "Код";
const QUANTITY_COLUMN: &str = "Количество";
const PRICE_COLUMN: &str = "Цена";

/// Downloads the supplier archive and returns one record per sheet row
/// below the header. The archive and the sheet are parsed entirely in
/// memory; nothing is written to disk.
pub async fn download_stock() -> Result<Vec<FeedRecord>> {
    let response = reqwest::get(FEED_URL).await?;
    if !response.status().is_success() {
        return Err(Error::Response(response.status(), response.text().await?));
    }
    let archive = response.bytes().await?;
    log::info!("Downloaded {} byte feed archive", archive.len());
    parse_feed(&archive)
}

fn parse_feed(archive: &[u8]) -> Result<Vec<FeedRecord>> {
    let mut archive = ZipArchive::new(Cursor::new(archive))?;
    let mut sheet = Vec::new();
    archive.by_name(FEED_ENTRY)?.read_to_end(&mut sheet)?;

    let mut workbook = Xls::new(Cursor::new(sheet))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(Error::MissingSheet)??;

    let mut rows = range.rows().skip(HEADER_ROW);
    let header = rows.next().ok_or(Error::MissingHeader)?;
    let code = column_index(header, CODE_COLUMN)?;
    let quantity = column_index(header, QUANTITY_COLUMN)?;
    let price = column_index(header, PRICE_COLUMN)?;

    Ok(rows
        .map(|row| FeedRecord {
            code: cell_text(row.get(code)),
            quantity: cell_text(row.get(quantity)),
            price: cell_text(row.get(price)),
        })
        .collect())
}

fn column_index(header: &[Data], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell_text(Some(cell)) == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

/// Renders a cell the way the feed means it: blank cells stay empty and
/// whole numbers render without a trailing ".0".
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(f)) if f.fract() == 0.0 => (*f as i64).to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => dt.as_f64().to_string(),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => s.clone(),
        Some(Data::Error(_)) | Some(Data::Empty) | None => String::new(),
    }
}
