use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(reqwest::Error),

    #[error("Request error: {0}")]
    Request(reqwest::Error),

    #[error("Response error:\nStatusCode: {0}\nText: {1}")]
    Response(StatusCode, String),

    #[error("Bad feed archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Bad feed workbook: {0}")]
    Workbook(#[from] calamine::XlsError),

    #[error("Feed workbook has no worksheet")]
    MissingSheet,

    #[error("Feed sheet ends before the header row")]
    MissingHeader,

    #[error("Feed header has no column named {0:?}")]
    MissingColumn(String),

    #[error("Invalid quantity {0:?}: {1}")]
    Quantity(String, std::num::ParseIntError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else if err.is_connect() {
            Error::Connection(err)
        } else {
            Error::Request(err)
        }
    }
}
