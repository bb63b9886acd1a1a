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

    #[error("Invalid price {0:?}: {1}")]
    Price(String, std::num::ParseIntError),

    #[error("Feed error: {0}")]
    Feed(#[from] feed::Error),
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
