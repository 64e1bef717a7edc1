use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{0}'")]
    RequestNotOk(String),
    #[error("Content not found in html: '{0}'")]
    ContentNotFound(&'static str),
    #[error("Salary has no parseable amount: '{0}'")]
    SalaryFormat(String),
    #[error("Invalid url: '{0}'")]
    InvalidUrl(#[from] url::ParseError),
}
