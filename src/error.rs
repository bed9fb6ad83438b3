use reqwest::{StatusCode, Url};
use thiserror::Error;

/// Why a list fetch did not produce a collection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: Url, status: StatusCode },
    #[error("{url} returned an unexpected payload: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
    #[error("fetch for {url} was dropped before completing")]
    Abandoned { url: Url },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
