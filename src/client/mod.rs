use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Thin wrapper around `reqwest` for the two read-only list endpoints.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// `GET`s `url` and decodes the body as a JSON array of `T`, in the
    /// order the server sent it.
    pub async fn fetch_list<T>(&self, url: Url) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "fetching list");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => return Err(Error::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(Error::Request { url, source }),
        };

        let items: Vec<T> = match serde_json::from_slice(&body) {
            Ok(items) => items,
            Err(source) => return Err(Error::Decode { url, source }),
        };

        tracing::debug!(%url, count = items.len(), "fetched list");
        Ok(items)
    }
}
