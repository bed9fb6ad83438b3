use reqwest::Url;
use serde::de::DeserializeOwned;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::client::Client;
use crate::error::{Error, Result};

/// Where a controller's single fetch stands.
#[derive(Debug)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(Error),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Owns one panel's collection, populated by exactly one fetch issued when
/// the controller is created.
///
/// The fetch runs on the tokio runtime and reports back over a oneshot
/// channel; the result is only applied when the owner calls [`poll`] or
/// [`settle`], so the collection is never mutated behind its back.
///
/// [`poll`]: ListController::poll
/// [`settle`]: ListController::settle
#[derive(Debug)]
pub struct ListController<T> {
    url: Url,
    items: Vec<T>,
    status: LoadStatus,
    pending: Option<oneshot::Receiver<Result<Vec<T>>>>,
}

impl<T> ListController<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Issues the fetch and returns immediately. Must be called from within
    /// a tokio runtime.
    pub fn spawn(client: &Client, url: Url) -> Self {
        let (tx, rx) = oneshot::channel();
        let client = client.clone();
        let task_url = url.clone();

        tokio::spawn(async move {
            let result = client.fetch_list(task_url).await;
            // the receiver is gone if the controller was dropped first
            let _ = tx.send(result);
        });

        Self {
            url,
            items: Vec::new(),
            status: LoadStatus::Pending,
            pending: Some(rx),
        }
    }
}

impl<T> ListController<T> {
    /// A controller whose fetch has already completed with `result`.
    #[cfg(test)]
    pub(crate) fn from_result(url: Url, result: Result<Vec<T>>) -> Self {
        let mut controller = Self {
            url,
            items: Vec::new(),
            status: LoadStatus::Pending,
            pending: None,
        };
        controller.apply(result);
        controller
    }

    /// A pending controller fed by the returned sender instead of a fetch.
    #[cfg(test)]
    pub(crate) fn detached(url: Url) -> (Self, oneshot::Sender<Result<Vec<T>>>) {
        let (tx, rx) = oneshot::channel();
        let controller = Self {
            url,
            items: Vec::new(),
            status: LoadStatus::Pending,
            pending: Some(rx),
        };
        (controller, tx)
    }

    /// Applies the fetch result if it has arrived. Returns `true` when the
    /// controller changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(Error::Abandoned {
                url: self.url.clone(),
            }),
        };
        self.pending = None;
        self.apply(result);
        true
    }

    /// Waits for the fetch to finish and applies its result.
    pub async fn settle(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };

        let result = match rx.await {
            Ok(result) => result,
            Err(_) => Err(Error::Abandoned {
                url: self.url.clone(),
            }),
        };
        self.apply(result);
    }

    fn apply(&mut self, result: Result<Vec<T>>) {
        match result {
            Ok(items) => {
                tracing::info!(url = %self.url, count = items.len(), "list loaded");
                self.items = items;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(url = %self.url, error = %err, "list failed to load");
                self.status = LoadStatus::Failed(err);
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}
