//! Normalization of list responses.
//!
//! Backend list endpoints answer either with a bare JSON array or with a
//! paginated envelope. Both shapes are resolved here, once, so call sites
//! only ever see a `Vec<T>`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A paginated list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Either shape a list endpoint may produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Paginated(Page<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) => items,
            ListResponse::Paginated(page) => page.results,
        }
    }

    /// Total number of records on the server, when the response says so.
    pub fn total(&self) -> usize {
        match self {
            ListResponse::Plain(items) => items.len(),
            ListResponse::Paginated(page) => page
                .count
                .map(|c| c as usize)
                .unwrap_or(page.results.len()),
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self, ListResponse::Paginated(page) if page.next.is_some())
    }
}

/// Parse a list response body into its items.
pub fn parse_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, CoreError> {
    let response: ListResponse<T> = serde_json::from_slice(body)?;
    Ok(response.into_items())
}
