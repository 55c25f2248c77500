//! Dataset loading.
//!
//! The wine list is one static JSON document with a top-level `wines` array.
//! Loading is best effort: a fetch or parse failure leaves the caller with an
//! empty wine set and a warning in the logs. There are no retries and no
//! timeout handling beyond the HTTP client's defaults.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domain::{Wine, WineRecord};
use crate::error::Result;
use crate::pipeline::quality_gate;

/// A source the wine list document can be fetched from.
#[async_trait]
pub trait WineSource: Send + Sync {
    /// Human-readable identifier for logs.
    fn source_name(&self) -> String;

    /// Fetch the raw JSON document bytes.
    async fn fetch_raw(&self) -> Result<Vec<u8>>;
}

/// Reads the dataset from a local file.
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WineSource for FileSource {
    fn source_name(&self) -> String {
        format!("file:{}", self.path)
    }

    async fn fetch_raw(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// Fetches the dataset over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl WineSource for HttpSource {
    fn source_name(&self) -> String {
        self.url.clone()
    }

    async fn fetch_raw(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[derive(Debug, Deserialize)]
struct WineDocument {
    /// A document without a `wines` field is an empty list, not an error.
    #[serde(default)]
    wines: Vec<WineRecord>,
}

/// Parses the raw document into its ordered sequence of raw records.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<WineRecord>> {
    let document: WineDocument = serde_json::from_slice(bytes)?;
    Ok(document.wines)
}

/// Loads the raw records from `source`, or an empty list if the load fails.
#[instrument(skip(source), fields(source = %source.source_name()))]
pub async fn load_raw_records(source: &dyn WineSource) -> Vec<WineRecord> {
    let bytes = match source.fetch_raw().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Wine list fetch failed, continuing with empty set: {}", e);
            return Vec::new();
        }
    };

    match parse_records(&bytes) {
        Ok(records) => {
            info!("Loaded {} raw wine records", records.len());
            records
        }
        Err(e) => {
            warn!("Wine list parse failed, continuing with empty set: {}", e);
            Vec::new()
        }
    }
}

/// Loads, validates and admits the wine set in one step.
///
/// The returned wines are the canonical, immutable dataset for the session;
/// everything downstream filters views over it through the query engine.
pub async fn load_wine_list(source: &dyn WineSource) -> Vec<Wine> {
    let records = load_raw_records(source).await;
    let wines = quality_gate::filter_valid(&records);
    if wines.len() < records.len() {
        info!(
            "Quality gate dropped {} of {} records",
            records.len() - wines.len(),
            records.len()
        );
    }
    wines
}
