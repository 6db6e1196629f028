//! Dataset sources for the catalog. The two datasets are fetched concurrently
//! at startup; a failed fetch degrades to an empty collection and is not retried.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::models::{Disease, SymptomCategory};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{location} responded with status {status}")]
    Status { location: String, status: u16 },

    #[error("invalid JSON in {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Somewhere a JSON dataset can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> &str;

    async fn fetch_bytes(&self) -> Result<Vec<u8>, CatalogError>;
}

pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                location: self.display.clone(),
                source,
            })
    }
}

/// Fetches a dataset over HTTP. No timeout is applied.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Parses the dataset record by record: a record that does not fit the model
/// is logged and skipped, the rest of the dataset still loads.
async fn load_dataset<T: DeserializeOwned>(
    source: &dyn CatalogSource,
) -> Result<Vec<T>, CatalogError> {
    let bytes = source.fetch_bytes().await?;
    let records: Vec<serde_json::Value> =
        serde_json::from_slice(&bytes).map_err(|source_err| CatalogError::Parse {
            location: source.location().to_string(),
            source: source_err,
        })?;

    let mut parsed = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value(record) {
            Ok(item) => parsed.push(item),
            Err(e) => warn!(
                "Skipping record {position} in {}: {e}",
                source.location()
            ),
        }
    }
    Ok(parsed)
}

/// Loads both datasets concurrently. Never fails: each dataset that cannot be
/// loaded is logged and replaced by an empty collection.
pub async fn load_catalog(symptoms: &dyn CatalogSource, diseases: &dyn CatalogSource) -> Catalog {
    let (symptoms_result, diseases_result) = tokio::join!(
        load_dataset::<SymptomCategory>(symptoms),
        load_dataset::<Disease>(diseases),
    );

    let mut load_errors = Vec::new();

    let categories = symptoms_result.unwrap_or_else(|e| {
        error!("Error fetching symptoms: {e}");
        load_errors.push(e.to_string());
        Vec::new()
    });
    let diseases = diseases_result.unwrap_or_else(|e| {
        error!("Error fetching diseases: {e}");
        load_errors.push(e.to_string());
        Vec::new()
    });

    let catalog = Catalog::new(categories, diseases).with_load_errors(load_errors);
    let summary = catalog.summary();
    info!(
        "Catalog loaded: {} categories, {} symptoms, {} diseases",
        summary.categories, summary.symptoms, summary.diseases
    );
    catalog
}
