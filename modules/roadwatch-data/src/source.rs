use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use roadwatch_common::RoadDataset;

use crate::error::{LoadError, Result};

/// Where the roads dataset comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Retrieve and parse the dataset.
    async fn fetch(&self) -> Result<RoadDataset>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fetches the dataset over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<RoadDataset> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the dataset from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<RoadDataset> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a dataset held in memory, or a JSON document that is parsed on every fetch.
pub enum MemorySource {
    Dataset(RoadDataset),
    Json(String),
}

#[async_trait]
impl DatasetSource for MemorySource {
    async fn fetch(&self) -> Result<RoadDataset> {
        match self {
            MemorySource::Dataset(dataset) => Ok(dataset.clone()),
            MemorySource::Json(body) => Ok(serde_json::from_str(body)?),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
