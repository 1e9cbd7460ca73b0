pub mod error;
pub mod types;

pub use error::{NominatimError, Result};
pub use types::{Place, SearchQuery, SearchResult};

use std::time::Duration;

pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// The public instance rejects requests without an identifying User-Agent.
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run a place search and return the parsed candidates in ranking order.
    pub async fn search(&self, query: &SearchQuery<'_>) -> Result<Vec<Place>> {
        let url = format!("{}/search", self.base_url);
        let q = query.q();
        let limit = query.limit.to_string();

        tracing::debug!(q = q.as_str(), "Nominatim search");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("q", q.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
                ("countrycodes", query.country_code),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(NominatimError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        parse_results(&body)
    }
}

/// Parse a `/search?format=json` body into places.
pub fn parse_results(body: &str) -> Result<Vec<Place>> {
    let results: Vec<SearchResult> = serde_json::from_str(body)?;
    results.into_iter().map(Place::try_from).collect()
}
