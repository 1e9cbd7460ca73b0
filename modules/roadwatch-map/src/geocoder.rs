use async_trait::async_trait;
use nominatim_client::{NominatimClient, Place, SearchQuery};
use roadwatch_common::CityProfile;

use crate::style::SEARCH_CANDIDATES;

/// Pluggable place search.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidates for `query` within `city`, best first.
    async fn lookup(&self, query: &str, city: &CityProfile) -> anyhow::Result<Vec<Place>>;
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn lookup(&self, query: &str, city: &CityProfile) -> anyhow::Result<Vec<Place>> {
        let query = SearchQuery {
            text: query,
            qualifier: &city.search_qualifier,
            country_code: &city.country_code,
            limit: SEARCH_CANDIDATES,
        };
        Ok(self.search(&query).await?)
    }
}
