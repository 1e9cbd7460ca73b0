use serde::Deserialize;

use crate::error::{NominatimError, Result};

/// One row of a `/search?format=json` response. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// A search result with parsed coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl TryFrom<SearchResult> for Place {
    type Error = NominatimError;

    fn try_from(result: SearchResult) -> Result<Self> {
        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| NominatimError::Parse(format!("invalid latitude '{}'", result.lat)))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|_| NominatimError::Parse(format!("invalid longitude '{}'", result.lon)))?;
        Ok(Place {
            display_name: result.display_name,
            lat,
            lon,
        })
    }
}

/// Parameters for a place search scoped to one city.
#[derive(Debug, Clone)]
pub struct SearchQuery<'a> {
    pub text: &'a str,
    /// Appended to the text, e.g. `"Bengaluru, India"`.
    pub qualifier: &'a str,
    pub country_code: &'a str,
    pub limit: u32,
}

impl SearchQuery<'_> {
    pub fn q(&self) -> String {
        if self.qualifier.is_empty() {
            self.text.to_string()
        } else {
            format!("{}, {}", self.text, self.qualifier)
        }
    }
}
