use nominatim_client::Place;
use roadwatch_common::LatLng;
use tracing::{debug, warn};

use crate::controller::MapController;
use crate::style::{SEARCH_POPUP_TTL, SEARCH_ZOOM};
use crate::surface::MapSurface;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an area name to search";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Issued when a search starts. Only the newest ticket may update the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty query; nothing was sent.
    Rejected,
    Found(Place),
    NotFound,
    Failed,
    /// A newer search started before this one finished; its result was dropped.
    Stale,
}

pub fn not_found_message(query: &str) -> String {
    format!("Area \"{query}\" not found. Try searching for a different area name.")
}

impl<S: MapSurface> MapController<S> {
    /// Look up `query` and move the map to the first match.
    pub async fn search(&mut self, query: &str) -> SearchOutcome {
        let Some(ticket) = self.begin_search(query) else {
            return SearchOutcome::Rejected;
        };
        let result = self.geocoder.lookup(ticket.query(), &self.city).await;
        self.finish_search(ticket, result)
    }

    /// Validate the query and put the search control into its busy state.
    ///
    /// Callers that run the lookup themselves must hand the ticket back to
    /// [`finish_search`](Self::finish_search) whatever happens.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            self.surface.alert(EMPTY_QUERY_MESSAGE);
            return None;
        }

        self.search_generation += 1;
        self.surface.set_search_busy(true);
        debug!(query, generation = self.search_generation, "Search started");

        Some(SearchTicket {
            generation: self.search_generation,
            query: query.to_string(),
        })
    }

    /// Apply a lookup result. The search control is restored once the newest
    /// search finishes, whether it found something or not.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: anyhow::Result<Vec<Place>>,
    ) -> SearchOutcome {
        if ticket.generation != self.search_generation {
            debug!(
                query = ticket.query.as_str(),
                generation = ticket.generation,
                latest = self.search_generation,
                "Dropping stale search result"
            );
            return SearchOutcome::Stale;
        }

        let outcome = match result {
            Ok(places) => match places.into_iter().next() {
                Some(place) => {
                    debug!(
                        query = ticket.query.as_str(),
                        found = place.display_name.as_str(),
                        "Found location"
                    );
                    let at = LatLng::new(place.lat, place.lon);
                    self.surface.set_view(at, SEARCH_ZOOM);
                    self.add_search_marker(at, &place.display_name);
                    self.surface.clear_search_input();
                    SearchOutcome::Found(place)
                }
                None => {
                    debug!(query = ticket.query.as_str(), "No results");
                    self.surface.alert(&not_found_message(&ticket.query));
                    SearchOutcome::NotFound
                }
            },
            Err(e) => {
                warn!(query = ticket.query.as_str(), error = %e, "Search failed");
                self.surface.alert(SEARCH_FAILED_MESSAGE);
                SearchOutcome::Failed
            }
        };

        self.surface.set_search_busy(false);
        outcome
    }

    fn add_search_marker(&mut self, at: LatLng, name: &str) {
        if let Some(previous) = self.search_marker.take() {
            self.surface.remove_marker(previous);
        }
        let popup = capitalize_first(name);
        self.search_marker = Some(self.surface.add_marker(at, &popup, SEARCH_POPUP_TTL));
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_first_char() {
        assert_eq!(capitalize_first("koramangala, Bengaluru"), "Koramangala, Bengaluru");
        assert_eq!(capitalize_first("ärea"), "Ärea");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn not_found_message_quotes_query() {
        assert_eq!(
            not_found_message("Atlantis"),
            "Area \"Atlantis\" not found. Try searching for a different area name."
        );
    }
}
