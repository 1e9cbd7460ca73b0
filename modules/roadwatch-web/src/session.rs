use std::sync::Arc;

use nominatim_client::Place;
use roadwatch_common::CityProfile;
use roadwatch_data::DataLoader;
use roadwatch_map::{Geocoder, MapController, MapEvent, SearchTicket};
use tracing::debug;

use crate::surface::{ScriptSurface, SurfaceCommand};

/// One page load's map controller, tagged with the id it was started under.
pub struct Session {
    id: u64,
    controller: MapController<ScriptSurface>,
}

/// A search that has left the session lock to wait on the geocoder.
pub struct PendingSearch {
    session_id: u64,
    ticket: SearchTicket,
    pub geocoder: Arc<dyn Geocoder>,
    pub city: CityProfile,
}

impl PendingSearch {
    pub fn query(&self) -> &str {
        self.ticket.query()
    }
}

impl Session {
    /// Build a controller, load and draw the dataset.
    pub async fn start(
        id: u64,
        loader: DataLoader,
        geocoder: Arc<dyn Geocoder>,
        city: CityProfile,
    ) -> Self {
        let mut controller = MapController::new(ScriptSurface::new(), loader, geocoder, city);
        controller.init().await;
        Self { id, controller }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        self.controller.surface_mut().drain()
    }

    pub fn handle_event(&mut self, event: MapEvent) -> Vec<SurfaceCommand> {
        self.controller.handle_event(event);
        self.drain()
    }

    pub fn contribute_help(&mut self) -> Vec<SurfaceCommand> {
        self.controller.contribute_help();
        self.drain()
    }

    /// Start a search. Returns `None` alongside the commands when the query was rejected.
    pub fn begin_search(&mut self, query: &str) -> (Option<PendingSearch>, Vec<SurfaceCommand>) {
        let pending = self
            .controller
            .begin_search(query)
            .map(|ticket| PendingSearch {
                session_id: self.id,
                ticket,
                geocoder: self.controller.geocoder(),
                city: self.controller.city().clone(),
            });
        (pending, self.drain())
    }

    /// Apply a lookup result. Results from a search begun in another session are dropped.
    pub fn finish_search(
        &mut self,
        pending: PendingSearch,
        result: anyhow::Result<Vec<Place>>,
    ) -> Vec<SurfaceCommand> {
        if pending.session_id != self.id {
            debug!(
                query = pending.query(),
                from_session = pending.session_id,
                session = self.id,
                "Dropping search result from a replaced session"
            );
            return Vec::new();
        }
        self.controller.finish_search(pending.ticket, result);
        self.drain()
    }
}
