use std::sync::Arc;

use roadwatch_common::{Bounds, CityProfile, LatLng, Road};
use roadwatch_data::DataLoader;
use serde::Deserialize;
use tracing::{info, warn};

use crate::geocoder::Geocoder;
use crate::panel::{PanelContent, RoadDetails, CONTRIBUTE_MESSAGE};
use crate::style::{LineStyle, FIT_MAX_ZOOM, FIT_PADDING_PX};
use crate::surface::{FitOptions, MapSurface, MarkerId, ShapeId, Viewport};

/// A road paired with the line drawn for it.
#[derive(Debug, Clone)]
pub struct DrawnRoad {
    pub road: Road,
    pub shape: ShapeId,
    pub points: Vec<LatLng>,
}

/// Pointer and panel events coming back from the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "shape", rename_all = "snake_case")]
pub enum MapEvent {
    HoverIn(u64),
    HoverOut(u64),
    Click(u64),
    ClosePanel,
}

/// Drives one map session: draws the loaded roads, keeps at most one of them
/// highlighted, fills the detail panel and runs place searches.
pub struct MapController<S: MapSurface> {
    pub(crate) surface: S,
    loader: DataLoader,
    pub(crate) geocoder: Arc<dyn Geocoder>,
    pub(crate) city: CityProfile,
    drawn: Vec<DrawnRoad>,
    highlight: Option<ShapeId>,
    hovered: Option<ShapeId>,
    pub(crate) search_marker: Option<MarkerId>,
    pub(crate) search_generation: u64,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(
        surface: S,
        loader: DataLoader,
        geocoder: Arc<dyn Geocoder>,
        city: CityProfile,
    ) -> Self {
        Self {
            surface,
            loader,
            geocoder,
            city,
            drawn: Vec::new(),
            highlight: None,
            hovered: None,
            search_marker: None,
            search_generation: 0,
        }
    }

    /// Set up the viewport, load the dataset, then fill the header and draw.
    /// Drawing only starts once loading has finished.
    pub async fn init(&mut self) {
        self.surface.init_viewport(&Viewport::from(&self.city));
        info!(city = self.city.name.as_str(), "Map initialized");

        self.loader.load().await;
        self.update_stats();
        self.display_roads();
    }

    pub fn update_stats(&mut self) {
        let stats = self.loader.get_stats();
        self.surface.set_header(&stats.to_string());
    }

    /// Draw every loaded road, or show the welcome panel when there are none.
    pub fn display_roads(&mut self) {
        let roads = self.loader.get_all().to_vec();
        if roads.is_empty() {
            info!("No road data available, showing welcome panel");
            self.show_welcome();
            return;
        }

        let drawn = roads
            .into_iter()
            .filter_map(|road| self.add_road_to_map(road))
            .count();
        info!(count = drawn, "Displayed roads on map");
    }

    /// Draw one road. Roads without coordinates are skipped.
    pub fn add_road_to_map(&mut self, road: Road) -> Option<ShapeId> {
        let Some(points) = road.points() else {
            warn!(road_id = road.id.as_str(), "Road has no geometry data");
            return None;
        };

        let shape = self.surface.draw_line(&points, LineStyle::BASE, &road.name);
        self.drawn.push(DrawnRoad {
            road,
            shape,
            points,
        });
        Some(shape)
    }

    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::HoverIn(id) => self.hover_in(ShapeId(id)),
            MapEvent::HoverOut(id) => self.hover_out(ShapeId(id)),
            MapEvent::Click(id) => self.click(ShapeId(id)),
            MapEvent::ClosePanel => self.close_panel(),
        }
    }

    /// Emphasize a line under the pointer. Only one line carries hover
    /// emphasis; a hover-in whose matching hover-out never arrived is undone here.
    pub fn hover_in(&mut self, shape: ShapeId) {
        if !self.is_drawn(shape) {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            if previous != shape && self.highlight != Some(previous) {
                self.surface.set_style(previous, LineStyle::BASE);
            }
        }
        if self.highlight == Some(shape) {
            return;
        }
        self.surface.set_style(shape, LineStyle::EMPHASIZED);
        self.hovered = Some(shape);
    }

    pub fn hover_out(&mut self, shape: ShapeId) {
        if !self.is_drawn(shape) {
            return;
        }
        if self.hovered == Some(shape) {
            self.hovered = None;
        }
        if self.highlight == Some(shape) {
            return;
        }
        self.surface.set_style(shape, LineStyle::BASE);
    }

    /// Show the road's details and make its line the persistent highlight.
    pub fn click(&mut self, shape: ShapeId) {
        let Some(road) = self.drawn_road(shape).map(|d| d.road.clone()) else {
            warn!(shape = shape.0, "Click on unknown shape");
            return;
        };
        self.show_road_details(&road);
        self.highlight_road(shape);
    }

    /// Move the highlight to `shape` and zoom to it.
    pub fn highlight_road(&mut self, shape: ShapeId) {
        let Some(bounds) = self
            .drawn_road(shape)
            .and_then(|d| Bounds::from_points(&d.points))
        else {
            warn!(shape = shape.0, "Highlight of unknown shape");
            return;
        };

        if let Some(previous) = self.highlight.take() {
            self.surface.set_style(previous, LineStyle::BASE);
        }
        if self.hovered == Some(shape) {
            self.hovered = None;
        }
        self.surface.set_style(shape, LineStyle::EMPHASIZED);
        self.highlight = Some(shape);

        self.surface.fit_bounds(
            bounds,
            FitOptions {
                padding: FIT_PADDING_PX,
                max_zoom: FIT_MAX_ZOOM,
            },
        );
    }

    /// Hide the panel and drop the highlight.
    pub fn close_panel(&mut self) {
        self.surface.hide_panel();
        if let Some(previous) = self.highlight.take() {
            self.surface.set_style(previous, LineStyle::BASE);
        }
    }

    pub fn show_road_details(&mut self, road: &Road) {
        self.surface
            .show_panel(&PanelContent::Road(RoadDetails::from_road(road)));
    }

    pub fn show_welcome(&mut self) {
        self.surface.show_panel(&PanelContent::Welcome);
    }

    pub fn contribute_help(&mut self) {
        self.surface.alert(CONTRIBUTE_MESSAGE);
    }

    pub fn highlighted(&self) -> Option<ShapeId> {
        self.highlight
    }

    pub fn drawn_roads(&self) -> &[DrawnRoad] {
        &self.drawn
    }

    pub fn shape_for_road(&self, road_id: &str) -> Option<ShapeId> {
        self.drawn
            .iter()
            .find(|d| d.road.id == road_id)
            .map(|d| d.shape)
    }

    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Shared handle to the geocoder, for callers that run lookups without
    /// holding the controller.
    pub fn geocoder(&self) -> Arc<dyn Geocoder> {
        Arc::clone(&self.geocoder)
    }

    pub fn city(&self) -> &CityProfile {
        &self.city
    }

    fn drawn_road(&self, shape: ShapeId) -> Option<&DrawnRoad> {
        self.drawn.iter().find(|d| d.shape == shape)
    }

    fn is_drawn(&self, shape: ShapeId) -> bool {
        let known = self.drawn_road(shape).is_some();
        if !known {
            warn!(shape = shape.0, "Event for unknown shape");
        }
        known
    }
}
