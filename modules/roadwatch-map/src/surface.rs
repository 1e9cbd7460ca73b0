use std::time::Duration;

use roadwatch_common::{Bounds, CityProfile, LatLng};
use serde::Serialize;

use crate::panel::PanelContent;
use crate::style::LineStyle;

/// Handle to a line drawn on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

/// Handle to a marker placed on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkerId(pub u64);

/// Initial camera and the limits it may never leave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub max_bounds: Bounds,
}

impl From<&CityProfile> for Viewport {
    fn from(city: &CityProfile) -> Self {
        Self {
            center: city.center,
            zoom: city.default_zoom,
            min_zoom: city.min_zoom,
            max_zoom: city.max_zoom,
            max_bounds: city.max_bounds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitOptions {
    pub padding: u16,
    pub max_zoom: u8,
}

/// Everything the controller needs from a rendering surface: a map widget,
/// the detail panel, the header readout and the search box.
pub trait MapSurface {
    fn init_viewport(&mut self, viewport: &Viewport);

    /// Draw a polyline and return a handle to restyle it later.
    fn draw_line(&mut self, points: &[LatLng], style: LineStyle, tooltip: &str) -> ShapeId;

    fn set_style(&mut self, shape: ShapeId, style: LineStyle);

    /// Animate the camera so `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions);

    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Place a marker with an open popup that closes itself after `popup_ttl`.
    fn add_marker(&mut self, at: LatLng, popup: &str, popup_ttl: Duration) -> MarkerId;

    fn remove_marker(&mut self, marker: MarkerId);

    /// Replace the panel contents and reveal it.
    fn show_panel(&mut self, content: &PanelContent);

    fn hide_panel(&mut self);

    fn set_header(&mut self, text: &str);

    /// Blocking notice to the user.
    fn alert(&mut self, message: &str);

    /// Disable the search trigger and show it as busy, or restore it.
    fn set_search_busy(&mut self, busy: bool);

    fn clear_search_input(&mut self);
}
