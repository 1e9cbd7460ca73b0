use std::time::Duration;

use serde::Serialize;

/// Stroke settings for a road line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u8,
    pub opacity: f64,
}

impl LineStyle {
    pub const BASE: LineStyle = LineStyle {
        color: "#2563eb",
        weight: 4,
        opacity: 0.7,
    };

    pub const EMPHASIZED: LineStyle = LineStyle {
        color: "#ef4444",
        weight: 6,
        opacity: 0.9,
    };
}

/// Pixels kept clear around a road when zooming to it.
pub const FIT_PADDING_PX: u16 = 50;

/// Zoom cap when fitting a road, so short roads don't fill the screen.
pub const FIT_MAX_ZOOM: u8 = 15;

/// Zoom used when centering on a search result.
pub const SEARCH_ZOOM: u8 = 15;

/// How long the search marker popup stays open.
pub const SEARCH_POPUP_TTL: Duration = Duration::from_secs(3);

/// Candidates requested from the geocoder; only the first is used.
pub const SEARCH_CANDIDATES: u32 = 5;
