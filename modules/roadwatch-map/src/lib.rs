//! Map controller for the road tender map.
//!
//! [`MapController`] owns the selection and search state and talks to the
//! rendering side only through the [`MapSurface`] capability trait.

pub mod controller;
pub mod geocoder;
pub mod panel;
pub mod search;
pub mod style;
pub mod surface;

pub use controller::{DrawnRoad, MapController, MapEvent};
pub use geocoder::Geocoder;
pub use panel::{PanelContent, RoadDetails};
pub use search::{SearchOutcome, SearchTicket};
pub use style::LineStyle;
pub use surface::{FitOptions, MapSurface, MarkerId, ShapeId, Viewport};
