pub mod config;
pub mod geo;
pub mod types;

pub use config::Config;
pub use geo::{Bounds, CityProfile, LatLng};
pub use types::*;
