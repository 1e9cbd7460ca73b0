use serde::{Deserialize, Serialize};

// --- Geo Types ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest rectangle covering every point. `None` for an empty slice.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for p in rest {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }
}

/// The city a map instance is locked to, and how searches are scoped to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityProfile {
    pub name: String,
    /// Appended to every place search, e.g. `"Bengaluru, India"`.
    pub search_qualifier: String,
    /// ISO 3166-1 alpha-2 code results are restricted to.
    pub country_code: String,
    pub center: LatLng,
    pub default_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub max_bounds: Bounds,
}

impl CityProfile {
    pub fn bengaluru() -> Self {
        Self {
            name: "Bengaluru".to_string(),
            search_qualifier: "Bengaluru, India".to_string(),
            country_code: "in".to_string(),
            center: LatLng::new(12.9716, 77.5946),
            default_zoom: 13,
            min_zoom: 10,
            max_zoom: 19,
            max_bounds: Bounds::new(LatLng::new(12.8, 77.3), LatLng::new(13.2, 77.9)),
        }
    }
}

impl Default for CityProfile {
    fn default() -> Self {
        Self::bengaluru()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_points() {
        let points = [
            LatLng::new(12.97, 77.59),
            LatLng::new(12.95, 77.62),
            LatLng::new(12.99, 77.60),
        ];
        let b = Bounds::from_points(&points).unwrap();
        assert_eq!(b.south_west, LatLng::new(12.95, 77.59));
        assert_eq!(b.north_east, LatLng::new(12.99, 77.62));
        assert!(points.iter().all(|p| b.contains(*p)));
    }

    #[test]
    fn bounds_of_nothing_is_none() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn city_center_inside_max_bounds() {
        let city = CityProfile::bengaluru();
        assert!(city.max_bounds.contains(city.center));
        assert!(city.min_zoom <= city.default_zoom && city.default_zoom <= city.max_zoom);
    }
}
