use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

// --- Dataset ---

/// Top-level shape of the roads dataset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadDataset {
    #[serde(default)]
    pub roads: Vec<Road>,
}

/// A road with its path geometry and tender metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Road {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tender_details: Option<TenderDetails>,
}

impl Road {
    /// Path points in `[lat, lng]` order, or `None` when the road has nothing to draw.
    pub fn points(&self) -> Option<Vec<LatLng>> {
        let coords = self.geometry.as_ref()?.coordinates.as_ref()?;
        if coords.is_empty() {
            return None;
        }
        Some(coords.iter().map(|[lat, lng]| LatLng::new(*lat, *lng)).collect())
    }

    pub fn contractor(&self) -> Option<&str> {
        self.tender_details.as_ref()?.contractor.as_deref()
    }

    pub fn cost(&self) -> Option<&Scalar> {
        self.tender_details.as_ref()?.cost.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderDetails {
    pub tender_id: Option<Scalar>,
    pub cost: Option<Scalar>,
    pub contractor: Option<String>,
    pub build_date: Option<String>,
    pub completion_date: Option<String>,
    pub project_duration: Option<Scalar>,
    pub road_length: Option<Scalar>,
    pub description: Option<String>,
}

// --- Scalars ---

/// A field that data files carry either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value, reading strings by their leading number (`"12.5 km"` is 12.5).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_nan() => None,
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => parse_leading_number(s),
        }
    }

    /// True for values that read as "no value": an empty string, zero or NaN.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(n) => *n == 0.0 || n.is_nan(),
            Scalar::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Parse the longest numeric prefix of `s` after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns `None` when no digits lead the string.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
