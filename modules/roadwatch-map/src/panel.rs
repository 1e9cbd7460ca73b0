use roadwatch_common::Road;
use roadwatch_data::{format_currency, format_date, or_na, scalar_or_na};
use serde::Serialize;

pub const WELCOME_TITLE: &str = "Welcome!";

pub const WELCOME_PARAGRAPHS: [&str; 2] = [
    "This is the Bengaluru Road Transparency Map. To get started, add road data to the \
     data/roads.json file following the format in the README.",
    "This is an open-source project. Visit our GitHub repository to learn how to contribute \
     road and tender data.",
];

pub const CONTRIBUTE_MESSAGE: &str = "To contribute data, please visit our GitHub repository \
     and follow the contribution guidelines in the README.";

/// What the info panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelContent {
    Road(RoadDetails),
    Welcome,
}

/// A road's tender record, formatted for display. Missing fields read "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadDetails {
    pub name: String,
    pub id: String,
    pub tender_id: String,
    pub cost: String,
    pub contractor: String,
    pub build_date: String,
    pub completion_date: String,
    pub duration: String,
    pub length: String,
    /// Only present when the data carries a non-empty description.
    pub description: Option<String>,
}

impl RoadDetails {
    pub fn from_road(road: &Road) -> Self {
        let tender = road.tender_details.clone().unwrap_or_default();

        Self {
            name: road.name.clone(),
            id: road.id.clone(),
            tender_id: scalar_or_na(tender.tender_id.as_ref()),
            cost: format_currency(&tender.cost),
            contractor: or_na(tender.contractor.as_deref()),
            build_date: format_date(tender.build_date.as_deref()),
            completion_date: format_date(tender.completion_date.as_deref()),
            duration: scalar_or_na(tender.project_duration.as_ref()),
            length: scalar_or_na(tender.road_length.as_ref()),
            description: tender.description.filter(|d| !d.is_empty()),
        }
    }
}
