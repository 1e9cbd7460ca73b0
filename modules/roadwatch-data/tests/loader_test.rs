//! DataLoader behavior over in-memory and failing sources.

use async_trait::async_trait;
use roadwatch_common::RoadDataset;
use roadwatch_data::{DataLoader, DatasetSource, FileSource, LoadError, MemorySource};

const TWO_ROADS: &str = r#"{
    "roads": [
        {
            "id": "blr-001",
            "name": "Outer Ring Road",
            "geometry": {"coordinates": [[12.9352, 77.6245], [12.9279, 77.6271]]},
            "tenderDetails": {
                "tenderId": "BBMP/2023/ORR/17",
                "cost": 45000000,
                "contractor": "Sri Lakshmi Infra",
                "buildDate": "2023-04-01",
                "completionDate": "2024-03-31",
                "projectDuration": "12 months",
                "roadLength": "2.4 km",
                "description": "Whitetopping of the ORR stretch"
            }
        },
        {
            "id": "blr-002",
            "name": "Hosur Road",
            "geometry": {"coordinates": [[12.9165, 77.6101], [12.9081, 77.6186]]}
        }
    ]
}"#;

struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    async fn fetch(&self) -> roadwatch_data::Result<RoadDataset> {
        Err(LoadError::Status { status: 404 })
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

fn loader(json: &str) -> DataLoader {
    DataLoader::new(MemorySource::Json(json.to_string()))
}

// ---------------------------------------------------------------------------
// load
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_stores_roads_and_marks_loaded() {
    let mut loader = loader(TWO_ROADS);
    assert!(!loader.is_loaded());

    let roads = loader.load().await;
    assert_eq!(roads.len(), 2);
    assert!(loader.is_loaded());
    assert_eq!(loader.get_all()[0].name, "Outer Ring Road");
}

#[tokio::test]
async fn missing_roads_field_loads_empty() {
    let mut loader = loader(r#"{"version": 1}"#);
    assert!(loader.load().await.is_empty());
    assert!(loader.is_loaded());
}

#[tokio::test]
async fn malformed_json_falls_back_to_empty() {
    let mut loader = loader("{ not json");
    assert!(loader.load().await.is_empty());
    assert!(loader.is_loaded());
}

#[tokio::test]
async fn failing_source_falls_back_to_empty() {
    let mut loader = DataLoader::new(FailingSource);
    assert!(loader.load().await.is_empty());
    assert!(loader.is_loaded());
}

#[tokio::test]
async fn missing_file_falls_back_to_empty() {
    let mut loader = DataLoader::new(FileSource::new("/nonexistent/roadwatch/roads.json"));
    assert!(loader.load().await.is_empty());
    assert!(loader.is_loaded());
}

#[tokio::test]
async fn reload_overwrites_previous_roads() {
    let path = std::env::temp_dir().join(format!("roadwatch-reload-{}.json", std::process::id()));
    std::fs::write(&path, TWO_ROADS).unwrap();

    let mut loader = DataLoader::new(FileSource::new(&path));
    assert_eq!(loader.load().await.len(), 2);

    std::fs::write(&path, r#"{"roads": []}"#).unwrap();
    assert!(loader.load().await.is_empty());

    std::fs::remove_file(&path).ok();
}

// ---------------------------------------------------------------------------
// Lookups and stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_finds_exact_record() {
    let mut loader = loader(TWO_ROADS);
    loader.load().await;

    let road = loader.get_by_id("blr-002").expect("road should exist");
    assert_eq!(road.name, "Hosur Road");
    assert!(road.tender_details.is_none());

    assert!(loader.get_by_id("blr-999").is_none());
}

#[tokio::test]
async fn stats_on_empty_list_are_zero() {
    let loader = loader(r#"{"roads": []}"#);
    let stats = loader.get_stats();
    assert_eq!(stats.total_roads, 0);
    assert_eq!(stats.total_cost, 0.0);
    assert_eq!(stats.contractors, 0);
    assert_eq!(stats.to_string(), "No roads loaded yet");
}

#[tokio::test]
async fn missing_cost_contributes_zero() {
    let mut loader = loader(TWO_ROADS);
    loader.load().await;

    let stats = loader.get_stats();
    assert_eq!(stats.total_roads, 2);
    assert_eq!(stats.total_cost, 45_000_000.0);
}

#[tokio::test]
async fn unparseable_cost_contributes_zero() {
    let mut loader = loader(
        r#"{"roads": [
            {"id": "a", "name": "A", "tenderDetails": {"cost": "tbd"}},
            {"id": "b", "name": "B", "tenderDetails": {"cost": "150000"}}
        ]}"#,
    );
    loader.load().await;
    assert_eq!(loader.get_stats().total_cost, 150_000.0);
}

#[tokio::test]
async fn missing_contractor_counts_as_one_distinct_value() {
    let mut loader = loader(
        r#"{"roads": [
            {"id": "a", "name": "A", "tenderDetails": {"contractor": "Acme"}},
            {"id": "b", "name": "B", "tenderDetails": {"contractor": "Acme"}},
            {"id": "c", "name": "C"},
            {"id": "d", "name": "D", "tenderDetails": {}}
        ]}"#,
    );
    loader.load().await;
    assert_eq!(loader.get_stats().contractors, 2);
}

#[tokio::test]
async fn stats_summary_string() {
    let mut loader = loader(TWO_ROADS);
    loader.load().await;
    assert_eq!(
        loader.get_stats().to_string(),
        "2 roads tracked | 2 contractors | Total: ₹4.50 Cr"
    );
}
