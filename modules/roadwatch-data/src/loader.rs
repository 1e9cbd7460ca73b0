use roadwatch_common::Road;
use tracing::{error, info};

use crate::source::DatasetSource;
use crate::stats::RoadStats;

/// Owns the in-memory road list for a session.
///
/// Constructed explicitly around a [`DatasetSource`] and passed to whoever
/// needs it, so tests can hand in a fake source.
pub struct DataLoader {
    source: Box<dyn DatasetSource>,
    roads: Vec<Road>,
    loaded: bool,
}

impl DataLoader {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn DatasetSource>) -> Self {
        Self {
            source,
            roads: Vec::new(),
            loaded: false,
        }
    }

    /// Fetch the dataset, replacing whatever was loaded before.
    ///
    /// Never fails: any fetch or parse error is logged and leaves an empty list.
    /// The loader counts as loaded in both cases.
    pub async fn load(&mut self) -> &[Road] {
        match self.source.fetch().await {
            Ok(dataset) => {
                self.roads = dataset.roads;
                info!(
                    source = %self.source.describe(),
                    count = self.roads.len(),
                    "Loaded roads"
                );
            }
            Err(e) => {
                error!(
                    source = %self.source.describe(),
                    error = %e,
                    "Error loading road data"
                );
                self.roads = Vec::new();
            }
        }
        self.loaded = true;
        &self.roads
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get_all(&self) -> &[Road] {
        &self.roads
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Road> {
        self.roads.iter().find(|road| road.id == id)
    }

    pub fn get_stats(&self) -> RoadStats {
        RoadStats::compute(&self.roads)
    }
}
