use std::collections::HashSet;
use std::fmt;

use roadwatch_common::Road;

use crate::format::{format_currency, AsAmount};

/// Aggregate figures shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoadStats {
    pub total_roads: usize,
    pub total_cost: f64,
    /// Distinct contractor names. Roads without a contractor count together as one value.
    pub contractors: usize,
}

impl RoadStats {
    pub fn compute(roads: &[Road]) -> Self {
        let total_cost = roads
            .iter()
            .map(|road| road.cost().as_amount().unwrap_or(0.0))
            .sum();
        let contractors: HashSet<Option<&str>> = roads.iter().map(Road::contractor).collect();

        Self {
            total_roads: roads.len(),
            total_cost,
            contractors: contractors.len(),
        }
    }
}

impl fmt::Display for RoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_roads == 0 {
            return f.write_str("No roads loaded yet");
        }
        write!(
            f,
            "{} roads tracked | {} contractors | Total: {}",
            self.total_roads,
            self.contractors,
            format_currency(&self.total_cost)
        )
    }
}
