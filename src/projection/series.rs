//! Projection output series

use serde::{Deserialize, Serialize};

use super::engine::ProjectionRequest;

/// Projected value at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Year number, starting at 1
    pub year: u32,
    /// Projected value after this year's growth
    pub value: f64,
}

/// Year-by-year output of a single projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// The request that produced this series
    pub request: ProjectionRequest,
    /// One point per projected year, in year order
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    /// Value at the end of the projection horizon
    pub fn final_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }

    /// (year, value) pairs for charting
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.year as f64, p.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_points() {
        let result = ProjectionRequest {
            starting_value: 100.0,
            annual_growth_rate_pct: 0.0,
            horizon_years: 3,
        }
        .project()
        .unwrap();

        assert_eq!(
            result.chart_points(),
            vec![(1.0, 100.0), (2.0, 100.0), (3.0, 100.0)]
        );
        assert_eq!(result.final_value(), Some(100.0));
    }
}
