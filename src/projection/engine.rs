//! Compound-growth projection engine

use log::debug;
use serde::{Deserialize, Serialize};

use super::series::{ProjectionPoint, ProjectionResult};
use super::{DEFAULT_GROWTH_RATE_PCT, DEFAULT_HORIZON_YEARS, DEFAULT_STARTING_VALUE};
use crate::error::Error;

/// Inputs for a single revenue projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Revenue in the current period, before any growth is applied
    #[serde(default = "default_starting_value")]
    pub starting_value: f64,

    /// Expected annual growth rate in percent (5.0 = 5% per year)
    #[serde(default = "default_growth_rate_pct")]
    pub annual_growth_rate_pct: f64,

    /// Number of future years to project, starting at year 1
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

fn default_starting_value() -> f64 { DEFAULT_STARTING_VALUE }
fn default_growth_rate_pct() -> f64 { DEFAULT_GROWTH_RATE_PCT }
fn default_horizon_years() -> u32 { DEFAULT_HORIZON_YEARS }

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            starting_value: DEFAULT_STARTING_VALUE,
            annual_growth_rate_pct: DEFAULT_GROWTH_RATE_PCT,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl ProjectionRequest {
    /// Run the projection described by this request
    pub fn project(&self) -> Result<ProjectionResult, Error> {
        let points = project(
            self.starting_value,
            self.annual_growth_rate_pct,
            self.horizon_years,
        )?;
        Ok(ProjectionResult {
            request: self.clone(),
            points,
        })
    }
}

/// Project `starting_value` forward by compounding `annual_growth_rate_pct`
/// once per year for `horizon_years` years.
///
/// Each year's value is derived from the previous year's value rather than
/// from a closed-form power, so per-year rounding behaves like a running
/// spreadsheet column. Inputs are taken as-is; range checks (the dashboard
/// caps growth at [-10, 50] percent) belong to the caller.
pub fn project(
    starting_value: f64,
    annual_growth_rate_pct: f64,
    horizon_years: u32,
) -> Result<Vec<ProjectionPoint>, Error> {
    if horizon_years < 1 {
        return Err(Error::InvalidArgument(
            "horizon must be at least 1 year".to_string(),
        ));
    }

    let growth_factor = 1.0 + annual_growth_rate_pct / 100.0;
    let mut value = starting_value;
    let mut points = Vec::with_capacity(horizon_years as usize);

    for year in 1..=horizon_years {
        value *= growth_factor;
        points.push(ProjectionPoint { year, value });
    }

    debug!(
        "projected {} years at {}%: final value {:.2}",
        horizon_years, annual_growth_rate_pct, value
    );

    Ok(points)
}
