//! Batch execution of projection scenarios
//!
//! Each request is an independent pure computation, so a batch is
//! embarrassingly parallel. Output order matches input order.

use log::info;
use rayon::prelude::*;

use crate::error::Error;
use crate::projection::{ProjectionRequest, ProjectionResult};

/// Run every request in parallel, preserving input order.
///
/// A single invalid request fails the whole batch.
pub fn run_all(requests: &[ProjectionRequest]) -> Result<Vec<ProjectionResult>, Error> {
    info!("running {} projection scenarios", requests.len());
    requests.par_iter().map(ProjectionRequest::project).collect()
}

/// Build one request per growth rate, holding the base value and horizon
/// fixed. The dashboard's sensitivity band is [-10, 50] percent, but any
/// rates are accepted.
pub fn rate_sweep(base: &ProjectionRequest, rates_pct: &[f64]) -> Vec<ProjectionRequest> {
    rates_pct
        .iter()
        .map(|&rate| ProjectionRequest {
            annual_growth_rate_pct: rate,
            ..base.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweep_preserves_order() {
        let base = ProjectionRequest {
            starting_value: 1000.0,
            annual_growth_rate_pct: 0.0,
            horizon_years: 3,
        };
        let rates = [-10.0, 0.0, 10.0, 25.0];
        let results = run_all(&rate_sweep(&base, &rates)).unwrap();

        assert_eq!(results.len(), rates.len());
        for (result, rate) in results.iter().zip(rates) {
            assert_eq!(result.request.annual_growth_rate_pct, rate);
            let expected = 1000.0 * (1.0 + rate / 100.0).powi(3);
            assert_relative_eq!(result.final_value().unwrap(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_bad_request_fails_batch() {
        let requests = vec![
            ProjectionRequest::default(),
            ProjectionRequest {
                horizon_years: 0,
                ..Default::default()
            },
        ];
        assert!(matches!(
            run_all(&requests),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_matches_sequential_execution() {
        let requests = rate_sweep(&ProjectionRequest::default(), &[1.0, 2.5, 7.0]);
        let parallel = run_all(&requests).unwrap();

        for (result, request) in parallel.iter().zip(&requests) {
            assert_eq!(result, &request.project().unwrap());
        }
    }
}
