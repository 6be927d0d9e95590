//! Findash - financial analysis core for CSV-driven dashboards
//!
//! This library provides:
//! - Compound-growth revenue projections over multi-year horizons
//! - CSV ingest into a typed in-memory table
//! - Group-and-sum aggregation and per-column descriptive statistics
//! - Chart point extraction and parallel scenario sweeps

pub mod analysis;
pub mod error;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod table;

// Re-export commonly used types
pub use analysis::{aggregate, summarize, xy_points, ColumnSummary, GroupAggregate};
pub use error::Error;
pub use projection::{project, ProjectionPoint, ProjectionRequest, ProjectionResult};
pub use table::{load_table_from_path, load_table_from_reader, Cell, Table};
