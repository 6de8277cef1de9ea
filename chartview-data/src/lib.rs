//! chartview-data - data access for the chart viewer
//!
//! Fetches chart listings, song detail, historical ranks and related media
//! from the two upstream services (graph-query and REST catalog) and
//! normalizes both response shapes into the chartview-common entities.
//!
//! Callers interact with [`ChartDataService`]; the remaining modules are
//! exposed for integration testing.

pub mod error;
pub mod mapping;
pub mod queries;
pub mod service;
pub mod services;

pub use crate::service::ChartDataService;
