//! Box-plot parameters per key.
//!
//! Observations `(key, value)` are grouped by key ([`aggregator`]) and each
//! group is reduced to quartiles, IQR, whisker ends and outliers
//! ([`stats::BoxStatCalculator`]). [`pipeline::BoxPlotPipeline`] chains the
//! two and returns a [`summary::ResultTable`] ready to hand to a chart or
//! serializer.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod stats;
pub mod summary;

pub use aggregator::{group, group_parallel, Observation};
pub use config::SummaryConfig;
pub use error::{ConfigError, InvalidInputReason, StatError};
pub use pipeline::{BatchOutcome, BoxPlotPipeline};
pub use stats::BoxStatCalculator;
pub use summary::{BoxSummary, ResultTable};
