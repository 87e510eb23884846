use std::{collections::HashMap, fmt::Display, hash::Hash, time::Instant};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    aggregator::{group, group_parallel, Observation},
    config::SummaryConfig,
    error::{ConfigError, StatError},
    stats::BoxStatCalculator,
    summary::{BoxSummary, ResultTable},
};

/// Table of the keys that summarized cleanly plus the errors of those
/// that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<K> {
    pub table: ResultTable<K>,
    pub failures: Vec<StatError>,
}

/// Groups observations by key and summarizes every group.
#[derive(Debug, Clone)]
pub struct BoxPlotPipeline {
    calculator: BoxStatCalculator,
    parallel: bool,
}

impl Default for BoxPlotPipeline {
    fn default() -> Self {
        BoxPlotPipeline::from_parts(&SummaryConfig::default())
    }
}

impl BoxPlotPipeline {
    pub fn new(config: &SummaryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(BoxPlotPipeline::from_parts(config))
    }

    fn from_parts(config: &SummaryConfig) -> Self {
        BoxPlotPipeline {
            calculator: BoxStatCalculator::from_config(config),
            parallel: config.parallel,
        }
    }

    pub fn calculator(&self) -> &BoxStatCalculator {
        &self.calculator
    }

    /// One outcome per key, ordered by key. The same for sequential and
    /// parallel runs.
    pub fn summarize_groups<K>(
        &self,
        groups: HashMap<K, Vec<f64>>,
    ) -> Vec<Result<BoxSummary<K>, StatError>>
    where
        K: Ord + Display + Send,
    {
        let mut groups: Vec<(K, Vec<f64>)> = groups.into_iter().collect();
        groups.sort_by(|a, b| a.0.cmp(&b.0));

        let calculator = self.calculator;
        if self.parallel {
            groups
                .into_par_iter()
                .map(|(key, values)| calculator.summarize(key, &values))
                .collect()
        } else {
            groups
                .into_iter()
                .map(|(key, values)| calculator.summarize(key, &values))
                .collect()
        }
    }

    /// Summarizes every key; the first failing key (in key order) aborts the
    /// whole table.
    pub fn build_table<K>(
        &self,
        observations: Vec<Observation<K>>,
    ) -> Result<ResultTable<K>, StatError>
    where
        K: Ord + Hash + Display + Send + Sync,
    {
        let now = Instant::now();
        let groups = self.group(observations);
        let key_count = groups.len();

        let rows = self
            .summarize_groups(groups)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        debug!(keys = key_count, elapsed = ?now.elapsed(), "box table built");
        Ok(ResultTable::from_rows(rows))
    }

    /// Like [`build_table`](Self::build_table) but keeps going past failing
    /// keys, logging and collecting their errors.
    pub fn build_table_lenient<K>(&self, observations: Vec<Observation<K>>) -> BatchOutcome<K>
    where
        K: Ord + Hash + Display + Send + Sync,
    {
        let now = Instant::now();
        let groups = self.group(observations);

        let mut rows = vec![];
        let mut failures = vec![];
        for outcome in self.summarize_groups(groups) {
            match outcome {
                Ok(summary) => rows.push(summary),
                Err(e) => {
                    warn!(key = %e.key(), error = %e, "skipping key");
                    failures.push(e);
                }
            }
        }

        debug!(
            keys = rows.len(),
            skipped = failures.len(),
            elapsed = ?now.elapsed(),
            "box table built"
        );
        BatchOutcome {
            table: ResultTable::from_rows(rows),
            failures,
        }
    }

    fn group<K>(&self, observations: Vec<Observation<K>>) -> HashMap<K, Vec<f64>>
    where
        K: Hash + Eq + Send + Sync,
    {
        if self.parallel {
            group_parallel(observations)
        } else {
            group(observations)
        }
    }
}
