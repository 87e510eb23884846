use std::fmt::Display;

use crate::{
    config::{SummaryConfig, DEFAULT_WHISKER_COEF},
    error::{InvalidInputReason, StatError},
    summary::BoxSummary,
};

use super::percentile::{quantile_sorted, sorted};

/// Computes quartiles, fences and outliers for one group of values.
///
/// A value `v` is retained when `lower < v < upper`; everything else,
/// including values exactly on a fence, is an outlier. With this strict
/// test an all-equal group (and so any group of size 1) has IQR 0, both
/// fences on the value itself, no retained values, and is reported as
/// [`InvalidInputReason::AllOutliers`] instead of a summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStatCalculator {
    whisker_coef: f64,
}

impl Default for BoxStatCalculator {
    fn default() -> Self {
        BoxStatCalculator {
            whisker_coef: DEFAULT_WHISKER_COEF,
        }
    }
}

impl BoxStatCalculator {
    pub fn new(whisker_coef: f64) -> Self {
        BoxStatCalculator { whisker_coef }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        BoxStatCalculator::new(config.whisker_coef)
    }

    pub fn whisker_coef(&self) -> f64 {
        self.whisker_coef
    }

    pub fn summarize<K: Display>(
        &self,
        key: K,
        values: &[f64],
    ) -> Result<BoxSummary<K>, StatError> {
        if values.is_empty() {
            return Err(StatError::invalid_input(&key, InvalidInputReason::Empty));
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatError::invalid_input(
                &key,
                InvalidInputReason::NonFinite { index, value },
            ));
        }

        let sorted_data = sorted(values);
        let quartile = |p: f64| {
            quantile_sorted(&sorted_data, p)
                .ok_or_else(|| StatError::invalid_input(&key, InvalidInputReason::Empty))
        };
        let q1 = quartile(0.25)?;
        let q2 = quartile(0.5)?;
        let q3 = quartile(0.75)?;

        let iqr = q3 - q1;
        let lower_fence = q1 - self.whisker_coef * iqr;
        let upper_fence = q3 + self.whisker_coef * iqr;
        for (statistic, x) in [
            ("IQR", iqr),
            ("lower fence", lower_fence),
            ("upper fence", upper_fence),
        ] {
            if !x.is_finite() {
                return Err(StatError::invalid_input(
                    &key,
                    InvalidInputReason::NonFiniteStatistic { statistic },
                ));
            }
        }

        let (retained, outliers): (Vec<f64>, Vec<f64>) = sorted_data
            .iter()
            .partition(|&&v| lower_fence < v && v < upper_fence);

        let (qmin, qmax) = match (retained.first(), retained.last()) {
            (Some(&qmin), Some(&qmax)) => (qmin, qmax),
            _ => {
                return Err(StatError::invalid_input(
                    &key,
                    InvalidInputReason::AllOutliers {
                        q1,
                        q2,
                        q3,
                        lower: lower_fence,
                        upper: upper_fence,
                    },
                ))
            }
        };

        Ok(BoxSummary {
            key,
            q1,
            q2,
            q3,
            iqr,
            qmax,
            qmin,
            outliers,
            count: sorted_data.len(),
            lower_fence,
            upper_fence,
        })
    }
}
