//! Numeric kernels: interpolated percentiles and the box-plot calculator.

mod box_stat_calculator;
mod percentile;

pub use box_stat_calculator::BoxStatCalculator;
pub use percentile::{median, percentile, quantile_sorted, sorted};
