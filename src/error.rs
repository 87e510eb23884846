use std::fmt::Display;

/// Why a group of values could not be summarized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputReason {
    #[error("empty value sequence")]
    Empty,

    #[error("value at position {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },

    /// Every value sits on or beyond a fence, so there is nothing to draw
    /// whiskers from. All-equal groups (including size 1) land here because
    /// both fences collapse onto the single value and the retain test is strict.
    #[error(
        "no value lies strictly inside the fences ({lower}, {upper}); \
         Q1={q1} Q2={q2} Q3={q3}"
    )]
    AllOutliers {
        q1: f64,
        q2: f64,
        q3: f64,
        lower: f64,
        upper: f64,
    },

    #[error("{statistic} overflowed to a non-finite value")]
    NonFiniteStatistic { statistic: &'static str },
}

/// Failure to summarize one key, annotated with that key.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatError {
    #[error("invalid input for key `{key}`: {reason}")]
    InvalidInput {
        key: String,
        reason: InvalidInputReason,
    },
}

impl StatError {
    pub fn invalid_input(key: impl Display, reason: InvalidInputReason) -> Self {
        StatError::InvalidInput {
            key: key.to_string(),
            reason,
        }
    }

    /// The key of the group that failed.
    pub fn key(&self) -> &str {
        match self {
            StatError::InvalidInput { key, .. } => key,
        }
    }

    pub fn reason(&self) -> &InvalidInputReason {
        match self {
            StatError::InvalidInput { reason, .. } => reason,
        }
    }
}

/// A `SummaryConfig` that could not be parsed or is out of range.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("whisker coefficient must be finite and non-negative, got {0}")]
    InvalidWhiskerCoef(f64),
}
