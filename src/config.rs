use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_WHISKER_COEF: f64 = 1.5;

/// Knobs for a box-per-key pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Fences sit at `Q1 - coef * IQR` and `Q3 + coef * IQR`.
    pub whisker_coef: f64,
    /// Summarize keys on the rayon pool instead of one after another.
    pub parallel: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            whisker_coef: DEFAULT_WHISKER_COEF,
            parallel: true,
        }
    }
}

impl SummaryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SummaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.whisker_coef.is_finite() || self.whisker_coef < 0.0 {
            return Err(ConfigError::InvalidWhiskerCoef(self.whisker_coef));
        }
        Ok(())
    }
}
