use log::{debug, warn};
use serde_derive::{Deserialize, Serialize};

use crate::errors::{Result, SoftmaxError};
use crate::softmax::{exponentials, max_value, normalize};

/// Whether the values are shifted by their max before exponentiating.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    /// Plain `exp(x) / sum(exp(x))`, the same as [`crate::softmax`].
    #[default]
    Unguarded,
    /// Subtract `max(x)` first, the same as [`crate::softmax_stable`].
    MaxShifted,
}

impl Stability {
    fn shift(&self, values: &[f64]) -> f64 {
        match self {
            Stability::Unguarded => 0.0,
            Stability::MaxShifted => max_value(values),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SoftmaxConfig {
    pub stability: Stability,
}

impl SoftmaxConfig {
    pub fn unguarded() -> Self {
        Self {
            stability: Stability::Unguarded,
        }
    }

    pub fn max_shifted() -> Self {
        Self {
            stability: Stability::MaxShifted,
        }
    }

    /// Runs softmax with the configured stability. No checks are made, NaN and
    /// infinities come out the way floating point arithmetic produces them.
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let exps = exponentials(values, self.stability.shift(values));
        let sum_exps: f64 = exps.iter().sum();
        normalize(exps, sum_exps)
    }

    /// Like [`SoftmaxConfig::apply`] but rejects inputs that would not produce a
    /// probability distribution.
    pub fn try_apply(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.is_empty() {
            debug!("rejecting softmax of an empty input");
            return Err(SoftmaxError::EmptyInput);
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            debug!("rejecting softmax input: value {} at index {}", value, index);
            return Err(SoftmaxError::NonFiniteInput { index, value });
        }

        let exps = exponentials(values, self.stability.shift(values));
        let sum_exps: f64 = exps.iter().sum();
        if sum_exps == 0.0 || !sum_exps.is_finite() {
            warn!(
                "softmax normalizer is {} for {} values with {:?} stability",
                sum_exps,
                values.len(),
                self.stability
            );
            return Err(SoftmaxError::DegenerateNormalizer { total: sum_exps });
        }

        Ok(normalize(exps, sum_exps))
    }
}
