use serde::Deserialize;

///
/// How an activity claims its share of the probability.
///
/// An activity either has a fixed ratio of the total, or a multiplier that is
/// compared against the other multiplier activities once the ratios are taken out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    /// No modifier was given. Behaves as a multiplier of 1.
    DefaultMultiplier,
    /// Picked more often than a default activity by this factor.
    Multiplier(f64),
    /// Fixed probability of being picked, in (0, 1).
    Ratio(f64),
}

impl Weight {
    pub fn mult(&self) -> Option<f64> {
        match self {
            Weight::DefaultMultiplier => Some(1.0),
            Weight::Multiplier(mult) => Some(*mult),
            Weight::Ratio(_) => None,
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        match self {
            Weight::Ratio(ratio) => Some(*ratio),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("weight_mult and weight_ratio can not be used simultaneously")]
    ConflictingWeights,

    #[error("weight_mult should be finite and greater than 0, got {0}")]
    InvalidWeightMult(f64),

    #[error("weight_ratio should be between 0 and 1 exclusive, got {0}")]
    InvalidWeightRatio(f64),
}

///
/// An activity entry as it appears in a config file.
///
/// Unknown keys are rejected, as is a missing or null name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityRecord {
    pub name: String,
    pub weight_mult: Option<f64>,
    pub weight_ratio: Option<f64>,
}

impl ActivityRecord {
    pub fn new(name: &str) -> ActivityRecord {
        ActivityRecord {
            name: name.to_string(),
            weight_mult: None,
            weight_ratio: None,
        }
    }

    pub fn with_weight_mult(self, weight_mult: f64) -> ActivityRecord {
        ActivityRecord {
            weight_mult: Some(weight_mult),
            ..self
        }
    }

    pub fn with_weight_ratio(self, weight_ratio: f64) -> ActivityRecord {
        ActivityRecord {
            weight_ratio: Some(weight_ratio),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    name: String,
    weight: Weight,
}

impl Activity {
    ///
    /// Builds an activity, checking the modifiers in order: conflict first,
    /// then the multiplier range, then the ratio range.
    ///
    pub fn new(
        name: &str,
        weight_mult: Option<f64>,
        weight_ratio: Option<f64>,
    ) -> Result<Activity, ActivityError> {
        let weight = match (weight_mult, weight_ratio) {
            (Some(_), Some(_)) => return Err(ActivityError::ConflictingWeights),
            (None, None) => Weight::DefaultMultiplier,
            (Some(mult), None) => {
                if !(mult.is_finite() && mult > 0.0) {
                    return Err(ActivityError::InvalidWeightMult(mult));
                }
                Weight::Multiplier(mult)
            }
            (None, Some(ratio)) => {
                // NaN fails both comparisons
                if !(ratio > 0.0 && ratio < 1.0) {
                    return Err(ActivityError::InvalidWeightRatio(ratio));
                }
                Weight::Ratio(ratio)
            }
        };
        Ok(Activity {
            name: name.to_string(),
            weight,
        })
    }

    pub fn with_default_weight(name: &str) -> Activity {
        Activity {
            name: name.to_string(),
            weight: Weight::DefaultMultiplier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn weight_mult(&self) -> Option<f64> {
        self.weight.mult()
    }

    pub fn weight_ratio(&self) -> Option<f64> {
        self.weight.ratio()
    }
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = ActivityError;

    fn try_from(record: ActivityRecord) -> Result<Self, Self::Error> {
        Activity::new(&record.name, record.weight_mult, record.weight_ratio)
    }
}
