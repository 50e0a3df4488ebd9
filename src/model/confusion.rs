use serde::Serialize;

use crate::model::params::ClassifierPerformance;

/// Expected confusion-matrix counts for a classifier applied to a population.
///
/// With `size == 1` the components are rates; with `size == 100` they read as
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfusionMatrix {
    pub tp: f64,
    #[serde(rename = "fn")]
    pub fn_: f64,
    pub fp: f64,
    pub tn: f64,
}

impl ConfusionMatrix {
    /// Rates for a unit population.
    pub fn from_rates(performance: ClassifierPerformance, prevalence: f64) -> Self {
        estimate_confusion_matrix(performance.sensitivity, performance.specificity, prevalence, 1.0)
    }

    /// Population size the matrix was built for.
    pub fn total(&self) -> f64 {
        self.tp + self.fn_ + self.fp + self.tn
    }

    /// Positive calls: `tp + fp`.
    pub fn positives(&self) -> f64 {
        self.tp + self.fp
    }

    /// Negative calls: `tn + fn`.
    pub fn negatives(&self) -> f64 {
        self.tn + self.fn_
    }
}

/// Inputs are not range-checked: rates outside `[0, 1]` yield negative or
/// oversized components. Validation belongs to configuration loading.
pub fn estimate(sensitivity: f64, specificity: f64, prevalence: f64, size: f64) -> ConfusionMatrix {
    ConfusionMatrix {
        tp: sensitivity * size * prevalence,
        fn_: (1.0 - sensitivity) * size * prevalence,
        fp: (1.0 - specificity) * size * (1.0 - prevalence),
        tn: specificity * size * (1.0 - prevalence),
    }
}

pub fn estimate_confusion_matrix(
    sensitivity: f64,
    specificity: f64,
    prevalence: f64,
    population_size: f64,
) -> ConfusionMatrix {
    estimate(sensitivity, specificity, prevalence, population_size)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confusion.rs"]
mod tests;
