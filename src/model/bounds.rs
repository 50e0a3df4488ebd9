use serde::Serialize;

use crate::model::confusion::ConfusionMatrix;
use crate::model::params::{ClassifierPerformance, ParameterSet};

/// Overlap between the abbreviated protocol's and the AI model's positive
/// calls, split by true and false positives, and the abbreviated-protocol
/// positives left uncovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlap {
    pub tp: f64,
    pub fp: f64,
    pub need_tp: f64,
    pub need_fp: f64,
}

impl Overlap {
    fn from_abbr(abbr: &ConfusionMatrix, tp: f64, fp: f64) -> Self {
        Self {
            tp,
            fp,
            need_tp: abbr.tp - tp,
            need_fp: abbr.fp - fp,
        }
    }

    /// Fraction of the population sent on to the full protocol.
    pub fn recall(&self) -> f64 {
        self.need_tp + self.need_fp
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlapBounds {
    pub abbr_matrix: ConfusionMatrix,
    pub ai_matrix: ConfusionMatrix,
    pub best: Overlap,
    pub worst: Overlap,
}

/// Recall rates and average protocol times of the four strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsResult {
    pub recall_ai_best_case: f64,
    pub recall_ai_worst_case: f64,
    pub recall_abbr: f64,
    pub recall_full: f64,
    pub avg_time_ai_best_case: f64,
    pub avg_time_ai_worst_case: f64,
    pub avg_time_abbr: f64,
    pub avg_time_full: f64,
}

impl MetricsResult {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::RecallAiBestCase => self.recall_ai_best_case,
            Metric::RecallAiWorstCase => self.recall_ai_worst_case,
            Metric::RecallAbbr => self.recall_abbr,
            Metric::RecallFull => self.recall_full,
            Metric::AvgTimeAiBestCase => self.avg_time_ai_best_case,
            Metric::AvgTimeAiWorstCase => self.avg_time_ai_worst_case,
            Metric::AvgTimeAbbr => self.avg_time_abbr,
            Metric::AvgTimeFull => self.avg_time_full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    RecallAiBestCase,
    RecallAiWorstCase,
    RecallAbbr,
    RecallFull,
    AvgTimeAiBestCase,
    AvgTimeAiWorstCase,
    AvgTimeAbbr,
    AvgTimeFull,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::RecallAiBestCase,
        Metric::RecallAiWorstCase,
        Metric::RecallAbbr,
        Metric::RecallFull,
        Metric::AvgTimeAiBestCase,
        Metric::AvgTimeAiWorstCase,
        Metric::AvgTimeAbbr,
        Metric::AvgTimeFull,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::RecallAiBestCase => "recall_ai_best_case",
            Metric::RecallAiWorstCase => "recall_ai_worst_case",
            Metric::RecallAbbr => "recall_abbr",
            Metric::RecallFull => "recall_full",
            Metric::AvgTimeAiBestCase => "avg_time_ai_best_case",
            Metric::AvgTimeAiWorstCase => "avg_time_ai_worst_case",
            Metric::AvgTimeAbbr => "avg_time_abbr",
            Metric::AvgTimeFull => "avg_time_full",
        }
    }
}

/// Best case: positive calls coincide as far as the smaller set allows.
/// Worst case: they overlap only by the pigeonhole excess over each pool
/// (`prevalence` for true positives, `1 - prevalence` for false positives).
pub fn overlap_bounds(
    abbr: ClassifierPerformance,
    ai: ClassifierPerformance,
    prevalence: f64,
) -> OverlapBounds {
    let abbr_matrix = ConfusionMatrix::from_rates(abbr, prevalence);
    let ai_matrix = ConfusionMatrix::from_rates(ai, prevalence);

    let best = Overlap::from_abbr(
        &abbr_matrix,
        ai_matrix.tp.min(abbr_matrix.tp),
        ai_matrix.fp.min(abbr_matrix.fp),
    );

    let worst = Overlap::from_abbr(
        &abbr_matrix,
        (ai_matrix.tp + abbr_matrix.tp - prevalence).max(0.0),
        (ai_matrix.fp + abbr_matrix.fp - (1.0 - prevalence)).max(0.0),
    );

    OverlapBounds {
        abbr_matrix,
        ai_matrix,
        best,
        worst,
    }
}

pub fn compute_bounds(
    abbr: ClassifierPerformance,
    ai: ClassifierPerformance,
    prevalence: f64,
    full_time: f64,
    abbr_time: f64,
) -> MetricsResult {
    metrics_from_overlap(&overlap_bounds(abbr, ai, prevalence), full_time, abbr_time)
}

pub fn compute_protocol_bounds(params: &ParameterSet) -> MetricsResult {
    compute_bounds(
        params.abbr(),
        params.ai(),
        params.prevalence,
        params.full_time,
        params.abbr_time,
    )
}

pub fn metrics_from_overlap(
    bounds: &OverlapBounds,
    full_time: f64,
    abbr_time: f64,
) -> MetricsResult {
    let ai = &bounds.ai_matrix;

    let recall_ai_best_case = bounds.best.recall();
    let recall_ai_worst_case = bounds.worst.recall();
    let recall_abbr = bounds.abbr_matrix.positives();
    let recall_full = 0.0;

    // The AI model decides who stays on the abbreviated pathway.
    let fast_tracked = abbr_time * ai.negatives();

    MetricsResult {
        recall_ai_best_case,
        recall_ai_worst_case,
        recall_abbr,
        recall_full,
        avg_time_ai_best_case: fast_tracked + full_time * (ai.positives() + recall_ai_best_case),
        avg_time_ai_worst_case: fast_tracked + full_time * (ai.positives() + recall_ai_worst_case),
        avg_time_abbr: abbr_time + recall_abbr * full_time,
        avg_time_full: full_time,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bounds.rs"]
mod tests;
