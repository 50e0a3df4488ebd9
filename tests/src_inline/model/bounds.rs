use super::*;
use crate::model::params::SweepParameter;

const EPS: f64 = 1e-12;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn scenario() -> ParameterSet {
    ParameterSet {
        sensitivity_abbr: 0.9,
        specificity_abbr: 0.9,
        sensitivity_ai: 0.9,
        specificity_ai: 0.9,
        prevalence: 0.1,
        full_time: 600.0,
        abbr_time: 60.0,
    }
}

fn grid() -> Vec<ParameterSet> {
    let rates = [0.0, 0.13, 0.5, 0.77, 0.95, 1.0];
    let prevalences = [0.0, 0.02, 0.1, 0.5, 0.9, 1.0];
    let mut out = Vec::new();
    for &sa in &rates {
        for &pa in &rates {
            for &si in &rates {
                for &pi in &rates {
                    for &prev in &prevalences {
                        out.push(ParameterSet {
                            sensitivity_abbr: sa,
                            specificity_abbr: pa,
                            sensitivity_ai: si,
                            specificity_ai: pi,
                            prevalence: prev,
                            full_time: 600.0,
                            abbr_time: 60.0,
                        });
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_reference_scenario_overlaps() {
    let p = scenario();
    let b = overlap_bounds(p.abbr(), p.ai(), p.prevalence);

    assert!(close(b.abbr_matrix.tp, 0.09));
    assert!(close(b.abbr_matrix.fn_, 0.01));
    assert!(close(b.abbr_matrix.fp, 0.09));
    assert!(close(b.abbr_matrix.tn, 0.81));
    assert_eq!(b.abbr_matrix, b.ai_matrix);

    assert!(close(b.best.tp, 0.09));
    assert!(close(b.best.fp, 0.09));
    assert!(close(b.best.recall(), 0.0));

    assert!(close(b.worst.tp, 0.08));
    assert_eq!(b.worst.fp, 0.0);
    assert!(close(b.worst.need_tp, 0.01));
    assert!(close(b.worst.need_fp, 0.09));
}

#[test]
fn test_reference_scenario_metrics() {
    let m = compute_protocol_bounds(&scenario());

    assert!(close(m.recall_ai_best_case, 0.0));
    assert!(close(m.recall_ai_worst_case, 0.10));
    assert!(close(m.recall_abbr, 0.18));
    assert_eq!(m.recall_full, 0.0);

    // 60 * 0.82 + 600 * 0.18
    assert!((m.avg_time_ai_best_case - 157.2).abs() < 1e-9);
    // 60 * 0.82 + 600 * 0.28
    assert!((m.avg_time_ai_worst_case - 217.2).abs() < 1e-9);
    // 60 + 0.18 * 600
    assert!((m.avg_time_abbr - 168.0).abs() < 1e-9);
    assert_eq!(m.avg_time_full, 600.0);
}

#[test]
fn test_recall_ordering_on_grid() {
    for p in grid() {
        let m = compute_protocol_bounds(&p);
        assert!(
            m.recall_ai_best_case <= m.recall_ai_worst_case + EPS,
            "best > worst for {p:?}"
        );
        assert!(
            m.recall_ai_worst_case <= m.recall_abbr + EPS,
            "worst > abbr for {p:?}"
        );
        assert!(m.avg_time_ai_best_case <= m.avg_time_ai_worst_case + 1e-9);
    }
}

#[test]
fn test_full_protocol_constants() {
    for p in grid() {
        let p = p.with(SweepParameter::FullTime, 431.5);
        let m = compute_protocol_bounds(&p);
        assert_eq!(m.recall_full, 0.0);
        assert_eq!(m.avg_time_full, 431.5);
    }
}

#[test]
fn test_boundary_prevalence() {
    for &prev in &[0.0, 1.0] {
        let p = scenario().with(SweepParameter::Prevalence, prev);
        let m = compute_protocol_bounds(&p);
        assert!(m.recall_ai_best_case <= m.recall_ai_worst_case + EPS);
        assert!(m.recall_ai_best_case.is_finite());
        assert!(m.avg_time_ai_worst_case.is_finite());
    }

    let none_sick = compute_protocol_bounds(&scenario().with(SweepParameter::Prevalence, 0.0));
    assert!(close(none_sick.recall_abbr, 0.1));
    assert!(close(none_sick.recall_ai_best_case, 0.0));
    assert!(close(none_sick.recall_ai_worst_case, 0.1));

    let all_sick = compute_protocol_bounds(&scenario().with(SweepParameter::Prevalence, 1.0));
    assert!(close(all_sick.recall_abbr, 0.9));
    // Both calls 90% of a single pool: at least 80% overlap.
    assert!(close(all_sick.recall_ai_worst_case, 0.1));
}

#[test]
fn test_best_case_overlap_is_not_clamped() {
    // The AI model calls more true positives than the abbreviated protocol,
    // so the best case leaves nothing to confirm.
    let p = ParameterSet {
        sensitivity_abbr: 0.5,
        specificity_abbr: 0.5,
        sensitivity_ai: 0.95,
        specificity_ai: 0.2,
        prevalence: 0.3,
        full_time: 100.0,
        abbr_time: 10.0,
    };
    let b = overlap_bounds(p.abbr(), p.ai(), p.prevalence);
    assert!(close(b.best.tp, b.abbr_matrix.tp));
    assert!(close(b.best.fp, b.abbr_matrix.fp));
    assert!(close(b.best.recall(), 0.0));
}

#[test]
fn test_compute_bounds_matches_structured_entry() {
    let p = scenario().with(SweepParameter::SpecificityAi, 0.7);
    let a = compute_bounds(p.abbr(), p.ai(), p.prevalence, p.full_time, p.abbr_time);
    let b = compute_protocol_bounds(&p);
    assert_eq!(a, b);
    assert_eq!(
        a.avg_time_ai_best_case.to_bits(),
        b.avg_time_ai_best_case.to_bits()
    );
}
