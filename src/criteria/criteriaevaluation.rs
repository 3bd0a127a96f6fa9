use serde::Serialize;
use tracing::info;

use crate::analysis::analysisresult::AnalysisResult;
use crate::criteria::criteriaspec::CriteriaSpec;

pub const CRITERIA_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriteriaEvaluation {
    pub d50_in_range: bool,
    pub cu_in_range: bool,
    pub so_in_range: bool,
    pub fines_in_range: bool,
    /// The fines figure was a placeholder, not a measurement.
    pub fines_approximate: bool
}

impl CriteriaEvaluation {
    pub fn satisfied_count(&self) -> usize {
        [self.d50_in_range, self.cu_in_range, self.so_in_range, self.fines_in_range]
            .iter()
            .filter(|&&ok| ok)
            .count()
    }

    pub fn all_satisfied(&self) -> bool {
        self.satisfied_count() == CRITERIA_COUNT
    }
}

pub fn evaluate(result: &AnalysisResult, spec: &CriteriaSpec) -> CriteriaEvaluation {
    let mut evaluation = evaluate_values(
        result.d50(),
        result.cu(),
        result.so(),
        result.fine_content().percent(),
        spec
    );
    evaluation.fines_approximate = result.fine_content().is_approximate();
    info!(label = result.label(), satisfied = evaluation.satisfied_count(), "criteria evaluated");
    evaluation
}

/// Same checks for callers that only hold stored statistics.
pub fn evaluate_values(d50: f64, cu: f64, so: f64, fines: f64, spec: &CriteriaSpec) -> CriteriaEvaluation {
    CriteriaEvaluation {
        d50_in_range: spec.d50.contains(d50),
        cu_in_range: spec.cu.contains(cu),
        so_in_range: spec.so.contains(so),
        fines_in_range: spec.fines.contains(fines),
        fines_approximate: false
    }
}
