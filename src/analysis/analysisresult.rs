use std::sync::Arc;

use serde::Serialize;

use crate::analysis::characteristicdiameter::CharacteristicDiameters;
use crate::analysis::finecontent::FineContent;
use crate::analysis::sortingclass::SortingClass;
use crate::distribution::distributioncurve::DistributionCurve;

/// Statistics derived from one grading curve. Produced by
/// [`SieveAnalyzer::analyze`](crate::analysis::analyzer::SieveAnalyzer::analyze)
/// and never modified afterwards; the source curve is shared, not copied.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    label: String,
    diameters: CharacteristicDiameters,
    cu: f64,
    so: f64,
    cc: f64,
    fine_content: FineContent,
    sorting: SortingClass,
    curve: Arc<DistributionCurve>
}

impl AnalysisResult {
    pub(crate) fn new(label: String,
                      diameters: CharacteristicDiameters,
                      cu: f64,
                      so: f64,
                      cc: f64,
                      fine_content: FineContent,
                      curve: Arc<DistributionCurve>) -> AnalysisResult {
        AnalysisResult {
            label,
            diameters,
            cu,
            so,
            cc,
            fine_content,
            sorting: SortingClass::from_coefficient(so),
            curve
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn diameters(&self) -> &CharacteristicDiameters {
        &self.diameters
    }

    pub fn d10(&self) -> f64 {
        self.diameters.d10
    }

    pub fn d25(&self) -> f64 {
        self.diameters.d25
    }

    pub fn d30(&self) -> f64 {
        self.diameters.d30
    }

    pub fn d50(&self) -> f64 {
        self.diameters.d50
    }

    pub fn d60(&self) -> f64 {
        self.diameters.d60
    }

    pub fn d75(&self) -> f64 {
        self.diameters.d75
    }

    /// Coefficient of uniformity, D60 / D10.
    pub fn cu(&self) -> f64 {
        self.cu
    }

    /// Trask sorting coefficient, sqrt(D75 / D25).
    pub fn so(&self) -> f64 {
        self.so
    }

    /// Coefficient of curvature, D30² / (D10 · D60).
    pub fn cc(&self) -> f64 {
        self.cc
    }

    pub fn fine_content(&self) -> &FineContent {
        &self.fine_content
    }

    pub fn sorting(&self) -> SortingClass {
        self.sorting
    }

    pub fn curve(&self) -> &Arc<DistributionCurve> {
        &self.curve
    }
}
