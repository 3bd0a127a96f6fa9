use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;
use tracing::{
    debug,
    info
};

use crate::analysis::analysisresult::AnalysisResult;
use crate::analysis::characteristicdiameter::CharacteristicDiameters;
use crate::analysis::finecontent::{
    FINE_CONTENT_REFERENCE_SIZE,
    FineContent
};
use crate::distribution::distributioncurve::{
    CurveError,
    DistributionCurve
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("{ratio} is undefined for numerator {numerator} and denominator {denominator}")]
    UndefinedRatio { ratio: &'static str, numerator: f64, denominator: f64 }
}

fn default_fine_reference_size() -> f64 {
    FINE_CONTENT_REFERENCE_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    #[serde(default = "default_fine_reference_size")]
    fine_reference_size: f64
}

impl AnalyzerSettings {
    pub fn new(fine_reference_size: f64) -> AnalyzerSettings {
        AnalyzerSettings { fine_reference_size }
    }

    pub fn fine_reference_size(&self) -> f64 {
        self.fine_reference_size
    }
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        AnalyzerSettings::new(FINE_CONTENT_REFERENCE_SIZE)
    }
}

/// `numerator / denominator` for size ratios. Sizes are never negative, so a
/// non-positive denominator or a negative quotient means the curve cannot
/// support the ratio.
fn size_ratio(ratio: &'static str, numerator: f64, denominator: f64) -> Result<f64, AnalysisError> {
    let undefined = AnalysisError::UndefinedRatio { ratio, numerator, denominator };
    if !(denominator > 0.0) || !numerator.is_finite() || !denominator.is_finite() {
        return Err(undefined);
    }
    let value = numerator / denominator;
    if value < 0.0 {
        return Err(undefined);
    }
    Ok(value)
}

/// Turns a grading curve into an [`AnalysisResult`]. Stateless apart from its
/// settings; one analyzer can serve any number of curves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SieveAnalyzer {
    settings: AnalyzerSettings
}

impl SieveAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> SieveAnalyzer {
        SieveAnalyzer { settings }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub fn analyze(&self,
                   curve: Arc<DistributionCurve>,
                   label: &str) -> Result<AnalysisResult, AnalysisError> {
        let diameters = CharacteristicDiameters::from_curve(&curve);
        debug!(label, ?diameters, "characteristic diameters");

        let cu = size_ratio("Cu = D60/D10", diameters.d60, diameters.d10)?;
        let so = size_ratio("So^2 = D75/D25", diameters.d75, diameters.d25)?.sqrt();
        let cc = size_ratio("Cc = D30^2/(D10*D60)", diameters.d30 * diameters.d30, diameters.d10 * diameters.d60)?;
        let fine_content = FineContent::from_curve(&curve, self.settings.fine_reference_size);

        let result = AnalysisResult::new(label.to_owned(), diameters, cu, so, cc, fine_content, curve);
        info!(
            event = "analysis_end",
            label,
            d50 = result.d50(),
            cu,
            so,
            sorting = %result.sorting()
        );
        Ok(result)
    }

    pub fn analyze_columns(&self,
                           sieve_sizes: &[f64],
                           percents_passing: &[f64],
                           label: &str) -> Result<AnalysisResult, AnalysisError> {
        let curve = DistributionCurve::from_columns(sieve_sizes, percents_passing)?;
        self.analyze(Arc::new(curve), label)
    }
}
