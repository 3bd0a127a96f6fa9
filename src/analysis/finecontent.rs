use serde::Serialize;
use tracing::warn;

use crate::distribution::distributioncurve::DistributionCurve;

/// Silt/clay boundary used for the fines criterion (mm).
pub const FINE_CONTENT_REFERENCE_SIZE: f64 = 0.063;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum FineContentSource {
    /// The curve has a sieve at the reference size.
    Measured,
    /// Interpolated between the two sieves around the reference size.
    Interpolated,
    /// The reference size lies outside the measured range; the value is a
    /// 0 % placeholder, not a measurement.
    OutOfRange
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct FineContent {
    percent: f64,
    source: FineContentSource
}

impl FineContent {
    pub fn new(percent: f64, source: FineContentSource) -> FineContent {
        FineContent { percent, source }
    }

    pub fn from_curve(curve: &DistributionCurve, reference_size: f64) -> FineContent {
        if let Some(pt) = curve.point_at_size(reference_size) {
            return FineContent::new(pt.percent_passing(), FineContentSource::Measured);
        }
        match curve.percent_at_size(reference_size) {
            Some(percent) => FineContent::new(percent, FineContentSource::Interpolated),
            None => {
                warn!(
                    reference_size,
                    min_size = curve.min_size(),
                    max_size = curve.max_size(),
                    "fine content reference size outside the measured range, reporting 0%"
                );
                FineContent::new(0.0, FineContentSource::OutOfRange)
            }
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn source(&self) -> FineContentSource {
        self.source
    }

    pub fn is_approximate(&self) -> bool {
        self.source == FineContentSource::OutOfRange
    }
}
