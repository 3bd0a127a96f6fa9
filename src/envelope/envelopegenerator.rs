use serde::Serialize;
use tracing::debug;

use crate::distribution::distributioncurve::DistributionCurve;
use crate::distribution::distributionpoint::DistributionPoint;
use crate::envelope::envelopespec::{
    EnvelopeError,
    EnvelopeSpec
};
use crate::math::curve::curve::Curve;
use crate::math::curve::logisticcurve::LogisticGradation;
use crate::math::interpolation::log_space;

/// Synthetic bounding curves of an acceptable grading band. For comparison
/// and plotting only; the curves are not measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeBand {
    upper: DistributionCurve,
    lower: DistributionCurve,
    spec: EnvelopeSpec
}

impl EnvelopeBand {
    /// Finest admissible grading (most material passing).
    pub fn upper(&self) -> &DistributionCurve {
        &self.upper
    }

    /// Coarsest admissible grading.
    pub fn lower(&self) -> &DistributionCurve {
        &self.lower
    }

    pub fn spec(&self) -> &EnvelopeSpec {
        &self.spec
    }

    /// Measured points within the envelope's size span that fall above the
    /// upper or below the lower bound.
    pub fn points_outside<'a>(&self, curve: &'a DistributionCurve) -> Vec<&'a DistributionPoint> {
        curve.points()
            .iter()
            .filter(|pt| {
                let size = pt.sieve_size();
                match (self.lower.percent_at_size(size), self.upper.percent_at_size(size)) {
                    (Some(lo), Some(hi)) => pt.percent_passing() < lo || pt.percent_passing() > hi,
                    _ => false
                }
            })
            .collect()
    }

    pub fn contains(&self, curve: &DistributionCurve) -> bool {
        self.points_outside(curve).is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EnvelopeGenerator
// ─────────────────────────────────────────────────────────────────────────────
//
// 兩條 S 曲線：
//   fine   : D50 = d50_min, Cu = cu_max
//   coarse : D50 = d50_max, Cu = cu_min
// 上界取兩者逐點最大值，下界取最小值；兩條曲線在 D50 附近可能交叉，
// 取 max/min 後仍為單調曲線。
//
// 細料段（d <= 0.063 mm）：
//   upper(d) = fines_max * ln(d / min_size) / ln(ref / min_size)
//   lower(d) = 0
// 參考粒徑必定是網格點，因此 upper(ref) == fines_max、lower(ref) == 0 恰好成立。

pub struct EnvelopeGenerator {
    spec: EnvelopeSpec,
    fine: LogisticGradation,
    coarse: LogisticGradation
}

impl EnvelopeGenerator {
    pub fn new(spec: EnvelopeSpec) -> Result<EnvelopeGenerator, EnvelopeError> {
        spec.validate()?;
        let fine = LogisticGradation::from_d50_and_cu(spec.d50_min(), spec.cu_max())
            .ok_or(EnvelopeError::InvalidParameter { name: "cu_max", value: spec.cu_max() })?;
        let coarse = LogisticGradation::from_d50_and_cu(spec.d50_max(), spec.cu_min())
            .ok_or(EnvelopeError::InvalidParameter { name: "cu_min", value: spec.cu_min() })?;
        Ok(EnvelopeGenerator { spec, fine, coarse })
    }

    pub fn spec(&self) -> &EnvelopeSpec {
        &self.spec
    }

    /// Candidate sieve sizes: log-spaced over the span, plus the fine-content
    /// reference size.
    pub fn size_grid(&self) -> Vec<f64> {
        let reference = self.spec.fine_reference_size();
        let mut grid: Vec<f64> = log_space(self.spec.min_size(), self.spec.max_size(), self.spec.points())
            .into_iter()
            .filter(|&size| size != reference)
            .collect();
        grid.push(reference);
        grid.sort_by(|a, b| a.total_cmp(b));
        grid
    }

    fn fines_ramp(&self, size: f64) -> f64 {
        let min_size = self.spec.min_size();
        let reference = self.spec.fine_reference_size();
        if size == reference {
            return self.spec.fines_max();
        }
        self.spec.fines_max() * (size / min_size).ln() / (reference / min_size).ln()
    }

    pub fn upper_value(&self, size: f64) -> f64 {
        if size <= self.spec.fine_reference_size() {
            return self.fines_ramp(size).clamp(0.0, 100.0);
        }
        self.fine.value(size)
            .max(self.coarse.value(size))
            .max(self.spec.fines_max())
            .clamp(0.0, 100.0)
    }

    pub fn lower_value(&self, size: f64) -> f64 {
        if size <= self.spec.fine_reference_size() {
            return 0.0;
        }
        self.fine.value(size)
            .min(self.coarse.value(size))
            .clamp(0.0, 100.0)
    }

    pub fn generate(&self) -> Result<EnvelopeBand, EnvelopeError> {
        let grid = self.size_grid();
        debug!(points = grid.len(), d50_min = self.spec.d50_min(), d50_max = self.spec.d50_max(), "envelope grid");

        let upper = DistributionCurve::new(
            grid.iter().map(|&size| DistributionPoint::new(size, self.upper_value(size))).collect()
        )?;
        let lower = DistributionCurve::new(
            grid.iter().map(|&size| DistributionPoint::new(size, self.lower_value(size))).collect()
        )?;

        Ok(EnvelopeBand { upper, lower, spec: self.spec })
    }
}

pub fn generate_envelope(spec: EnvelopeSpec) -> Result<EnvelopeBand, EnvelopeError> {
    EnvelopeGenerator::new(spec)?.generate()
}
