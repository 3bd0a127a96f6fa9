use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;
use tracing::debug;

use crate::distribution::distributionpoint::DistributionPoint;
use crate::math::interpolation::{
    brackets,
    interpolate
};

pub const MIN_CURVE_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("at least {required} sieve points are required, {found} given")]
    InsufficientData { required: usize, found: usize },
    #[error("{sizes} sieve sizes given for {percents} percent passing values")]
    LengthMismatch { sizes: usize, percents: usize },
    #[error("invalid sieve size {0}")]
    InvalidSieveSize(f64),
    #[error("percent passing {percent} at sieve size {sieve_size} mm is outside [0, 100]")]
    InvalidPercentPassing { sieve_size: f64, percent: f64 },
    #[error("sieve size {0} mm appears more than once")]
    DuplicateSieveSize(f64),
    #[error("percent passing drops from {previous_percent} to {percent} at sieve size {sieve_size} mm")]
    NonMonotonic { sieve_size: f64, percent: f64, previous_percent: f64 }
}

/// A measured cumulative grading curve.
///
/// Points are held in ascending sieve size order. Percent passing never
/// decreases along that order, so the sequence is also ascending by percent
/// passing; every interpolation query relies on it. Both properties are
/// checked once in [`DistributionCurve::new`] and the curve is immutable
/// afterwards. Transforms build a new curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DistributionPoint>", into = "Vec<DistributionPoint>")]
pub struct DistributionCurve {
    points: Vec<DistributionPoint>
}

impl DistributionCurve {
    pub fn new(mut points: Vec<DistributionPoint>) -> Result<DistributionCurve, CurveError> {
        if points.len() < MIN_CURVE_POINTS {
            return Err(CurveError::InsufficientData {
                required: MIN_CURVE_POINTS,
                found: points.len()
            });
        }

        for pt in points.iter() {
            let size = pt.sieve_size();
            if !size.is_finite() || size < 0.0 {
                return Err(CurveError::InvalidSieveSize(size));
            }
            let percent = pt.percent_passing();
            if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
                return Err(CurveError::InvalidPercentPassing { sieve_size: size, percent });
            }
        }

        points.sort_by(|a, b| a.sieve_size().total_cmp(&b.sieve_size()));

        for pair in points.windows(2) {
            let (finer, coarser) = (&pair[0], &pair[1]);
            if finer.sieve_size() == coarser.sieve_size() {
                return Err(CurveError::DuplicateSieveSize(coarser.sieve_size()));
            }
            if coarser.percent_passing() < finer.percent_passing() {
                return Err(CurveError::NonMonotonic {
                    sieve_size: coarser.sieve_size(),
                    percent: coarser.percent_passing(),
                    previous_percent: finer.percent_passing()
                });
            }
        }

        Ok(DistributionCurve { points })
    }

    /// Builds a curve from the parallel-column layout used by sieve sheets.
    /// The columns may be given in any size order.
    pub fn from_columns(sieve_sizes: &[f64], percents_passing: &[f64]) -> Result<DistributionCurve, CurveError> {
        if sieve_sizes.len() != percents_passing.len() {
            return Err(CurveError::LengthMismatch {
                sizes: sieve_sizes.len(),
                percents: percents_passing.len()
            });
        }
        let points = sieve_sizes
            .iter()
            .zip(percents_passing.iter())
            .map(|(&size, &percent)| DistributionPoint::new(size, percent))
            .collect();
        DistributionCurve::new(points)
    }

    pub fn points(&self) -> &[DistributionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_size(&self) -> f64 {
        self.points[0].sieve_size()
    }

    pub fn max_size(&self) -> f64 {
        self.points[self.points.len() - 1].sieve_size()
    }

    pub fn min_percent(&self) -> f64 {
        self.points[0].percent_passing()
    }

    pub fn max_percent(&self) -> f64 {
        self.points[self.points.len() - 1].percent_passing()
    }

    pub fn sieve_sizes(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.sieve_size()).collect()
    }

    pub fn percents_passing(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.percent_passing()).collect()
    }

    /// Sieve size at which the cumulative passing equals `target_percent`.
    ///
    /// Adjacent pairs are scanned from the coarsest sieve down; the first pair
    /// whose percents enclose the target is interpolated linearly, and a flat
    /// pair resolves to its coarser sieve. No extrapolation: a target at or
    /// below the smallest observed percent yields the finest size, any other
    /// unbracketed target yields the coarsest size.
    pub fn diameter_at_percent(&self, target_percent: f64) -> f64 {
        if target_percent.is_nan() {
            return f64::NAN;
        }

        for pair in self.points.windows(2).rev() {
            let (finer, coarser) = (&pair[0], &pair[1]);
            if brackets(coarser.percent_passing(), finer.percent_passing(), target_percent) {
                let size = interpolate(
                    coarser.sieve_size(), coarser.percent_passing(),
                    finer.sieve_size(), finer.percent_passing(),
                    target_percent
                );
                debug!(target_percent, coarser_size = coarser.sieve_size(), finer_size = finer.sieve_size(), size, "bracketing segment");
                return size;
            }
        }

        if target_percent <= self.min_percent() {
            self.min_size()
        } else {
            self.max_size()
        }
    }

    /// Percent passing at `sieve_size`, the size-indexed direction of
    /// [`Self::diameter_at_percent`].
    ///
    /// An exact sieve returns its measured value. Otherwise the enclosing
    /// pair of sieves is interpolated linearly; `None` when `sieve_size`
    /// falls outside the measured range.
    pub fn percent_at_size(&self, sieve_size: f64) -> Option<f64> {
        if let Some(pt) = self.point_at_size(sieve_size) {
            return Some(pt.percent_passing());
        }

        self.points
            .windows(2)
            .find(|pair| pair[0].sieve_size() < sieve_size && sieve_size < pair[1].sieve_size())
            .map(|pair| interpolate(
                pair[0].percent_passing(), pair[0].sieve_size(),
                pair[1].percent_passing(), pair[1].sieve_size(),
                sieve_size
            ))
    }

    pub fn point_at_size(&self, sieve_size: f64) -> Option<&DistributionPoint> {
        self.points.iter().find(|pt| pt.sieve_size() == sieve_size)
    }

    /// The coarsest measured point whose sieve size does not exceed `sieve_size`.
    pub fn coarsest_at_or_below(&self, sieve_size: f64) -> Option<&DistributionPoint> {
        self.points.iter().rev().find(|pt| pt.sieve_size() <= sieve_size)
    }
}

impl TryFrom<Vec<DistributionPoint>> for DistributionCurve {
    type Error = CurveError;

    fn try_from(points: Vec<DistributionPoint>) -> Result<Self, Self::Error> {
        DistributionCurve::new(points)
    }
}

impl From<DistributionCurve> for Vec<DistributionPoint> {
    fn from(curve: DistributionCurve) -> Self {
        curve.points
    }
}
