use thiserror::Error;
use tracing::{
    debug,
    warn
};

use crate::distribution::distributioncurve::{
    CurveError,
    DistributionCurve
};
use crate::distribution::distributionpoint::DistributionPoint;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreeningError {
    #[error("invalid screen cutoff {0} mm")]
    InvalidCutoff(f64),
    #[error("no material passes the {cutoff_size} mm screen")]
    EmptyUnderflow { cutoff_size: f64 },
    #[error("no material is retained on the {cutoff_size} mm screen")]
    EmptyOverflow { cutoff_size: f64 },
    #[error(transparent)]
    Curve(#[from] CurveError)
}

fn check_cutoff(cutoff_size: f64) -> Result<(), ScreeningError> {
    if cutoff_size.is_finite() && cutoff_size > 0.0 {
        Ok(())
    } else {
        Err(ScreeningError::InvalidCutoff(cutoff_size))
    }
}

/// Percent passing recorded on the coarsest sieve no larger than
/// `cutoff_size`, or 0 when every sieve is coarser than the cutoff.
pub fn cutoff_percent(curve: &DistributionCurve, cutoff_size: f64) -> f64 {
    curve
        .coarsest_at_or_below(cutoff_size)
        .map_or(0.0, |pt| pt.percent_passing())
}

/// Grading of the material passing a screen of opening `cutoff_size`,
/// renormalised to its own 100 % basis.
///
/// The cutoff becomes the new coarsest point at 100 %; every finer sieve is
/// rescaled by `100 / cutoff_percent`.
pub fn underflow(curve: &DistributionCurve, cutoff_size: f64) -> Result<DistributionCurve, ScreeningError> {
    check_cutoff(cutoff_size)?;

    let passing = cutoff_percent(curve, cutoff_size);
    if passing == 0.0 {
        warn!(cutoff_size, "screen underflow is empty");
        return Err(ScreeningError::EmptyUnderflow { cutoff_size });
    }

    let mut points = vec![DistributionPoint::new(cutoff_size, 100.0)];
    points.extend(
        curve.points()
            .iter()
            .filter(|pt| pt.sieve_size() < cutoff_size)
            .map(|pt| DistributionPoint::new(pt.sieve_size(), pt.percent_passing() / passing * 100.0))
    );
    debug!(cutoff_size, cutoff_percent = passing, points = points.len(), "screen underflow");

    Ok(DistributionCurve::new(points)?)
}

/// Grading of the material retained on a screen of opening `cutoff_size`,
/// renormalised against the retained mass `100 - cutoff_percent`.
///
/// The cutoff becomes the new finest point at 0 %; every coarser sieve keeps
/// only the share of its passing that lies above the cutoff.
pub fn overflow(curve: &DistributionCurve, cutoff_size: f64) -> Result<DistributionCurve, ScreeningError> {
    check_cutoff(cutoff_size)?;

    let passing = cutoff_percent(curve, cutoff_size);
    let retained = 100.0 - passing;
    if retained <= 0.0 {
        warn!(cutoff_size, "screen overflow is empty");
        return Err(ScreeningError::EmptyOverflow { cutoff_size });
    }

    let mut points = vec![DistributionPoint::new(cutoff_size, 0.0)];
    points.extend(
        curve.points()
            .iter()
            .filter(|pt| pt.sieve_size() > cutoff_size)
            .map(|pt| DistributionPoint::new(pt.sieve_size(), (pt.percent_passing() - passing) / retained * 100.0))
    );
    debug!(cutoff_size, cutoff_percent = passing, points = points.len(), "screen overflow");

    Ok(DistributionCurve::new(points)?)
}
