use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::distribution::distributioncurve::{
    CurveError,
    DistributionCurve,
    MIN_CURVE_POINTS
};
use crate::distribution::distributionpoint::DistributionPoint;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradationError {
    #[error("negative mass {mass} g retained on sieve {sieve_size} mm")]
    NegativeMass { sieve_size: f64, mass: f64 },
    #[error("the sample has no retained mass")]
    ZeroTotalMass,
    #[error(transparent)]
    Curve(#[from] CurveError)
}

/// Mass (g) left on one sieve after shaking. The pan is sieve size 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetainedMass {
    pub sieve_size: f64,
    pub mass: f64
}

impl RetainedMass {
    pub fn new(sieve_size: f64, mass: f64) -> RetainedMass {
        RetainedMass { sieve_size, mass }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradationRow {
    pub sieve_size: f64,
    pub mass_retained: f64,
    pub percent_retained: f64,
    pub cumulative_retained: f64,
    pub percent_passing: f64
}

/// The classic sieve sheet: retained masses worked through to percent passing.
/// Rows run from the coarsest sieve down to the pan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradationTable {
    rows: Vec<GradationRow>,
    total_mass: f64
}

impl GradationTable {
    pub fn from_retained(mut retained: Vec<RetainedMass>) -> Result<GradationTable, GradationError> {
        if retained.len() < MIN_CURVE_POINTS {
            return Err(CurveError::InsufficientData {
                required: MIN_CURVE_POINTS,
                found: retained.len()
            }.into());
        }
        for r in retained.iter() {
            if !r.sieve_size.is_finite() || r.sieve_size < 0.0 {
                return Err(CurveError::InvalidSieveSize(r.sieve_size).into());
            }
            if !r.mass.is_finite() || r.mass < 0.0 {
                return Err(GradationError::NegativeMass { sieve_size: r.sieve_size, mass: r.mass });
            }
        }

        let total_mass: f64 = retained.iter().map(|r| r.mass).sum();
        if total_mass <= 0.0 {
            return Err(GradationError::ZeroTotalMass);
        }

        retained.sort_by(|a, b| b.sieve_size.total_cmp(&a.sieve_size));

        let mut cumulative = 0.0;
        let rows = retained
            .iter()
            .map(|r| {
                let percent_retained = r.mass / total_mass * 100.0;
                cumulative += percent_retained;
                // 累加的浮點誤差可能使篩底略低於 0
                let percent_passing = (100.0 - cumulative).clamp(0.0, 100.0);
                GradationRow {
                    sieve_size: r.sieve_size,
                    mass_retained: r.mass,
                    percent_retained,
                    cumulative_retained: cumulative,
                    percent_passing
                }
            })
            .collect();

        Ok(GradationTable { rows, total_mass })
    }

    pub fn rows(&self) -> &[GradationRow] {
        &self.rows
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    pub fn to_curve(&self) -> Result<DistributionCurve, CurveError> {
        let points = self.rows
            .iter()
            .map(|row| DistributionPoint::new(row.sieve_size, row.percent_passing))
            .collect();
        DistributionCurve::new(points)
    }
}
