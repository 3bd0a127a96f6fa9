use serde::{
    Deserialize,
    Serialize
};

use crate::distribution::distributioncurve::DistributionCurve;

/// The conventional percent-passing levels reported for a sample.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Percentile {
    D10,
    D25,
    D30,
    D50,
    D60,
    D75
}

impl Percentile {
    pub const ALL: [Percentile; 6] = [
        Percentile::D10,
        Percentile::D25,
        Percentile::D30,
        Percentile::D50,
        Percentile::D60,
        Percentile::D75
    ];

    pub fn percent(&self) -> f64 {
        match self {
            Percentile::D10 => 10.0,
            Percentile::D25 => 25.0,
            Percentile::D30 => 30.0,
            Percentile::D50 => 50.0,
            Percentile::D60 => 60.0,
            Percentile::D75 => 75.0
        }
    }
}

pub fn diameter_at_percent(curve: &DistributionCurve, percent: f64) -> f64 {
    curve.diameter_at_percent(percent)
}

pub fn diameter_at(curve: &DistributionCurve, percentile: Percentile) -> f64 {
    curve.diameter_at_percent(percentile.percent())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharacteristicDiameters {
    pub d10: f64,
    pub d25: f64,
    pub d30: f64,
    pub d50: f64,
    pub d60: f64,
    pub d75: f64
}

impl CharacteristicDiameters {
    pub fn from_curve(curve: &DistributionCurve) -> CharacteristicDiameters {
        CharacteristicDiameters {
            d10: diameter_at(curve, Percentile::D10),
            d25: diameter_at(curve, Percentile::D25),
            d30: diameter_at(curve, Percentile::D30),
            d50: diameter_at(curve, Percentile::D50),
            d60: diameter_at(curve, Percentile::D60),
            d75: diameter_at(curve, Percentile::D75)
        }
    }

    pub fn get(&self, percentile: Percentile) -> f64 {
        match percentile {
            Percentile::D10 => self.d10,
            Percentile::D25 => self.d25,
            Percentile::D30 => self.d30,
            Percentile::D50 => self.d50,
            Percentile::D60 => self.d60,
            Percentile::D75 => self.d75
        }
    }
}
