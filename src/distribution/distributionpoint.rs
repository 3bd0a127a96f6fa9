use serde::{
    Deserialize,
    Serialize
};

/// One sieve measurement: the cumulative mass percentage of the sample finer
/// than `sieve_size` (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionPoint {
    sieve_size: f64,
    percent_passing: f64
}

impl DistributionPoint {
    pub fn new(sieve_size: f64, percent_passing: f64) -> DistributionPoint {
        DistributionPoint { sieve_size, percent_passing }
    }

    pub fn sieve_size(&self) -> f64 {
        self.sieve_size
    }

    pub fn percent_passing(&self) -> f64 {
        self.percent_passing
    }
}

impl From<(f64, f64)> for DistributionPoint {
    fn from((sieve_size, percent_passing): (f64, f64)) -> Self {
        DistributionPoint::new(sieve_size, percent_passing)
    }
}
