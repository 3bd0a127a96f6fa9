use serde::{
    Deserialize,
    Serialize
};

use crate::distribution::distributioncurve::DistributionCurve;
use crate::screening::masssplit::{
    ScreeningError,
    overflow,
    underflow
};

/// One screening stage: keep what passes (`Underflow`) or what is retained
/// (`Overflow`) at the given opening in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "keep", content = "cutoff_size")]
pub enum ScreenCut {
    Underflow(f64),
    Overflow(f64)
}

impl ScreenCut {
    pub fn cutoff_size(&self) -> f64 {
        match self {
            ScreenCut::Underflow(size) | ScreenCut::Overflow(size) => *size
        }
    }

    pub fn apply(&self, curve: &DistributionCurve) -> Result<DistributionCurve, ScreeningError> {
        match self {
            ScreenCut::Underflow(size) => underflow(curve, *size),
            ScreenCut::Overflow(size) => overflow(curve, *size)
        }
    }
}

/// Runs the stages in order, each on the product of the previous one.
pub fn apply_cuts(curve: &DistributionCurve, cuts: &[ScreenCut]) -> Result<DistributionCurve, ScreeningError> {
    cuts.iter().try_fold(curve.clone(), |product, cut| cut.apply(&product))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sand() -> DistributionCurve {
        DistributionCurve::from_columns(
            &[2.0, 1.18, 0.6, 0.425, 0.3, 0.212, 0.15, 0.075],
            &[87.0, 59.0, 38.0, 21.0, 14.0, 9.0, 5.0, 1.0]
        ).unwrap()
    }

    #[test]
    fn chain_equals_nested_calls() {
        let curve = sand();
        let chained = apply_cuts(&curve, &[ScreenCut::Underflow(1.0), ScreenCut::Overflow(0.15)]).unwrap();
        let nested = overflow(&underflow(&curve, 1.0).unwrap(), 0.15).unwrap();
        assert_eq!(chained, nested);
    }

    #[test]
    fn empty_chain_returns_the_input() {
        let curve = sand();
        assert_eq!(apply_cuts(&curve, &[]).unwrap(), curve);
    }

    #[test]
    fn first_failing_stage_stops_the_chain() {
        let err = apply_cuts(&sand(), &[ScreenCut::Underflow(0.05), ScreenCut::Overflow(0.15)]).unwrap_err();
        assert_eq!(err, ScreeningError::EmptyUnderflow { cutoff_size: 0.05 });
    }

    #[test]
    fn reads_from_json() {
        let cuts: Vec<ScreenCut> = serde_json::from_str(
            r#"[{"keep": "Underflow", "cutoff_size": 1.0}, {"keep": "Overflow", "cutoff_size": 0.075}]"#
        ).unwrap();
        assert_eq!(cuts, vec![ScreenCut::Underflow(1.0), ScreenCut::Overflow(0.075)]);
        assert_eq!(cuts[1].cutoff_size(), 0.075);
    }
}
