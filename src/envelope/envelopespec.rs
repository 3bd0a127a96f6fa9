use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::analysis::finecontent::FINE_CONTENT_REFERENCE_SIZE;
use crate::distribution::distributioncurve::CurveError;

pub const DEFAULT_ENVELOPE_MIN_SIZE: f64 = 0.01;
pub const DEFAULT_ENVELOPE_MAX_SIZE: f64 = 100.0;
pub const DEFAULT_ENVELOPE_POINTS: usize = 60;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("invalid envelope parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error(transparent)]
    Curve(#[from] CurveError)
}

fn default_fine_reference_size() -> f64 {
    FINE_CONTENT_REFERENCE_SIZE
}

fn default_min_size() -> f64 {
    DEFAULT_ENVELOPE_MIN_SIZE
}

fn default_max_size() -> f64 {
    DEFAULT_ENVELOPE_MAX_SIZE
}

fn default_points() -> usize {
    DEFAULT_ENVELOPE_POINTS
}

/// Target band for a grading envelope: the D50 and Cu ranges the material
/// may span and the highest admissible fine content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSpec {
    d50_min: f64,
    d50_max: f64,
    cu_min: f64,
    cu_max: f64,
    fines_max: f64,
    #[serde(default = "default_fine_reference_size")]
    fine_reference_size: f64,
    #[serde(default = "default_min_size")]
    min_size: f64,
    #[serde(default = "default_max_size")]
    max_size: f64,
    #[serde(default = "default_points")]
    points: usize
}

impl EnvelopeSpec {
    pub fn new(d50_min: f64, d50_max: f64, cu_min: f64, cu_max: f64, fines_max: f64) -> EnvelopeSpec {
        EnvelopeSpec {
            d50_min,
            d50_max,
            cu_min,
            cu_max,
            fines_max,
            fine_reference_size: FINE_CONTENT_REFERENCE_SIZE,
            min_size: DEFAULT_ENVELOPE_MIN_SIZE,
            max_size: DEFAULT_ENVELOPE_MAX_SIZE,
            points: DEFAULT_ENVELOPE_POINTS
        }
    }

    /// Single target D50 rather than a range.
    pub fn with_target_d50(d50: f64, cu_min: f64, cu_max: f64, fines_max: f64) -> EnvelopeSpec {
        EnvelopeSpec::new(d50, d50, cu_min, cu_max, fines_max)
    }

    pub fn with_size_span(mut self, min_size: f64, max_size: f64) -> EnvelopeSpec {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn with_points(mut self, points: usize) -> EnvelopeSpec {
        self.points = points;
        self
    }

    pub fn with_fine_reference_size(mut self, fine_reference_size: f64) -> EnvelopeSpec {
        self.fine_reference_size = fine_reference_size;
        self
    }

    pub fn d50_min(&self) -> f64 {
        self.d50_min
    }

    pub fn d50_max(&self) -> f64 {
        self.d50_max
    }

    pub fn cu_min(&self) -> f64 {
        self.cu_min
    }

    pub fn cu_max(&self) -> f64 {
        self.cu_max
    }

    pub fn fines_max(&self) -> f64 {
        self.fines_max
    }

    pub fn fine_reference_size(&self) -> f64 {
        self.fine_reference_size
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn validate(&self) -> Result<(), EnvelopeError> {
        let invalid = |name: &'static str, value: f64| Err(EnvelopeError::InvalidParameter { name, value });

        if !(self.d50_min > 0.0) || !self.d50_min.is_finite() {
            return invalid("d50_min", self.d50_min);
        }
        if !(self.d50_max >= self.d50_min) || !self.d50_max.is_finite() {
            return invalid("d50_max", self.d50_max);
        }
        if !(self.cu_min > 1.0) || !self.cu_min.is_finite() {
            return invalid("cu_min", self.cu_min);
        }
        if !(self.cu_max >= self.cu_min) || !self.cu_max.is_finite() {
            return invalid("cu_max", self.cu_max);
        }
        if !(0.0..=100.0).contains(&self.fines_max) {
            return invalid("fines_max", self.fines_max);
        }
        if !(self.min_size > 0.0) {
            return invalid("min_size", self.min_size);
        }
        if !(self.fine_reference_size > self.min_size) {
            return invalid("fine_reference_size", self.fine_reference_size);
        }
        if !(self.max_size > self.fine_reference_size) || !self.max_size.is_finite() {
            return invalid("max_size", self.max_size);
        }
        if self.points < 2 {
            return invalid("points", self.points as f64);
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_cover_the_reference_span() {
        let spec = EnvelopeSpec::with_target_d50(0.35, 1.5, 2.5, 5.0);
        assert_eq!(spec.d50_min(), spec.d50_max());
        assert_eq!(spec.min_size(), 0.01);
        assert_eq!(spec.max_size(), 100.0);
        assert_eq!(spec.fine_reference_size(), 0.063);
        assert!(spec.validate().is_ok());
    }

    #[rstest]
    #[case::zero_d50(EnvelopeSpec::new(0.0, 0.3, 1.5, 2.5, 5.0), "d50_min")]
    #[case::inverted_d50(EnvelopeSpec::new(0.4, 0.3, 1.5, 2.5, 5.0), "d50_max")]
    #[case::uniform_cu(EnvelopeSpec::new(0.3, 0.4, 1.0, 2.5, 5.0), "cu_min")]
    #[case::inverted_cu(EnvelopeSpec::new(0.3, 0.4, 2.5, 1.5, 5.0), "cu_max")]
    #[case::fines_over_100(EnvelopeSpec::new(0.3, 0.4, 1.5, 2.5, 120.0), "fines_max")]
    #[case::span_misses_reference(EnvelopeSpec::new(0.3, 0.4, 1.5, 2.5, 5.0).with_size_span(0.1, 10.0), "fine_reference_size")]
    #[case::too_few_points(EnvelopeSpec::new(0.3, 0.4, 1.5, 2.5, 5.0).with_points(1), "points")]
    fn rejects_invalid_parameters(#[case] spec: EnvelopeSpec, #[case] expected: &str) {
        match spec.validate() {
            Err(EnvelopeError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
            other => panic!("unexpected validation result {:?}", other)
        }
    }

    #[test]
    fn reads_from_json_with_defaults() {
        let spec: EnvelopeSpec = serde_json::from_str(
            r#"{"d50_min": 0.35, "d50_max": 0.35, "cu_min": 1.5, "cu_max": 2.5, "fines_max": 5.0}"#
        ).unwrap();
        assert_eq!(spec, EnvelopeSpec::with_target_d50(0.35, 1.5, 2.5, 5.0));
    }
}
