use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

fn inclusive() -> bool {
    true
}

/// An interval over the reals. A missing endpoint is unbounded; endpoints are
/// inclusive unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default = "inclusive")]
    min_inclusive: bool,
    #[serde(default = "inclusive")]
    max_inclusive: bool
}

impl Interval {
    pub fn new(min: Option<f64>, min_inclusive: bool, max: Option<f64>, max_inclusive: bool) -> Interval {
        Interval { min, max, min_inclusive, max_inclusive }
    }

    /// `[min, max]`
    pub fn closed(min: f64, max: f64) -> Interval {
        Interval::new(Some(min), true, Some(max), true)
    }

    /// `(-inf, max]`
    pub fn at_most(max: f64) -> Interval {
        Interval::new(None, true, Some(max), true)
    }

    /// `(-inf, max)`
    pub fn below(max: f64) -> Interval {
        Interval::new(None, true, Some(max), false)
    }

    /// `[min, inf)`
    pub fn at_least(min: f64) -> Interval {
        Interval::new(Some(min), true, None, true)
    }

    /// `(min, inf)`
    pub fn above(min: f64) -> Interval {
        Interval::new(Some(min), false, None, true)
    }

    pub fn unbounded() -> Interval {
        Interval::new(None, true, None, true)
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    pub fn max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }
        let above_min = match self.min {
            Some(min) if self.min_inclusive => x >= min,
            Some(min) => x > min,
            None => true
        };
        let below_max = match self.max {
            Some(max) if self.max_inclusive => x <= max,
            Some(max) => x < max,
            None => true
        };
        above_min && below_max
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::unbounded()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => write!(f, "any"),
            (Some(min), None) => write!(f, "{} {}", if self.min_inclusive { ">=" } else { ">" }, min),
            (None, Some(max)) => write!(f, "{} {}", if self.max_inclusive { "<=" } else { "<" }, max),
            (Some(min), Some(max)) => write!(
                f,
                "{}{}, {}{}",
                if self.min_inclusive { '[' } else { '(' },
                min,
                max,
                if self.max_inclusive { ']' } else { ')' }
            )
        }
    }
}


#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::inside(Interval::closed(1.5, 2.5), 2.0, true)]
    #[case::closed_upper_bound(Interval::closed(1.5, 2.5), 2.5, true)]
    #[case::closed_lower_bound(Interval::closed(1.5, 2.5), 1.5, true)]
    #[case::past_upper_bound(Interval::closed(1.5, 2.5), 2.6, false)]
    #[case::open_upper_bound(Interval::below(2.0), 2.0, false)]
    #[case::below_open_bound(Interval::below(2.0), 1.99, true)]
    #[case::at_most(Interval::at_most(5.0), 5.0, true)]
    #[case::open_lower_bound(Interval::above(1.0), 1.0, false)]
    #[case::at_least(Interval::at_least(1.0), 1.0, true)]
    #[case::unbounded(Interval::unbounded(), -1e300, true)]
    #[case::nan(Interval::unbounded(), f64::NAN, false)]
    fn membership(#[case] interval: Interval, #[case] x: f64, #[case] expected: bool) {
        assert_eq!(interval.contains(x), expected);
    }

    #[test]
    fn json_endpoints_default_to_inclusive() {
        let interval: Interval = serde_json::from_str(r#"{"min": 0.3, "max": 0.5}"#).unwrap();
        assert_eq!(interval, Interval::closed(0.3, 0.5));

        let open: Interval = serde_json::from_str(r#"{"max": 2.0, "max_inclusive": false}"#).unwrap();
        assert_eq!(open, Interval::below(2.0));
    }

    #[test]
    fn displays_as_interval_notation() {
        assert_eq!(Interval::closed(0.3, 0.5).to_string(), "[0.3, 0.5]");
        assert_eq!(Interval::below(5.0).to_string(), "< 5");
        assert_eq!(Interval::unbounded().to_string(), "any");
    }
}
