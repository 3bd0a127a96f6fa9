use serde::{
    Deserialize,
    Serialize
};

use crate::criteria::interval::Interval;

/// Acceptance bounds for a grading. Each bound is independent; an omitted
/// bound accepts everything.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriteriaSpec {
    /// D50 in mm.
    #[serde(default)]
    pub d50: Interval,
    /// Coefficient of uniformity.
    #[serde(default)]
    pub cu: Interval,
    /// Trask sorting coefficient.
    #[serde(default)]
    pub so: Interval,
    /// Percent passing the fine-content reference size.
    #[serde(default)]
    pub fines: Interval
}

impl CriteriaSpec {
    pub fn new(d50: Interval, cu: Interval, so: Interval, fines: Interval) -> CriteriaSpec {
        CriteriaSpec { d50, cu, so, fines }
    }
}
