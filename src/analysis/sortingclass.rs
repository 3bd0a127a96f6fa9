use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// Sorting grade read off the Trask coefficient. Class boundaries are
/// half-open: `[1.2, 1.5)` is well sorted, and so on.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SortingClass {
    VeryWellSorted,
    WellSorted,
    ModeratelySorted,
    PoorlySorted,
    VeryPoorlySorted
}

impl SortingClass {
    pub fn from_coefficient(so: f64) -> SortingClass {
        if so < 1.2 {
            SortingClass::VeryWellSorted
        } else if so < 1.5 {
            SortingClass::WellSorted
        } else if so < 2.0 {
            SortingClass::ModeratelySorted
        } else if so < 4.0 {
            SortingClass::PoorlySorted
        } else {
            SortingClass::VeryPoorlySorted
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortingClass::VeryWellSorted => "Very well sorted",
            SortingClass::WellSorted => "Well sorted",
            SortingClass::ModeratelySorted => "Moderately sorted",
            SortingClass::PoorlySorted => "Poorly sorted",
            SortingClass::VeryPoorlySorted => "Very poorly sorted"
        }
    }
}

impl fmt::Display for SortingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}


#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, SortingClass::VeryWellSorted)]
    #[case(1.1999, SortingClass::VeryWellSorted)]
    #[case(1.2, SortingClass::WellSorted)]
    #[case(1.4999, SortingClass::WellSorted)]
    #[case(1.5, SortingClass::ModeratelySorted)]
    #[case(2.0, SortingClass::PoorlySorted)]
    #[case(3.9999, SortingClass::PoorlySorted)]
    #[case(4.0, SortingClass::VeryPoorlySorted)]
    #[case(12.0, SortingClass::VeryPoorlySorted)]
    fn boundaries_are_half_open(#[case] so: f64, #[case] expected: SortingClass) {
        assert_eq!(SortingClass::from_coefficient(so), expected);
    }

    #[test]
    fn descriptions_read_as_labels() {
        assert_eq!(SortingClass::ModeratelySorted.to_string(), "Moderately sorted");
        assert_eq!(SortingClass::VeryPoorlySorted.description(), "Very poorly sorted");
    }
}
