use std::sync::Arc;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};
use uuid::Uuid;

use crate::distribution::distributioncurve::DistributionCurve;
use crate::objectwithuuid::ObjectWithUUID;

/// A field sample and its measured grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    tested_on: Option<NaiveDate>,
    curve: Arc<DistributionCurve>
}

impl Sample {
    pub fn new(name: String, curve: DistributionCurve) -> Sample {
        Sample {
            id: Uuid::new_v4(),
            name,
            location: None,
            tested_on: None,
            curve: Arc::new(curve)
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Sample {
        self.id = id;
        self
    }

    pub fn with_location(mut self, location: String) -> Sample {
        self.location = Some(location);
        self
    }

    pub fn with_test_date(mut self, tested_on: NaiveDate) -> Sample {
        self.tested_on = Some(tested_on);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn tested_on(&self) -> Option<NaiveDate> {
        self.tested_on
    }

    pub fn curve(&self) -> &Arc<DistributionCurve> {
        &self.curve
    }
}

impl ObjectWithUUID for Sample {
    fn uuid(&self) -> &Uuid {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_sample_from_json() {
        let sample: Sample = serde_json::from_str(r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Sample-BS 001",
            "location": "North Beach",
            "tested_on": "2025-03-14",
            "curve": [
                {"sieve_size": 1.18, "percent_passing": 59.0},
                {"sieve_size": 0.6, "percent_passing": 38.0}
            ]
        }"#).unwrap();

        assert_eq!(sample.uuid().to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(sample.location(), Some("North Beach"));
        assert_eq!(sample.tested_on(), NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(sample.curve().min_size(), 0.6);
    }

    #[test]
    fn fresh_samples_get_distinct_ids() {
        let curve = DistributionCurve::from_columns(&[0.5, 1.0], &[40.0, 100.0]).unwrap();
        let a = Sample::new("a".to_owned(), curve.clone());
        let b = Sample::new("b".to_owned(), curve);
        assert_ne!(a.uuid(), b.uuid());
    }

    #[test]
    fn builder_metadata_survives_json() {
        let curve = DistributionCurve::from_columns(&[0.3, 0.6, 1.18], &[14.0, 38.0, 59.0]).unwrap();
        let sample = Sample::new("Sample-BS 002".to_owned(), curve)
            .with_location("South Spit".to_owned())
            .with_test_date(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());

        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["location"], "South Spit");
        assert_eq!(json["tested_on"], "2025-04-02");

        let restored: Sample = serde_json::from_value(json).unwrap();
        assert_eq!(restored.uuid(), sample.uuid());
        assert_eq!(restored.location(), Some("South Spit"));
        assert_eq!(restored.tested_on(), NaiveDate::from_ymd_opt(2025, 4, 2));
    }
}
