use std::cell::Cell;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::analysis::analyzer::{
    AnalyzerSettings,
    SieveAnalyzer
};
use crate::criteria::criteriaspec::CriteriaSpec;
use crate::criteria::criteriaspecmanager::CriteriaSpecManager;
use crate::envelope::envelopespec::EnvelopeSpec;
use crate::envelope::envelopespecmanager::EnvelopeSpecManager;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    analyzer: Option<AnalyzerSettings>,
    #[serde(default)]
    criteria: Vec<serde_json::Value>,
    #[serde(default)]
    envelope: Vec<serde_json::Value>
}

/// Analyzer settings plus the named criteria and envelope presets of one
/// configuration document. Loading more than one document merges them; a
/// later preset replaces an earlier one of the same name.
pub struct Configuration {
    analyzer_settings_cell: Cell<AnalyzerSettings>,
    criteria_spec_manager: Manager<CriteriaSpec>,
    envelope_spec_manager: Manager<EnvelopeSpec>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            analyzer_settings_cell: Cell::new(AnalyzerSettings::default()),
            criteria_spec_manager: CriteriaSpecManager::new(),
            envelope_spec_manager: EnvelopeSpecManager::new()
        }
    }

    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        self.analyzer_settings_cell.get()
    }

    pub fn analyzer(&self) -> SieveAnalyzer {
        SieveAnalyzer::new(self.analyzer_settings())
    }

    pub fn criteria_spec_manager(&self) -> &Manager<CriteriaSpec> {
        &self.criteria_spec_manager
    }

    pub fn envelope_spec_manager(&self) -> &Manager<EnvelopeSpec> {
        &self.envelope_spec_manager
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(BufReader::new(file))?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.criteria_spec_manager.insert_obj_from_json_vec(&json_prop.criteria)?;
        self.envelope_spec_manager.insert_obj_from_json_vec(&json_prop.envelope)?;
        if let Some(settings) = json_prop.analyzer {
            self.analyzer_settings_cell.set(settings);
        }
        info!(
            criteria = json_prop.criteria.len(),
            envelopes = json_prop.envelope.len(),
            fine_reference_size = self.analyzer_settings().fine_reference_size(),
            "configuration loaded"
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::interval::Interval;

    const CONFIG: &str = r#"{
        "analyzer": { "fine_reference_size": 0.075 },
        "criteria": [
            { "name": "BeachNourishment",
              "d50": { "min": 0.3, "max": 0.5 },
              "cu":  { "min": 1.5, "max": 2.5 },
              "so":  { "max": 2.0, "max_inclusive": false },
              "fines": { "max": 5.0, "max_inclusive": false } }
        ],
        "envelope": [
            { "name": "BeachSand035", "d50_min": 0.35, "d50_max": 0.35,
              "cu_min": 1.5, "cu_max": 2.5, "fines_max": 5.0 }
        ]
    }"#;

    #[test]
    fn loads_all_sections() {
        let config = Configuration::new();
        config.from_json_str(CONFIG).unwrap();

        assert_eq!(config.analyzer().settings().fine_reference_size(), 0.075);
        let criteria = config.criteria_spec_manager().get("BeachNourishment").unwrap();
        assert_eq!(criteria.cu, Interval::closed(1.5, 2.5));
        let envelope = config.envelope_spec_manager().get("BeachSand035").unwrap();
        assert_eq!(envelope, EnvelopeSpec::with_target_d50(0.35, 1.5, 2.5, 5.0));
    }

    #[test]
    fn missing_sections_keep_defaults() {
        let config = Configuration::new();
        config.from_json_str("{}").unwrap();
        assert_eq!(config.analyzer_settings(), AnalyzerSettings::default());
        assert!(config.criteria_spec_manager().names().is_empty());
    }

    #[test]
    fn invalid_envelope_fails_the_load() {
        let config = Configuration::new();
        let err = config.from_json_str(r#"{
            "envelope": [{ "name": "bad", "d50_min": 0.5, "d50_max": 0.3,
                           "cu_min": 1.5, "cu_max": 2.5, "fines_max": 5.0 }]
        }"#).unwrap_err();
        assert!(matches!(err, ManagerError::Envelope { ref name, .. } if name == "bad"));
    }
}
